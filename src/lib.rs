//! # XYK AMM
//!
//! Constant-product automated market maker core: custodied two-token
//! pools that accept liquidity deposits and execute swaps along
//! `reserve0 · reserve1 = k`, with all-or-nothing state transitions.
//!
//! The crate owns the pool records and the pricing arithmetic.  Token
//! custody (vault accounts, transfers, balances) stays behind the
//! [`CustodyService`](traits::CustodyService) trait; [`MemoryLedger`](custody::MemoryLedger)
//! is a complete in-memory implementation for simulations and tests.
//!
//! # Guarantees
//!
//! - Between instructions, each pool's `reserve0`/`reserve1` equal the
//!   custody balances of its two vaults.
//! - A swap never decreases `reserve0 · reserve1`.  The new output reserve
//!   is rounded up, so rounding remainders stay in the pool.
//! - At most one pool exists per unordered token pair.
//! - A failed instruction changes no pool record and no balance.
//! - Only a pool's own authority signs for its vaults, and user accounts
//!   are debited only under their owner's authority.
//!
//! # Quick Start
//!
//! ```rust
//! use xyk_amm::prelude::*;
//!
//! let usdc = Address::from_bytes([1u8; 32]);
//! let wsol = Address::from_bytes([2u8; 32]);
//! let trader = Address::from_bytes([7u8; 32]);
//!
//! // 1. Fund the trader's accounts with the reference custody ledger
//! let mut ledger = MemoryLedger::new();
//! let usdc_acct = ledger.open_account(trader, usdc).expect("open");
//! let wsol_acct = ledger.open_account(trader, wsol).expect("open");
//! ledger.mint_to(usdc_acct, Amount::new(1_000)).expect("known account");
//! ledger.mint_to(wsol_acct, Amount::new(1_000)).expect("known account");
//! let accounts = UserAccounts::new(trader, usdc_acct, wsol_acct);
//!
//! // 2. Create the pool and seed it
//! let mut amm = Amm::new(AmmConfig::default(), ledger).expect("valid config");
//! let pool = amm.initialize_pool(usdc, wsol).expect("new pair");
//! amm.provide_liquidity(&pool.id(), &accounts, Amount::new(25), Amount::new(10))
//!     .expect("deposit");
//!
//! // 3. Swap 25 token0 for token1
//! let receipt = amm
//!     .swap(&pool.id(), &accounts, SwapDirection::Token0ToToken1, Amount::new(25))
//!     .expect("swap");
//!
//! assert_eq!(receipt.quote.amount_out(), Amount::new(5));
//! assert!(amm.verify_custody(&pool.id()).is_ok());
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Caller     │  initialize_pool / provide_liquidity / swap
//! └──────┬──────┘
//!        ▼
//! ┌─────────────┐
//! │  Amm engine  │  plan → execute_atomically → commit
//! └──┬───────┬──┘
//!    │       │
//!    ▼       ▼
//! ┌──────┐ ┌────────────────┐
//! │ pool │ │    custody     │  Transfer batches over a CustodyService
//! └──┬───┘ └────────────────┘
//!    ▼
//! ┌─────────────┐
//! │ math/domain  │  Amount, PoolState, checked u128 arithmetic
//! └─────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Amount`](domain::Amount), [`TokenPair`](domain::TokenPair), [`PoolState`](domain::PoolState), receipts |
//! | [`math`] | Checked and widened arithmetic, rounding, the curve step |
//! | [`pool`] | [`PoolDirectory`](pool::PoolDirectory), deposit planning, swap pricing |
//! | [`custody`] | Atomic transfer batches and [`MemoryLedger`](custody::MemoryLedger) |
//! | [`engine`] | The [`Amm`](engine::Amm) instruction engine |
//! | [`config`] | [`AmmConfig`](config::AmmConfig) and [`DepositPolicy`](config::DepositPolicy) |
//! | [`traits`] | The [`CustodyService`](traits::CustodyService) seam |
//! | [`error`] | [`AmmError`](error::AmmError) and [`CustodyError`](error::CustodyError) |
//! | [`prelude`] | Convenience re-exports |
//!
//! # Logging
//!
//! Instructions emit [`tracing`] events: `info` on pool creation, `debug`
//! on deposits and swaps, `warn` when custody rejects an instruction and
//! `error` if a compensating transfer fails.  No subscriber is installed.

pub mod config;
pub mod custody;
pub mod domain;
pub mod engine;
pub mod error;
pub mod math;
pub mod pool;
pub mod prelude;
pub mod traits;
