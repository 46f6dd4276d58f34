//! Property-based tests for the pool invariants.
//!
//! 1. **Custody correspondence**: after every successful or failed
//!    instruction, both vault balances equal the pool's reserves.
//! 2. **Product monotonicity**: no swap decreases `reserve0 · reserve1`.
//! 3. **Quote/swap agreement**: executing a swap applies exactly the
//!    previewed quote.
//! 4. **Order independence**: a pair's identity ignores argument order.
//! 5. **Failure atomicity**: a rejected instruction leaves the pool record
//!    and every balance unchanged.

use proptest::prelude::*;

use crate::config::{AmmConfig, DepositPolicy};
use crate::custody::MemoryLedger;
use crate::domain::{Address, Amount, PoolId, SwapDirection, UserAccounts};
use crate::engine::Amm;
use crate::pool::PoolDirectory;
use crate::traits::CustodyService;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

const FUNDING: u64 = 1_000_000_000;

fn addr(b: u8) -> Address {
    Address::from_bytes([b; 32])
}

fn funded_amm(policy: DepositPolicy) -> (Amm<MemoryLedger>, PoolId, UserAccounts) {
    let mut ledger = MemoryLedger::new();
    let (Ok(a0), Ok(a1)) = (
        ledger.open_account(addr(9), addr(1)),
        ledger.open_account(addr(9), addr(2)),
    ) else {
        panic!("open accounts");
    };
    for acct in [a0, a1] {
        let Ok(()) = ledger.mint_to(acct, Amount::new(FUNDING)) else {
            panic!("mint");
        };
    }
    let Ok(mut amm) = Amm::new(AmmConfig::default().with_deposit_policy(policy), ledger) else {
        panic!("valid config");
    };
    let Ok(pool) = amm.initialize_pool(addr(1), addr(2)) else {
        panic!("new pool");
    };
    (amm, pool.id(), UserAccounts::new(addr(9), a0, a1))
}

fn user_balances(amm: &Amm<MemoryLedger>, user: &UserAccounts) -> (Amount, Amount) {
    let (Ok(b0), Ok(b1)) = (
        amm.custody().balance_of(&user.token0_account),
        amm.custody().balance_of(&user.token1_account),
    ) else {
        panic!("known accounts");
    };
    (b0, b1)
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Seed reserves in [1, 10_000_000].
fn reserve_strategy() -> impl Strategy<Value = u64> {
    1u64..=10_000_000u64
}

/// One instruction in a random sequence.
#[derive(Debug, Clone)]
enum Op {
    Deposit(u64, u64),
    Swap(SwapDirection, u64),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u64..=1_000_000, 0u64..=1_000_000).prop_map(|(a, b)| Op::Deposit(a, b)),
        (any::<bool>(), 0u64..=5_000_000).prop_map(|(flip, amt)| {
            let dir = if flip {
                SwapDirection::Token1ToToken0
            } else {
                SwapDirection::Token0ToToken1
            };
            Op::Swap(dir, amt)
        }),
    ]
}

fn policy_strategy() -> impl Strategy<Value = DepositPolicy> {
    prop_oneof![
        Just(DepositPolicy::Clamp),
        (0u16..=1_000).prop_map(|tolerance_bps| DepositPolicy::ExactRatio { tolerance_bps }),
    ]
}

// ---------------------------------------------------------------------------
// Properties 1 and 5: custody correspondence and failure atomicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_custody_matches_reserves_after_every_op(
        r0 in reserve_strategy(),
        r1 in reserve_strategy(),
        policy in policy_strategy(),
        ops in prop::collection::vec(op_strategy(), 1..24),
    ) {
        let (mut amm, id, user) = funded_amm(policy);
        prop_assert!(amm
            .provide_liquidity(&id, &user, Amount::new(r0), Amount::new(r1))
            .is_ok());
        prop_assert_eq!(amm.verify_custody(&id), Ok(()));

        for op in ops {
            let Ok(before) = amm.pool(&id).copied() else {
                panic!("pool exists");
            };
            let balances_before = user_balances(&amm, &user);

            let ok = match op {
                Op::Deposit(a, b) => amm
                    .provide_liquidity(&id, &user, Amount::new(a), Amount::new(b))
                    .is_ok(),
                Op::Swap(dir, amt) => amm.swap(&id, &user, dir, Amount::new(amt)).is_ok(),
            };

            prop_assert_eq!(amm.verify_custody(&id), Ok(()));
            if !ok {
                prop_assert_eq!(amm.pool(&id).copied(), Ok(before));
                prop_assert_eq!(user_balances(&amm, &user), balances_before);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Properties 2 and 3: product monotonicity, quote/swap agreement
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_swap_never_decreases_product(
        r0 in reserve_strategy(),
        r1 in reserve_strategy(),
        amount in 1u64..=50_000_000u64,
        flip in any::<bool>(),
    ) {
        let (mut amm, id, user) = funded_amm(DepositPolicy::Clamp);
        let Ok(seeded) = amm.provide_liquidity(&id, &user, Amount::new(r0), Amount::new(r1)) else {
            panic!("seed deposit");
        };
        let dir = if flip { SwapDirection::Token1ToToken0 } else { SwapDirection::Token0ToToken1 };

        let quote = amm.quote_swap(&id, dir, Amount::new(amount));
        let Ok(receipt) = amm.swap(&id, &user, dir, Amount::new(amount)) else {
            prop_assert!(quote.is_err());
            return Ok(());
        };

        prop_assert_eq!(quote, Ok(receipt.quote));
        prop_assert!(receipt.pool.invariant() >= seeded.pool.invariant());
        prop_assert!(receipt.quote.amount_out().get() > 0);
        prop_assert!(receipt.pool.reserve(dir.output_side()).get() > 0);
    }

    #[test]
    fn prop_round_trip_never_profits(
        r0 in reserve_strategy(),
        r1 in reserve_strategy(),
        amount in 1u64..=10_000_000u64,
    ) {
        let (mut amm, id, user) = funded_amm(DepositPolicy::Clamp);
        prop_assert!(amm
            .provide_liquidity(&id, &user, Amount::new(r0), Amount::new(r1))
            .is_ok());

        let Ok(there) = amm.swap(&id, &user, SwapDirection::Token0ToToken1, Amount::new(amount)) else {
            return Ok(());
        };
        let Ok(back) = amm.swap(&id, &user, SwapDirection::Token1ToToken0, there.quote.amount_out()) else {
            return Ok(());
        };
        prop_assert!(
            back.quote.amount_out() <= Amount::new(amount),
            "round trip returned {} for {}",
            back.quote.amount_out(),
            amount
        );
    }
}

// ---------------------------------------------------------------------------
// Property 4: identity order independence
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_identity_ignores_order(a in any::<[u8; 32]>(), b in any::<[u8; 32]>()) {
        let dir = PoolDirectory::new(b"XYK_AMM_POOL_V1");
        let (a, b) = (Address::from_bytes(a), Address::from_bytes(b));
        if a == b {
            prop_assert!(dir.derive_identity(a, b).is_err());
        } else {
            prop_assert_eq!(dir.derive_identity(a, b), dir.derive_identity(b, a));
        }
    }
}
