//! Fundamental domain value types.
//!
//! Identities (token mints, owners, pools), quantities (amounts and
//! shares), custody handles, the persisted pool record and the receipts
//! returned by instructions.  Quantities are newtypes with checked
//! arithmetic; identities are plain 32-byte values with a total order.

mod accounts;
mod address;
mod amount;
mod direction;
mod pool_id;
mod pool_state;
mod receipts;
mod shares;
mod token_pair;

pub use accounts::{AccountRef, UserAccounts, VaultRef};
pub use address::Address;
pub use amount::Amount;
pub use direction::{Side, SwapDirection};
pub use pool_id::PoolId;
pub use pool_state::PoolState;
pub use receipts::{DepositReceipt, SwapQuote, SwapReceipt};
pub use shares::Shares;
pub use token_pair::TokenPair;
