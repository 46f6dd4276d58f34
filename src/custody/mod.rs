//! Custody adapter: how the engine drives a [`CustodyService`].
//!
//! Instructions never call [`CustodyService::transfer`] directly.  They
//! describe their token movements as a list of [`Transfer`] legs and hand
//! them to [`execute_atomically`], which either applies every leg or
//! leaves every balance as it was.
//!
//! [`MemoryLedger`] is a complete in-memory custody service for
//! simulations and tests.
//!
//! [`CustodyService`]: crate::traits::CustodyService
//! [`CustodyService::transfer`]: crate::traits::CustodyService::transfer

mod batch;
mod memory;

pub use batch::{execute_atomically, Transfer};
pub use memory::MemoryLedger;
