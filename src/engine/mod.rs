//! The [`Amm`] instruction engine.
//!
//! Wires the pool core to a [`CustodyService`](crate::traits::CustodyService):
//! pure planning from [`crate::pool`], atomic token movement from
//! [`crate::custody`], and the commit into the pool directory.

mod amm;

pub use amm::Amm;
