//! Trait seams between the pool core and its collaborators.
//!
//! [`CustodyService`] is the only external dependency of the engine:
//! vault creation, token transfers and balance reads all go through it.

mod custody_service;

pub use custody_service::CustodyService;
