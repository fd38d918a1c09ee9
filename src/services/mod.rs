//! Service layer for check execution
//!
//! Services encapsulate the business logic of running a check against the
//! catalog.

pub mod check_service;

pub use check_service::CheckService;
