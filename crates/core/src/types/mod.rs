//! Core types for Order Desk.
//!
//! This module provides type-safe wrappers for the customer order domain.

pub mod api;
pub mod customer;
pub mod id;
pub mod status;

pub use api::CustomerNotFound;
pub use customer::{CustomerPatch, CustomerRecord};
pub use id::RecordId;
pub use status::*;
