//! Business logic services for admin.
//!
//! # Services
//!
//! - `customers` - Customer order CRUD over the JSON record store

pub mod customers;

pub use customers::CustomerService;
