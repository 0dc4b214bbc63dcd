//! Order Desk Core - Shared types library.
//!
//! This crate provides the types shared by all Order Desk components:
//! - `admin` - The customer order CRUD service (JSON file backed)
//! - `dashboard` - Client view-model consuming the admin API
//! - `cli` - Command-line access to the admin API
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no file access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Customer records, partial updates, enumerated fields and API bodies

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
