//! Order Desk Dashboard - Client view-model for the admin API.
//!
//! Holds a local copy of the customer list and derives the table from it
//! without extra round-trips: search, column sorting, and paging. The
//! add/edit form lives here too.
//!
//! # Modules
//!
//! - [`client`] - `reqwest` client and the [`CustomerApi`] seam
//! - [`search`] - Name / tracking id search
//! - [`sort`] - Column sorting
//! - [`pagination`] - Page window over the filtered rows
//! - [`form`] - Add/Edit draft and validation
//! - [`view_model`] - [`CustomerDashboard`], tying the above together
//! - [`components`] - Table layout and cell rendering

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod client;
pub mod components;
pub mod form;
pub mod pagination;
pub mod search;
pub mod sort;
pub mod view_model;

pub use client::{ApiClient, ClientError, CustomerApi};
pub use form::{CustomerDraft, CustomerForm, FormError, FormField, FormMode, Submission};
pub use pagination::Pagination;
pub use search::SearchQuery;
pub use sort::{SortColumn, SortDirection, SortState};
pub use view_model::{CustomerDashboard, DashboardError};
