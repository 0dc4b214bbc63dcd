//! Presentation helpers shared by dashboard front ends.

pub mod data_table;

pub use data_table::{ColumnKey, DataTableConfig, TableColumn, customers_table_config};
