//! Reusable TUI components

pub mod data_table;
pub mod text_field;

pub use data_table::{CountryTable, CountryTableConfig};
pub use text_field::{TextField, TextFieldSize, TextFieldVariant};
