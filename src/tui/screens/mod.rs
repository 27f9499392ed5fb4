//! Screen modules for each tab

pub mod inputs;
pub mod table;

pub use inputs::InputsScreen;
pub use table::TableScreen;
