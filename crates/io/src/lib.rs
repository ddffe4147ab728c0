// File I/O operations

pub mod csv;
pub mod load;
pub mod report;
pub mod xlsx;

pub use load::{is_supported, load_table, SUPPORTED_EXTENSIONS};
