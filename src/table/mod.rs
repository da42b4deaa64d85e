//! Cayley tables

mod cayley_table;

pub use cayley_table::CayleyTable;
