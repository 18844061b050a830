//! Row models, one module per table.

pub mod dish;
pub mod ingredient;
