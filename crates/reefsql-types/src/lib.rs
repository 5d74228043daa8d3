//! ReefSQL Type System
//!
//! This crate provides the type system for the engine:
//! - Data type definitions (INTEGER, REAL, TEXT, DATE, BOOLEAN)
//! - Runtime value representation including NULL
//! - Comparison rules with SQL three-valued semantics

mod comparison;
mod data_type;
mod date;
mod display;
mod value;

pub use data_type::DataType;
pub use date::Date;
pub use value::SqlValue;

#[cfg(test)]
mod tests;
