//! Core data models for outlay
//!
//! The single domain entity is the expense record and its line format.

pub mod expense;

pub use expense::{Expense, SEPARATOR};
