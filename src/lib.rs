//! outlay - Flat-file personal expense tracker
//!
//! This library provides the core functionality for the outlay expense
//! tracker: a single in-memory expense list mirrored to a plain text file,
//! one comma-separated record per line.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: The expense record and its line format
//! - `storage`: The flat-file ledger
//! - `display`: Terminal output formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use outlay::models::Expense;
//! use outlay::storage::Ledger;
//!
//! let mut ledger = Ledger::load("expenses.csv")?;
//! ledger.add(Expense::new(12.5, "food", "lunch"))?;
//! println!("total: {}", ledger.total());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod storage;

pub use error::{OutlayError, OutlayResult};
