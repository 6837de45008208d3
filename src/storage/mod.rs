//! Flat-file storage layer
//!
//! One backing file, loaded whole at startup and rewritten whole on every
//! mutation.

pub mod ledger;

pub use ledger::Ledger;
