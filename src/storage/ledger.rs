//! Flat-file expense ledger
//!
//! Holds the full expense list in memory and mirrors it to a single plain
//! text file, one serialized expense per line. Every mutation rewrites the
//! whole file, which is fine at personal scale.
//!
//! The file is not locked and writes are not atomic: two processes using the
//! same ledger file can race and the loser's records are overwritten. This
//! is a documented limitation, not something the ledger guards against.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{OutlayError, OutlayResult};
use crate::models::Expense;

/// In-memory expense store backed by a single text file
#[derive(Debug)]
pub struct Ledger {
    path: PathBuf,
    expenses: Vec<Expense>,
}

impl Ledger {
    /// Open a ledger, reading every record from the backing file
    ///
    /// A missing file yields an empty ledger. Blank lines are skipped; any
    /// other unparseable line aborts the load with a [`OutlayError::Format`]
    /// carrying the 1-based line number. There is no partial-load recovery.
    pub fn load(path: impl Into<PathBuf>) -> OutlayResult<Self> {
        let path = path.into();
        let mut expenses = Vec::new();

        if path.exists() {
            let file = File::open(&path).map_err(|e| {
                OutlayError::Io(format!("Failed to open {}: {}", path.display(), e))
            })?;

            for (i, line) in BufReader::new(file).lines().enumerate() {
                let line = line.map_err(|e| {
                    OutlayError::Io(format!("Failed to read {}: {}", path.display(), e))
                })?;
                if line.trim().is_empty() {
                    continue;
                }
                let expense = Expense::parse_line(&line).map_err(|e| match e {
                    OutlayError::Format(reason) => OutlayError::malformed_line(i + 1, reason),
                    other => other,
                })?;
                expenses.push(expense);
            }
        }

        Ok(Self { path, expenses })
    }

    /// The backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append an expense and immediately rewrite the backing file
    ///
    /// If the save fails the error propagates and the in-memory list still
    /// contains the new record, leaving memory and file inconsistent for the
    /// rest of the run. Callers treat a failed add as fatal.
    pub fn add(&mut self, expense: Expense) -> OutlayResult<()> {
        self.expenses.push(expense);
        self.save()
    }

    /// Rewrite the backing file from the current in-memory list
    ///
    /// Truncates and rewrites the whole file in insertion order. The file
    /// contains exactly the in-memory sequence afterwards, no more, no less.
    pub fn save(&self) -> OutlayResult<()> {
        let file = File::create(&self.path).map_err(|e| {
            OutlayError::Io(format!("Failed to write {}: {}", self.path.display(), e))
        })?;

        let mut writer = BufWriter::new(file);
        for expense in &self.expenses {
            writer.write_all(expense.to_line().as_bytes()).map_err(|e| {
                OutlayError::Io(format!("Failed to write {}: {}", self.path.display(), e))
            })?;
        }
        writer.flush().map_err(|e| {
            OutlayError::Io(format!("Failed to flush {}: {}", self.path.display(), e))
        })?;

        Ok(())
    }

    /// Iterate over expenses with their 1-based display index
    pub fn entries(&self) -> impl Iterator<Item = (usize, &Expense)> {
        self.expenses.iter().enumerate().map(|(i, e)| (i + 1, e))
    }

    /// Sum of all recorded amounts, `0` when empty
    pub fn total(&self) -> f64 {
        // Explicit 0.0 identity: `Sum for f64` starts from -0.0, which would
        // display as "-0" for an empty ledger.
        self.expenses.iter().map(|e| e.amount).fold(0.0, |acc, amount| acc + amount)
    }

    /// Number of recorded expenses
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Check whether the ledger has no expenses
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}
