//! Expense model
//!
//! Represents a single recorded spending event and its flat-file line format.
//!
//! The line format is a bare comma-separated triple with no quoting or
//! escaping: `<amount>,<category>,<description>`. Only the first two commas
//! delimit fields, so a description may contain commas, but a category that
//! contains one will corrupt the record on the next parse. This is a known
//! limitation of the format, kept for compatibility with existing files.

use std::fmt;

use crate::error::{OutlayError, OutlayResult};

/// The field separator used by the ledger line format
pub const SEPARATOR: char = ',';

/// A single recorded spending event
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    /// Amount spent. Non-negativity is not enforced.
    pub amount: f64,

    /// Free-text label. Must not contain the separator for a faithful
    /// round trip; the model does not validate this.
    pub category: String,

    /// Free-text note. May contain the separator (last field).
    pub description: String,
}

impl Expense {
    /// Create a new expense
    pub fn new(amount: f64, category: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            amount,
            category: category.into(),
            description: description.into(),
        }
    }

    /// Serialize to one ledger line, including the trailing newline
    ///
    /// Fields are written verbatim, no escaping. The amount uses the default
    /// float formatting, so `12.5` writes as `12.5` and `5.0` as `5`.
    pub fn to_line(&self) -> String {
        format!(
            "{}{}{}{}{}\n",
            self.amount, SEPARATOR, self.category, SEPARATOR, self.description
        )
    }

    /// Parse one ledger line
    ///
    /// The line is trimmed of surrounding whitespace before splitting, which
    /// also strips trailing whitespace from the description since it is the
    /// last field. Splits on the first two separators only.
    ///
    /// # Errors
    ///
    /// Returns [`OutlayError::Format`] when the line has fewer than three
    /// fields or the amount is not a number. Empty category and description
    /// are accepted.
    pub fn parse_line(line: &str) -> OutlayResult<Self> {
        let trimmed = line.trim();
        let mut fields = trimmed.splitn(3, SEPARATOR);

        let amount_str = fields.next().unwrap_or_default();
        let category = fields.next().ok_or_else(|| {
            OutlayError::Format(format!("expected 3 fields, found 1: {:?}", trimmed))
        })?;
        let description = fields.next().ok_or_else(|| {
            OutlayError::Format(format!("expected 3 fields, found 2: {:?}", trimmed))
        })?;

        let amount: f64 = amount_str.parse().map_err(|_| {
            OutlayError::Format(format!("invalid amount {:?}", amount_str))
        })?;

        Ok(Self {
            amount,
            category: category.to_string(),
            description: description.to_string(),
        })
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Amount: {}, Category: {}, Description: {}",
            self.amount, self.category, self.description
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_line() {
        let expense = Expense::new(12.5, "food", "lunch");
        assert_eq!(expense.to_line(), "12.5,food,lunch\n");
    }

    #[test]
    fn test_parse_line() {
        let expense = Expense::parse_line("12.5,food,lunch\n").unwrap();
        assert_eq!(expense, Expense::new(12.5, "food", "lunch"));
    }

    #[test]
    fn test_round_trip() {
        let original = Expense::new(42.75, "transport", "monthly bus pass");
        let parsed = Expense::parse_line(&original.to_line()).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_description_keeps_embedded_separators() {
        let expense = Expense::parse_line("5,transport,taxi, downtown").unwrap();
        assert_eq!(expense.amount, 5.0);
        assert_eq!(expense.category, "transport");
        assert_eq!(expense.description, "taxi, downtown");
    }

    #[test]
    fn test_description_trimmed_by_round_trip() {
        // Known edge case: the whole line is trimmed before splitting, so
        // trailing whitespace on the description does not survive a reload.
        let original = Expense::new(3.0, "coffee", "espresso  ");
        let parsed = Expense::parse_line(&original.to_line()).unwrap();
        assert_eq!(parsed.description, "espresso");
    }

    #[test]
    fn test_empty_category_and_description_accepted() {
        let expense = Expense::parse_line("10,,").unwrap();
        assert_eq!(expense.amount, 10.0);
        assert_eq!(expense.category, "");
        assert_eq!(expense.description, "");
    }

    #[test]
    fn test_too_few_fields_rejected() {
        let err = Expense::parse_line("12.5,food").unwrap_err();
        assert!(err.is_format());

        let err = Expense::parse_line("12.5").unwrap_err();
        assert!(err.is_format());
    }

    #[test]
    fn test_non_numeric_amount_rejected() {
        let err = Expense::parse_line("abc,food,lunch").unwrap_err();
        assert!(err.is_format());
    }

    #[test]
    fn test_negative_amount_not_enforced() {
        let expense = Expense::parse_line("-4.5,refund,returned charger").unwrap();
        assert_eq!(expense.amount, -4.5);
    }

    #[test]
    fn test_display() {
        let expense = Expense::new(12.5, "food", "lunch");
        assert_eq!(
            expense.to_string(),
            "Amount: 12.5, Category: food, Description: lunch"
        );
    }
}
