//! Per-date quote rows and the ordered history they form.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One trading period's quote fields, in provider order.
///
/// Values are kept as the provider's decimal strings and may be empty;
/// numeric interpretation is left to consumers (chart, export, UI).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRow {
    pub open: String,
    pub close: String,
    pub change_amount: String,
    pub change_percent: String,
    pub low: String,
    pub high: String,
    pub volume: String,
    pub amount: String,
    pub turnover_rate: String,
}

/// Number of value fields in a row (the date key is carried separately).
pub const ROW_FIELDS: usize = 9;

impl QuoteRow {
    /// Build a row from positional values.
    ///
    /// Missing trailing positions default to the empty string; positions
    /// beyond the ninth are ignored. Never fails.
    pub fn from_fields(fields: &[String]) -> Self {
        let field = |i: usize| fields.get(i).cloned().unwrap_or_default();
        Self {
            open: field(0),
            close: field(1),
            change_amount: field(2),
            change_percent: field(3),
            low: field(4),
            high: field(5),
            volume: field(6),
            amount: field(7),
            turnover_rate: field(8),
        }
    }

    /// The nine values back in provider order.
    pub fn as_fields(&self) -> [&str; ROW_FIELDS] {
        [
            &self.open,
            &self.close,
            &self.change_amount,
            &self.change_percent,
            &self.low,
            &self.high,
            &self.volume,
            &self.amount,
            &self.turnover_rate,
        ]
    }
}

/// Ordered `date -> QuoteRow` mapping.
///
/// Preserves provider insertion order (typically descending date), which is
/// significant for display and export. Keys are unique: inserting an existing
/// date replaces that entry's row in place, so the last occurrence wins while
/// the entry keeps its original position.
#[derive(Debug, Clone, Default)]
pub struct QuoteHistory {
    entries: Vec<(String, QuoteRow)>,
    index: HashMap<String, usize>,
}

impl QuoteHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, date: impl Into<String>, row: QuoteRow) {
        let date = date.into();
        match self.index.get(&date) {
            Some(&pos) => self.entries[pos].1 = row,
            None => {
                self.index.insert(date.clone(), self.entries.len());
                self.entries.push((date, row));
            }
        }
    }

    pub fn get(&self, date: &str) -> Option<&QuoteRow> {
        self.index.get(date).map(|&pos| &self.entries[pos].1)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &QuoteRow)> {
        self.entries.iter().map(|(d, r)| (d.as_str(), r))
    }

    /// Date keys in insertion order.
    pub fn dates(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(d, _)| d.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PartialEq for QuoteHistory {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for QuoteHistory {}

impl FromIterator<(String, QuoteRow)> for QuoteHistory {
    fn from_iter<T: IntoIterator<Item = (String, QuoteRow)>>(iter: T) -> Self {
        let mut history = Self::new();
        for (date, row) in iter {
            history.insert(date, row);
        }
        history
    }
}
