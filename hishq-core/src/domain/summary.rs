//! Range-wide summary figures reported alongside the quote rows.

use serde::{Deserialize, Serialize};

/// Aggregate figures for the whole queried range.
///
/// The provider reports these as a positional array with a label in slot 0;
/// any position the array does not reach is an empty string, never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeSummary {
    pub period: String,
    pub change_amount: String,
    pub change_percent: String,
    pub lowest: String,
    pub highest: String,
    pub total_volume: String,
    pub total_amount: String,
    pub turnover_rate: String,
}

impl RangeSummary {
    /// Build from the provider's positional summary array.
    ///
    /// Position 0 is the provider's label slot and is skipped; positions
    /// 1 through 8 map to the named fields. Bounds-checked: short or empty
    /// input yields empty strings for the missing fields. Never fails.
    pub fn from_positional(values: &[String]) -> Self {
        let value = |i: usize| values.get(i).cloned().unwrap_or_default();
        Self {
            period: value(1),
            change_amount: value(2),
            change_percent: value(3),
            lowest: value(4),
            highest: value(5),
            total_volume: value(6),
            total_amount: value(7),
            turnover_rate: value(8),
        }
    }

    /// True when no position carried a value.
    pub fn is_empty(&self) -> bool {
        self.period.is_empty()
            && self.change_amount.is_empty()
            && self.change_percent.is_empty()
            && self.lowest.is_empty()
            && self.highest.is_empty()
            && self.total_volume.is_empty()
            && self.total_amount.is_empty()
            && self.turnover_rate.is_empty()
    }
}
