//! Query parameters for a single history fetch.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::data::provider::QuoteError;

/// Sampling interval for historical quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Interval {
    Daily,
    Weekly,
    Monthly,
}

impl Interval {
    /// Single-letter code the provider expects in the `period` parameter.
    pub fn provider_code(&self) -> &'static str {
        match self {
            Interval::Daily => "d",
            Interval::Weekly => "w",
            Interval::Monthly => "m",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Interval::Daily => "daily",
            Interval::Weekly => "weekly",
            Interval::Monthly => "monthly",
        };
        f.write_str(name)
    }
}

impl FromStr for Interval {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "daily" | "d" => Ok(Interval::Daily),
            "weekly" | "w" => Ok(Interval::Weekly),
            "monthly" | "m" => Ok(Interval::Monthly),
            other => Err(QuoteError::InvalidRequest(format!(
                "unknown interval '{other}' (expected daily, weekly, or monthly)"
            ))),
        }
    }
}

/// Validated parameters for one history query.
///
/// Dates are kept in the provider's 8-digit `YYYYMMDD` string form; the
/// constructor checks they are real calendar dates. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    ticker: String,
    start: String,
    end: String,
    interval: Interval,
}

impl QuoteRequest {
    pub fn new(
        ticker: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
        interval: Interval,
    ) -> Result<Self, QuoteError> {
        let ticker = ticker.into();
        if ticker.trim().is_empty() {
            return Err(QuoteError::InvalidRequest("ticker is empty".into()));
        }
        let start = start.into();
        let end = end.into();
        validate_date(&start)?;
        validate_date(&end)?;
        Ok(Self {
            ticker,
            start,
            end,
            interval,
        })
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    pub fn interval(&self) -> Interval {
        self.interval
    }

    /// Bare symbol with the market prefix removed (`cn_600919` -> `600919`).
    ///
    /// Used to scope the referer to the ticker's quote page.
    pub fn symbol(&self) -> &str {
        self.ticker
            .split_once('_')
            .map(|(_, sym)| sym)
            .unwrap_or(&self.ticker)
    }
}

fn validate_date(s: &str) -> Result<(), QuoteError> {
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(QuoteError::InvalidRequest(format!(
            "date '{s}' is not in YYYYMMDD form"
        )));
    }
    NaiveDate::parse_from_str(s, "%Y%m%d").map_err(|_| {
        QuoteError::InvalidRequest(format!("date '{s}' is not a valid calendar date"))
    })?;
    Ok(())
}
