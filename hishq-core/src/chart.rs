//! Chart-ready series derived from a quote history.

use serde::Serialize;

use crate::domain::QuoteHistory;

/// Parallel vectors for the trend/candlestick chart, in history order.
///
/// Price fields are parsed from the row's decimal strings; empty or
/// unparseable values become `0.0` so the series always lines up with
/// `dates`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartSeries {
    pub dates: Vec<String>,
    pub opens: Vec<f64>,
    pub closes: Vec<f64>,
    pub highs: Vec<f64>,
    pub lows: Vec<f64>,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// Series over the full history.
pub fn chart_series(history: &QuoteHistory) -> ChartSeries {
    series(history, usize::MAX)
}

/// Series capped at the first `max_points` entries.
pub fn chart_series_head(history: &QuoteHistory, max_points: usize) -> ChartSeries {
    series(history, max_points)
}

fn series(history: &QuoteHistory, max_points: usize) -> ChartSeries {
    let mut out = ChartSeries::default();
    for (date, row) in history.iter().take(max_points) {
        out.dates.push(date.to_string());
        out.opens.push(price(&row.open));
        out.closes.push(price(&row.close));
        out.highs.push(price(&row.high));
        out.lows.push(price(&row.low));
    }
    out
}

fn price(field: &str) -> f64 {
    field.trim().parse().unwrap_or(0.0)
}
