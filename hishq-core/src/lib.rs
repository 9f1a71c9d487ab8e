//! hishq core — historical quote fetch, decode, and aggregation.
//!
//! The pipeline: a validated [`domain::QuoteRequest`] goes to a
//! [`data::QuoteProvider`] (the blocking [`data::SohuHisHq`] client in
//! production), the raw JSONP response is decoded into an ordered
//! [`domain::QuoteHistory`] plus positional summary values, a
//! [`domain::RangeSummary`] is built from those values, and the pair is
//! committed atomically into a [`session::Session`]. The [`chart`] and
//! [`export`] modules derive presentation-ready views from a committed
//! history.

pub mod chart;
pub mod config;
pub mod data;
pub mod domain;
pub mod export;
pub mod service;
pub mod session;

pub use chart::{chart_series, chart_series_head, ChartSeries};
pub use config::ClientConfig;
pub use data::{decode, DecodedResponse, QuoteError, QuoteProvider, SohuHisHq};
pub use domain::{Interval, QuoteHistory, QuoteRequest, QuoteRow, RangeSummary};
pub use export::{csv_filename, to_csv, CSV_HEADER};
pub use service::fetch_history;
pub use session::{Session, SessionData, SessionSnapshot, SessionStore};

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: pipeline types cross thread boundaries.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<domain::QuoteRequest>();
        require_sync::<domain::QuoteRequest>();
        require_send::<domain::QuoteHistory>();
        require_sync::<domain::QuoteHistory>();
        require_send::<domain::RangeSummary>();
        require_sync::<domain::RangeSummary>();
        require_send::<session::Session>();
        require_sync::<session::Session>();
        require_send::<session::SessionStore>();
        require_sync::<session::SessionStore>();
        require_send::<data::SohuHisHq>();
        require_sync::<data::SohuHisHq>();
    }
}
