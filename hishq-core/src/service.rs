//! Fetch orchestration: client, decoder, summary, and session commit.

use std::sync::Arc;

use crate::data::decode::decode;
use crate::data::provider::{QuoteError, QuoteProvider};
use crate::domain::{QuoteRequest, RangeSummary};
use crate::session::{Session, SessionData};

/// Run one fetch end to end and commit the result into the session.
///
/// The request is recorded before the network call so the session echoes the
/// attempted query even when the fetch fails. Any stage failure propagates
/// unchanged and leaves the previously committed history/summary intact;
/// only a fully successful pipeline commits.
pub fn fetch_history(
    provider: &dyn QuoteProvider,
    session: &Session,
    req: &QuoteRequest,
) -> Result<Arc<SessionData>, QuoteError> {
    session.record_query(req.clone());

    let raw = provider.fetch_raw(req)?;
    let decoded = decode(&raw)?;
    let summary = RangeSummary::from_positional(&decoded.stat);

    log::info!(
        "{}: {} rows for {} {}..{}",
        provider.name(),
        decoded.history.len(),
        req.ticker(),
        req.start(),
        req.end()
    );

    let data = Arc::new(SessionData {
        history: decoded.history,
        summary,
    });
    session.apply(Arc::clone(&data));
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Interval;
    use std::sync::Mutex;

    /// Scripted provider: pops one canned response per call.
    struct ScriptedProvider {
        responses: Mutex<Vec<Result<String, QuoteError>>>,
    }

    impl ScriptedProvider {
        fn new(responses: Vec<Result<String, QuoteError>>) -> Self {
            Self {
                responses: Mutex::new(responses),
            }
        }

        fn repeating(raw: &str, times: usize) -> Self {
            Self::new((0..times).map(|_| Ok(raw.to_string())).collect())
        }
    }

    impl QuoteProvider for ScriptedProvider {
        fn name(&self) -> &str {
            "scripted"
        }

        fn fetch_raw(&self, _req: &QuoteRequest) -> Result<String, QuoteError> {
            self.responses
                .lock()
                .unwrap()
                .pop()
                .expect("scripted provider exhausted")
        }
    }

    fn request() -> QuoteRequest {
        QuoteRequest::new("cn_600919", "20250101", "20250105", Interval::Daily).unwrap()
    }

    const OK_ONE_ROW: &str = concat!(
        "historySearchHandler([{\"status\":\"0\",",
        "\"hq\":[[\"20250102\",\"10.00\",\"10.50\"]],",
        "\"stat\":[\"accumulated:\",\"20250102\",\"0.50\"]}])"
    );

    #[test]
    fn success_commits_history_and_summary_together() {
        let provider = ScriptedProvider::repeating(OK_ONE_ROW, 1);
        let session = Session::new();
        let data = fetch_history(&provider, &session, &request()).unwrap();
        assert_eq!(data.history.len(), 1);
        assert_eq!(data.summary.period, "20250102");
        assert_eq!(*session.snapshot().data, *data);
    }

    #[test]
    fn provider_error_leaves_previous_commit_intact() {
        let session = Session::new();
        let ok = ScriptedProvider::repeating(OK_ONE_ROW, 1);
        fetch_history(&ok, &session, &request()).unwrap();

        let rejecting =
            ScriptedProvider::repeating(r#"historySearchHandler([{"status":"-1"}])"#, 1);
        let err = fetch_history(&rejecting, &session, &request());
        assert!(matches!(err, Err(QuoteError::Provider { .. })));

        let snap = session.snapshot();
        assert_eq!(snap.data.history.len(), 1);
        assert_eq!(snap.data.summary.period, "20250102");
    }

    #[test]
    fn network_error_propagates_unchanged() {
        let failing = ScriptedProvider::new(vec![Err(QuoteError::Network("timed out".into()))]);
        let session = Session::new();
        let err = fetch_history(&failing, &session, &request());
        assert!(matches!(err, Err(QuoteError::Network(msg)) if msg == "timed out"));
        assert!(session.snapshot().data.history.is_empty());
    }

    #[test]
    fn failed_fetch_still_records_the_query() {
        let failing = ScriptedProvider::new(vec![Err(QuoteError::Network("down".into()))]);
        let session = Session::new();
        let _ = fetch_history(&failing, &session, &request());
        assert_eq!(session.snapshot().request, Some(request()));
    }

    #[test]
    fn identical_fetches_are_idempotent() {
        let provider = ScriptedProvider::repeating(OK_ONE_ROW, 2);
        let session = Session::new();
        fetch_history(&provider, &session, &request()).unwrap();
        let first = session.snapshot();
        fetch_history(&provider, &session, &request()).unwrap();
        let second = session.snapshot();
        assert_eq!(first.request, second.request);
        assert_eq!(*first.data, *second.data);
    }

    #[test]
    fn empty_hq_commits_an_empty_result() {
        let provider = ScriptedProvider::repeating(
            r#"historySearchHandler([{"status":"0","hq":[]}])"#,
            1,
        );
        let session = Session::new();
        let data = fetch_history(&provider, &session, &request()).unwrap();
        assert!(data.history.is_empty());
        assert!(data.summary.is_empty());
        assert!(session.snapshot().data.history.is_empty());
    }
}
