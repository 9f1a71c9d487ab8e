//! Session-scoped query state.
//!
//! Each session holds the last attempted request plus the committed result
//! of the most recent successful fetch. The committed history/summary pair
//! lives behind a single `Arc` that is swapped whole, so a reader can never
//! observe a history from one fetch paired with a summary from another.
//!
//! Sessions are keyed by caller-supplied id and live for the whole process;
//! concurrent callers with distinct ids never see each other's results.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::{QuoteHistory, QuoteRequest, RangeSummary};

/// The pair committed by one successful fetch.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SessionData {
    pub history: QuoteHistory,
    pub summary: RangeSummary,
}

/// Point-in-time view of a session.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    /// Most recent request, recorded even when the fetch failed.
    pub request: Option<QuoteRequest>,
    /// Result of the most recent successful fetch; empty before the first.
    pub data: Arc<SessionData>,
}

struct SessionInner {
    last_request: Option<QuoteRequest>,
    committed: Arc<SessionData>,
}

/// One caller's query state.
pub struct Session {
    inner: Mutex<SessionInner>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(SessionInner {
                last_request: None,
                committed: Arc::new(SessionData::default()),
            }),
        }
    }

    /// Remember the most recent request, independent of fetch success.
    ///
    /// The UI echoes the attempted query even when the fetch fails.
    pub fn record_query(&self, req: QuoteRequest) {
        let mut inner = self.inner.lock().unwrap();
        inner.last_request = Some(req);
    }

    /// Commit the result of a successful fetch, discarding the old content.
    ///
    /// History and summary are replaced together in one assignment.
    pub fn apply(&self, data: Arc<SessionData>) {
        let mut inner = self.inner.lock().unwrap();
        inner.committed = data;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let inner = self.inner.lock().unwrap();
        SessionSnapshot {
            request: inner.last_request.clone(),
            data: Arc::clone(&inner.committed),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide registry of sessions, keyed by caller-supplied id.
///
/// Sessions are created on first use and never destroyed during the process
/// lifetime.
#[derive(Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<String, Arc<Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self, id: &str) -> Arc<Session> {
        let mut sessions = self.sessions.lock().unwrap();
        Arc::clone(
            sessions
                .entry(id.to_string())
                .or_insert_with(|| Arc::new(Session::new())),
        )
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.lock().unwrap().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Interval, QuoteRow};

    fn request() -> QuoteRequest {
        QuoteRequest::new("cn_600919", "20250101", "20250105", Interval::Daily).unwrap()
    }

    fn data(open: &str, period: &str) -> Arc<SessionData> {
        let mut history = QuoteHistory::new();
        history.insert(
            "20250102",
            QuoteRow {
                open: open.into(),
                ..QuoteRow::default()
            },
        );
        Arc::new(SessionData {
            history,
            summary: RangeSummary {
                period: period.into(),
                ..RangeSummary::default()
            },
        })
    }

    #[test]
    fn starts_empty() {
        let snap = Session::new().snapshot();
        assert!(snap.request.is_none());
        assert!(snap.data.history.is_empty());
        assert!(snap.data.summary.is_empty());
    }

    #[test]
    fn apply_then_snapshot_returns_exactly_the_committed_pair() {
        let session = Session::new();
        let committed = data("10.00", "20250101-20250105");
        session.apply(Arc::clone(&committed));
        let snap = session.snapshot();
        assert_eq!(*snap.data, *committed);
    }

    #[test]
    fn recorded_query_survives_without_a_commit() {
        let session = Session::new();
        session.record_query(request());
        let snap = session.snapshot();
        assert_eq!(snap.request, Some(request()));
        assert!(snap.data.history.is_empty());
    }

    #[test]
    fn later_commit_discards_earlier_content() {
        let session = Session::new();
        session.apply(data("10.00", "a"));
        session.apply(data("20.00", "b"));
        let snap = session.snapshot();
        assert_eq!(snap.data.history.get("20250102").unwrap().open, "20.00");
        assert_eq!(snap.data.summary.period, "b");
    }

    #[test]
    fn reader_holding_a_snapshot_is_unaffected_by_a_new_commit() {
        let session = Session::new();
        session.apply(data("10.00", "a"));
        let before = session.snapshot();
        session.apply(data("20.00", "b"));
        assert_eq!(before.data.summary.period, "a");
        assert_eq!(session.snapshot().data.summary.period, "b");
    }

    #[test]
    fn store_returns_the_same_session_per_id() {
        let store = SessionStore::new();
        let a = store.session("alice");
        a.record_query(request());
        let again = store.session("alice");
        assert!(again.snapshot().request.is_some());
        let b = store.session("bob");
        assert!(b.snapshot().request.is_none());
        assert_eq!(store.len(), 2);
    }
}
