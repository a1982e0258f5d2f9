//! Client/server synchronization of per-item read state.
//!
//! An item's read flag only ever moves unread -> read on the client, and
//! only after the server has confirmed the transition. On any failure the
//! local state (and with it the mark-read affordance) is left untouched.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use myrss_shared::{ApiError, MarkReadRequest};
use uuid::Uuid;

use crate::ApiClient;

/// The read-marking endpoint, as seen from the synchronizer.
#[async_trait(?Send)]
pub trait MarkReadApi {
    async fn mark_read(&self, request: &MarkReadRequest) -> Result<(), ApiError>;
}

#[async_trait(?Send)]
impl MarkReadApi for ApiClient {
    async fn mark_read(&self, request: &MarkReadRequest) -> Result<(), ApiError> {
        ApiClient::mark_read(self, request).await
    }
}

/// Receives confirmed read-state transitions and applies them to
/// whatever holds the rendered item state.
pub trait ReadStateSink {
    fn apply_read(&self, item_ids: &[Uuid]);
}

/// Why a mark-read attempt failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkReadError {
    /// The request could not be sent or its response could not be read.
    Network(String),
    /// The server answered with a non-success status.
    ServerRejected { status: u16 },
}

impl fmt::Display for MarkReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkReadError::Network(msg) => write!(f, "network error: {msg}"),
            MarkReadError::ServerRejected { status } => {
                write!(f, "server rejected mark-read (HTTP {status})")
            }
        }
    }
}

impl std::error::Error for MarkReadError {}

/// Marks items read on the server and, only on confirmed success,
/// applies the transition locally through the injected sink.
#[derive(Clone)]
pub struct ReadStateSynchronizer {
    api: Arc<dyn MarkReadApi>,
    sink: Arc<dyn ReadStateSink>,
}

impl ReadStateSynchronizer {
    pub fn new(api: Arc<dyn MarkReadApi>, sink: Arc<dyn ReadStateSink>) -> Self {
        Self { api, sink }
    }

    /// Mark the given items as read.
    ///
    /// Issues exactly one request for the whole set; no retries. The sink
    /// is invoked only after the server reports success. Callers pass ids
    /// of currently-unread items; an empty set is a no-op.
    pub async fn mark_read(&self, item_ids: Vec<Uuid>) -> Result<(), MarkReadError> {
        if item_ids.is_empty() {
            return Ok(());
        }

        let request = MarkReadRequest { item_ids };
        match self.api.mark_read(&request).await {
            Ok(()) => {
                self.sink.apply_read(&request.item_ids);
                Ok(())
            }
            Err(ApiError::Http { status, .. }) => Err(MarkReadError::ServerRejected { status }),
            Err(other) => Err(MarkReadError::Network(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct StubApi {
        response: Result<(), ApiError>,
        requests: RefCell<Vec<MarkReadRequest>>,
    }

    impl StubApi {
        fn new(response: Result<(), ApiError>) -> Self {
            Self {
                response,
                requests: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl MarkReadApi for StubApi {
        async fn mark_read(&self, request: &MarkReadRequest) -> Result<(), ApiError> {
            self.requests.borrow_mut().push(request.clone());
            self.response.clone()
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        applied: RefCell<Vec<Uuid>>,
    }

    impl ReadStateSink for RecordingSink {
        fn apply_read(&self, item_ids: &[Uuid]) {
            self.applied.borrow_mut().extend_from_slice(item_ids);
        }
    }

    fn item_id() -> Uuid {
        Uuid::parse_str("4b8f6a2c-1d3e-4f5a-9b7c-8d6e5f4a3b2c").unwrap()
    }

    #[tokio::test]
    async fn success_applies_read_state_through_the_sink() {
        let api = Arc::new(StubApi::new(Ok(())));
        let sink = Arc::new(RecordingSink::default());
        let sync = ReadStateSynchronizer::new(api.clone(), sink.clone());

        let outcome = sync.mark_read(vec![item_id()]).await;

        assert_eq!(outcome, Ok(()));
        assert_eq!(sink.applied.borrow().as_slice(), &[item_id()]);
        assert_eq!(api.requests.borrow().len(), 1);
        assert_eq!(api.requests.borrow()[0].item_ids, vec![item_id()]);
    }

    #[tokio::test]
    async fn server_rejection_leaves_local_state_untouched() {
        let api = Arc::new(StubApi::new(Err(ApiError::Http {
            status: 500,
            body: "Failed to mark items as read".to_string(),
        })));
        let sink = Arc::new(RecordingSink::default());
        let sync = ReadStateSynchronizer::new(api, sink.clone());

        let outcome = sync.mark_read(vec![item_id()]).await;

        assert_eq!(outcome, Err(MarkReadError::ServerRejected { status: 500 }));
        assert!(sink.applied.borrow().is_empty());
    }

    #[tokio::test]
    async fn network_failure_leaves_local_state_untouched() {
        let api = Arc::new(StubApi::new(Err(ApiError::Network(
            "connection reset".to_string(),
        ))));
        let sink = Arc::new(RecordingSink::default());
        let sync = ReadStateSynchronizer::new(api, sink.clone());

        let outcome = sync.mark_read(vec![item_id()]).await;

        assert!(matches!(outcome, Err(MarkReadError::Network(_))));
        assert!(sink.applied.borrow().is_empty());
    }

    #[tokio::test]
    async fn empty_id_set_issues_no_request() {
        let api = Arc::new(StubApi::new(Ok(())));
        let sink = Arc::new(RecordingSink::default());
        let sync = ReadStateSynchronizer::new(api.clone(), sink.clone());

        assert_eq!(sync.mark_read(Vec::new()).await, Ok(()));
        assert!(api.requests.borrow().is_empty());
        assert!(sink.applied.borrow().is_empty());
    }

    #[tokio::test]
    async fn one_request_covers_the_whole_id_set() {
        let api = Arc::new(StubApi::new(Ok(())));
        let sink = Arc::new(RecordingSink::default());
        let sync = ReadStateSynchronizer::new(api.clone(), sink.clone());

        let other = Uuid::parse_str("9c1d2e3f-4a5b-6c7d-8e9f-0a1b2c3d4e5f").unwrap();
        sync.mark_read(vec![item_id(), other]).await.unwrap();

        assert_eq!(api.requests.borrow().len(), 1);
        assert_eq!(sink.applied.borrow().as_slice(), &[item_id(), other]);
    }
}
