//! End-to-end search flows through the public library API.
//!
//! These tests drive the session core the way the binary does: every fetch
//! action the handler emits is parked as a pending request, later completed
//! against a scripted client, and fed back as a completion event. Parking
//! requests instead of resolving them inline makes out-of-order and stale
//! deliveries expressible.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use pixquest::app::{handle_event, Action, Event, SearchSession, SearchStatus};
use pixquest::domain::{Image, PixquestError, Result, ResultPage};
use pixquest::fetch::{FetchClient, FetchRequest};
use pixquest::notify::Notifier;

fn image(id: u64) -> Image {
    Image {
        id,
        page_url: format!("https://example.com/{id}"),
        tags: "test".to_string(),
        preview_url: String::new(),
        webformat_url: String::new(),
        large_image_url: String::new(),
        user: "tester".to_string(),
        likes: 0,
    }
}

enum ScriptedResponse {
    Page(ResultPage),
    TransportError(String),
}

/// Scripted stand-in for the remote search API.
///
/// Responses are keyed by `(query, page)` and consumed in order, so a page
/// can be scripted to fail once and succeed on retry. Unscripted requests
/// fail the test immediately, and every call is recorded for assertion.
#[derive(Default)]
struct ScriptedClient {
    responses: Mutex<HashMap<(String, u32), Vec<ScriptedResponse>>>,
    calls: Mutex<Vec<(String, u32)>>,
}

impl ScriptedClient {
    fn script_page(&self, query: &str, page: u32, total_hits: u32, ids: std::ops::Range<u64>) {
        self.push(
            query,
            page,
            ScriptedResponse::Page(ResultPage {
                total_hits,
                hits: ids.map(image).collect(),
            }),
        );
    }

    fn script_failure(&self, query: &str, page: u32, message: &str) {
        self.push(
            query,
            page,
            ScriptedResponse::TransportError(message.to_string()),
        );
    }

    fn push(&self, query: &str, page: u32, response: ScriptedResponse) {
        self.responses
            .lock()
            .unwrap()
            .entry((query.to_string(), page))
            .or_default()
            .push(response);
    }

    fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl FetchClient for ScriptedClient {
    async fn search(&self, query: &str, page: u32) -> Result<ResultPage> {
        self.calls.lock().unwrap().push((query.to_string(), page));

        let mut responses = self.responses.lock().unwrap();
        let queue = responses
            .get_mut(&(query.to_string(), page))
            .unwrap_or_else(|| panic!("no scripted response for ({query:?}, page {page})"));
        assert!(
            !queue.is_empty(),
            "scripted responses for ({query:?}, page {page}) exhausted"
        );

        match queue.remove(0) {
            ScriptedResponse::Page(result_page) => Ok(result_page),
            ScriptedResponse::TransportError(message) => {
                Err(PixquestError::Io(std::io::Error::other(message)))
            }
        }
    }
}

/// Notifier that records every notice for later assertion.
#[derive(Default)]
struct RecordingNotifier {
    lines: Mutex<Vec<String>>,
}

impl Notifier for RecordingNotifier {
    fn warn(&self, message: &str) {
        self.lines.lock().unwrap().push(format!("warning: {message}"));
    }

    fn success(&self, message: &str) {
        self.lines.lock().unwrap().push(format!("success: {message}"));
    }

    fn failure(&self, message: &str) {
        self.lines.lock().unwrap().push(format!("failure: {message}"));
    }
}

/// Drives a session the way the binary's action executor does.
///
/// Fetch actions are parked in `pending` until a test completes them, which
/// is what lets tests deliver responses late or out of order.
struct Harness {
    session: SearchSession,
    client: Arc<ScriptedClient>,
    notifier: RecordingNotifier,
    pending: Vec<FetchRequest>,
    scroll_count: usize,
}

impl Harness {
    fn new(client: Arc<ScriptedClient>) -> Self {
        Self {
            session: SearchSession::new(),
            client,
            notifier: RecordingNotifier::default(),
            pending: Vec::new(),
            scroll_count: 0,
        }
    }

    fn submit(&mut self, raw: &str) {
        self.dispatch(Event::SubmitQuery(raw.to_string()));
    }

    fn load_more(&mut self) {
        self.dispatch(Event::LoadMore);
    }

    fn dispatch(&mut self, event: Event) {
        let (_, actions) = handle_event(&mut self.session, &event).expect("event handling");
        for action in actions {
            match action {
                Action::Fetch(request) => self.pending.push(request),
                Action::Notify(notice) => self.notifier.notify(&notice),
                Action::ScrollToNewResults => self.scroll_count += 1,
            }
        }
    }

    /// Completes the pending fetch at `index` against the scripted client.
    async fn complete(&mut self, index: usize) {
        let request = self.pending.remove(index);
        let outcome = self
            .client
            .search(&request.query, request.page)
            .await
            .map_err(|e| e.to_string());
        self.dispatch(Event::FetchCompleted { request, outcome });
    }

    async fn complete_next(&mut self) {
        self.complete(0).await;
    }

    fn notices(&self) -> Vec<String> {
        self.notifier.lines.lock().unwrap().clone()
    }

    fn image_ids(&self) -> Vec<u64> {
        self.session.images.iter().map(|i| i.id).collect()
    }
}

#[tokio::test]
async fn submitted_search_paginates_to_exhaustion() {
    let client = Arc::new(ScriptedClient::default());
    client.script_page("cats", 1, 25, 0..12);
    client.script_page("cats", 2, 25, 12..24);
    client.script_page("cats", 3, 25, 24..25);
    let mut harness = Harness::new(Arc::clone(&client));

    harness.submit("cats");
    assert_eq!(harness.session.query, "cats");
    assert_eq!(harness.session.page, 1);
    assert_eq!(harness.session.last_page, 0);
    assert!(harness.session.is_loading());
    assert!(harness.session.images.is_empty());
    assert_eq!(harness.pending.len(), 1);

    harness.complete_next().await;
    assert_eq!(harness.session.status, SearchStatus::Resolved);
    assert_eq!(harness.session.last_page, 3);
    assert_eq!(harness.session.images.len(), 12);
    assert!(harness.session.can_load_more());
    assert_eq!(harness.notices(), vec!["success: Hurray! 25 images found"]);

    harness.load_more();
    assert_eq!(harness.session.page, 2);
    assert!(harness.session.is_loading());

    harness.complete_next().await;
    assert_eq!(harness.session.images.len(), 24);
    assert_eq!(harness.scroll_count, 1);

    harness.load_more();
    harness.complete_next().await;
    assert_eq!(harness.session.page, 3);
    assert_eq!(harness.session.images.len(), 25);
    assert_eq!(harness.scroll_count, 2);
    assert_eq!(harness.image_ids(), (0..25).collect::<Vec<u64>>());

    // Pages are exhausted: the load-more signal drops and the event is inert.
    assert!(!harness.session.can_load_more());
    harness.load_more();
    assert!(harness.pending.is_empty());
    assert_eq!(client.call_count(), 3);
}

#[tokio::test]
async fn stale_response_for_superseded_query_is_dropped() {
    let client = Arc::new(ScriptedClient::default());
    client.script_page("dogs", 1, 99, 100..112);
    client.script_page("cats", 1, 25, 0..12);
    let mut harness = Harness::new(Arc::clone(&client));

    harness.submit("dogs");
    harness.submit("cats");
    assert_eq!(harness.pending.len(), 2);

    // The dogs response arrives first, after its session was replaced.
    harness.complete(0).await;
    assert_eq!(harness.session.query, "cats");
    assert!(harness.session.is_loading());
    assert!(harness.session.images.is_empty());
    assert_eq!(harness.session.last_page, 0);
    assert!(harness.notices().is_empty());

    harness.complete_next().await;
    assert_eq!(harness.session.status, SearchStatus::Resolved);
    assert_eq!(harness.session.last_page, 3);
    assert_eq!(harness.image_ids(), (0..12).collect::<Vec<u64>>());
    assert_eq!(harness.notices(), vec!["success: Hurray! 25 images found"]);
}

#[tokio::test]
async fn empty_submission_warns_and_changes_nothing() {
    let client = Arc::new(ScriptedClient::default());
    let mut harness = Harness::new(Arc::clone(&client));

    harness.submit("   ");

    assert_eq!(harness.session, SearchSession::new());
    assert!(harness.pending.is_empty());
    assert_eq!(client.call_count(), 0);
    assert_eq!(
        harness.notices(),
        vec!["warning: Search field is empty. Please, enter your request"]
    );
}

#[tokio::test]
async fn repeated_submission_does_not_refetch() {
    let client = Arc::new(ScriptedClient::default());
    client.script_page("cats", 1, 25, 0..12);
    let mut harness = Harness::new(Arc::clone(&client));

    harness.submit("cats");
    harness.complete_next().await;
    let before = harness.session.clone();

    harness.submit(" cats ");

    assert_eq!(harness.session, before);
    assert!(harness.pending.is_empty());
    assert_eq!(client.call_count(), 1);
}

#[tokio::test]
async fn zero_hit_search_is_rejected_with_a_notice() {
    let client = Arc::new(ScriptedClient::default());
    client.script_page("tumbleweed", 1, 0, 0..0);
    let mut harness = Harness::new(Arc::clone(&client));

    harness.submit("tumbleweed");
    harness.complete_next().await;

    assert_eq!(harness.session.status, SearchStatus::Rejected);
    assert_eq!(harness.session.last_page, 1);
    assert!(harness.session.images.is_empty());
    assert!(!harness.session.can_load_more());
    assert_eq!(
        harness.notices(),
        vec![
            "failure: Sorry, there are no images matching your search request. \
             Please try another request."
        ]
    );
}

#[tokio::test]
async fn failed_page_can_be_retried_without_skipping() {
    let client = Arc::new(ScriptedClient::default());
    client.script_page("cats", 1, 25, 0..12);
    client.script_failure("cats", 2, "connection reset");
    client.script_page("cats", 2, 25, 12..24);
    let mut harness = Harness::new(Arc::clone(&client));

    harness.submit("cats");
    harness.complete_next().await;

    harness.load_more();
    harness.complete_next().await;
    assert_eq!(harness.session.status, SearchStatus::Rejected);
    assert_eq!(harness.session.page, 2);
    assert_eq!(harness.session.images.len(), 12);
    assert_eq!(harness.scroll_count, 0);

    // Retrying re-requests page 2 rather than skipping to page 3.
    harness.load_more();
    assert_eq!(harness.pending[0].page, 2);
    harness.complete_next().await;

    assert_eq!(harness.session.status, SearchStatus::Resolved);
    assert_eq!(harness.session.images.len(), 24);
    assert_eq!(harness.image_ids(), (0..24).collect::<Vec<u64>>());
    assert_eq!(harness.scroll_count, 1);
    assert_eq!(client.call_count(), 3);
}

#[tokio::test]
async fn failed_first_fetch_keeps_the_query_for_retry() {
    let client = Arc::new(ScriptedClient::default());
    client.script_failure("cats", 1, "timed out");
    client.script_page("cats", 1, 25, 0..12);
    let mut harness = Harness::new(Arc::clone(&client));

    harness.submit("cats");
    harness.complete_next().await;
    assert_eq!(harness.session.status, SearchStatus::Rejected);
    assert_eq!(harness.session.query, "cats");
    assert!(harness.session.images.is_empty());
    assert!(harness.notices().is_empty());

    // With the page total still unknown, load-more re-requests page 1.
    harness.load_more();
    assert_eq!(harness.pending[0].page, 1);
    harness.complete_next().await;

    assert_eq!(harness.session.status, SearchStatus::Resolved);
    assert_eq!(harness.session.images.len(), 12);
    assert_eq!(harness.session.last_page, 3);
    assert_eq!(harness.notices(), vec!["success: Hurray! 25 images found"]);
}
