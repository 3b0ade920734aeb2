use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::Notify;

use walkreach_client::{ClientError, Geocoder};
use walkreach_core::{ResolvedAddress, Suggestion};

use super::{AutocompleteConfig, AutocompleteController, DropdownState};

/// Records every suggest call and answers each query with one suggestion
/// labeled after it. Optionally blocks one specific query until released.
struct FakeSuggester {
    calls: AtomicUsize,
    queries: Mutex<Vec<String>>,
    block_query: Option<String>,
    started: Arc<Notify>,
    release: Arc<Notify>,
}

impl FakeSuggester {
    fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
            block_query: None,
            started: Arc::new(Notify::new()),
            release: Arc::new(Notify::new()),
        }
    }

    fn blocking_on(query: &str) -> Self {
        Self {
            block_query: Some(query.to_owned()),
            ..Self::new()
        }
    }
}

impl Geocoder for FakeSuggester {
    async fn resolve_address(&self, query: &str) -> Result<ResolvedAddress, ClientError> {
        // Autocomplete never resolves; a call here is a test bug.
        Err(ClientError::NoMatch {
            query: query.to_owned(),
        })
    }

    async fn suggest(&self, query: &str) -> Vec<Suggestion> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries
            .lock()
            .expect("queries mutex poisoned")
            .push(query.to_owned());
        if self.block_query.as_deref() == Some(query) {
            self.started.notify_one();
            self.release.notified().await;
        }
        vec![Suggestion {
            label: query.to_owned(),
            primary_text: query.to_owned(),
            secondary_text: String::new(),
        }]
    }
}

fn controller(suggester: FakeSuggester) -> AutocompleteController<FakeSuggester> {
    AutocompleteController::with_config(
        suggester,
        AutocompleteConfig {
            min_chars: 3,
            debounce: Duration::from_millis(300),
        },
    )
}

fn labels(suggestions: &[Suggestion]) -> Vec<&str> {
    suggestions.iter().map(|s| s.label.as_str()).collect()
}

#[tokio::test(start_paused = true)]
async fn input_below_threshold_never_fetches() {
    let ctrl = controller(FakeSuggester::new());
    let rx = ctrl.subscribe();

    ctrl.on_input("pi").await;

    assert_eq!(ctrl.geocoder.calls.load(Ordering::SeqCst), 0);
    assert!(rx.borrow().is_empty());
}

#[tokio::test(start_paused = true)]
async fn threshold_length_is_measured_on_trimmed_input() {
    let ctrl = controller(FakeSuggester::new());

    ctrl.on_input("  pi  ").await;

    assert_eq!(ctrl.geocoder.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test(start_paused = true)]
async fn input_at_threshold_fetches_after_the_debounce() {
    let ctrl = controller(FakeSuggester::new());
    let rx = ctrl.subscribe();

    ctrl.on_input("pik").await;

    assert_eq!(ctrl.geocoder.calls.load(Ordering::SeqCst), 1);
    assert_eq!(labels(&rx.borrow()), vec!["pik"]);
}

#[tokio::test(start_paused = true)]
async fn short_input_clears_previously_rendered_suggestions() {
    let ctrl = controller(FakeSuggester::new());
    let rx = ctrl.subscribe();

    ctrl.on_input("pike").await;
    assert!(!rx.borrow().is_empty());

    ctrl.on_input("pi").await;
    assert!(rx.borrow().is_empty());
}

#[tokio::test(start_paused = true)]
async fn keystroke_burst_coalesces_to_one_fetch_for_the_last_input() {
    let ctrl = controller(FakeSuggester::new());
    let rx = ctrl.subscribe();

    // Three keystrokes 100 ms apart, each well inside the previous
    // debounce window.
    tokio::join!(ctrl.on_input("pik"), async {
        tokio::time::sleep(Duration::from_millis(100)).await;
        ctrl.on_input("pike").await;
    }, async {
        tokio::time::sleep(Duration::from_millis(200)).await;
        ctrl.on_input("pike pl").await;
    });

    assert_eq!(ctrl.geocoder.calls.load(Ordering::SeqCst), 1);
    assert_eq!(
        *ctrl.geocoder.queries.lock().expect("queries mutex poisoned"),
        vec!["pike pl".to_owned()]
    );
    assert_eq!(labels(&rx.borrow()), vec!["pike pl"]);
}

#[tokio::test(start_paused = true)]
async fn in_flight_response_is_dropped_when_input_changes() {
    let ctrl = controller(FakeSuggester::blocking_on("pike"));
    let rx = ctrl.subscribe();
    let started = Arc::clone(&ctrl.geocoder.started);
    let release = Arc::clone(&ctrl.geocoder.release);

    tokio::join!(ctrl.on_input("pike"), async {
        // Edit the input while the first fetch is suspended in flight,
        // then let that fetch complete.
        started.notified().await;
        ctrl.on_input("pike place").await;
        release.notify_one();
    });

    assert_eq!(ctrl.geocoder.calls.load(Ordering::SeqCst), 2);
    assert_eq!(labels(&rx.borrow()), vec!["pike place"]);
}

#[tokio::test(start_paused = true)]
async fn dismiss_invalidates_a_pending_fetch() {
    let ctrl = controller(FakeSuggester::blocking_on("pike"));
    let rx = ctrl.subscribe();
    let started = Arc::clone(&ctrl.geocoder.started);
    let release = Arc::clone(&ctrl.geocoder.release);

    tokio::join!(ctrl.on_input("pike"), async {
        started.notified().await;
        ctrl.dismiss();
        release.notify_one();
    });

    assert!(rx.borrow().is_empty());
}

#[test]
fn dropdown_highlight_wraps_in_both_directions() {
    let mut state = DropdownState::default();
    state.sync(3);
    assert_eq!(state.selected(), None);

    state.highlight_next();
    assert_eq!(state.selected(), Some(0));
    state.highlight_next();
    state.highlight_next();
    assert_eq!(state.selected(), Some(2));
    state.highlight_next();
    assert_eq!(state.selected(), Some(0), "wraps past the end");

    state.highlight_previous();
    assert_eq!(state.selected(), Some(2), "wraps past the start");
}

#[test]
fn dropdown_previous_from_no_highlight_goes_to_last() {
    let mut state = DropdownState::default();
    state.sync(4);
    state.highlight_previous();
    assert_eq!(state.selected(), Some(3));
}

#[test]
fn dropdown_ignores_navigation_when_empty() {
    let mut state = DropdownState::default();
    state.highlight_next();
    state.highlight_previous();
    assert_eq!(state.selected(), None);
}

#[test]
fn dropdown_sync_clears_stale_highlight() {
    let mut state = DropdownState::default();
    state.sync(3);
    state.highlight_next();
    assert_eq!(state.selected(), Some(0));

    // New suggestion list rendered; the old highlight no longer applies.
    state.sync(2);
    assert_eq!(state.selected(), None);
}

#[test]
fn dropdown_dismiss_closes_the_list() {
    let mut state = DropdownState::default();
    state.sync(2);
    state.highlight_next();
    state.dismiss();
    assert_eq!(state.selected(), None);
    state.highlight_next();
    assert_eq!(state.selected(), None, "dismissed list has no rows");
}
