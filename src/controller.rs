use crate::search::SearchResult;

/// Progress of the current search, one variant active at a time.
///
/// A failed request settles to `Settled` with an empty list rather than a
/// dedicated error variant; the UI shows "no results" and the failure goes
/// to the log instead.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchState {
    Idle,
    Searching,
    Settled(Vec<SearchResult>),
}

/// Token handed out by [`SearchController::begin_submit`]. The caller issues
/// exactly one request for it and reports back through
/// [`SearchController::settle`] with the same generation.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    /// Raw query text as typed, untrimmed.
    pub query: String,
    pub generation: u64,
}

/// Owns the query text and search progress for the dashboard.
///
/// All mutation goes through `set_query`, `begin_submit` and `settle`; the
/// rest of the API is read-only. Responses are applied last-submission-wins:
/// `settle` ignores any generation other than the most recent one, so a slow
/// response from a superseded request can never overwrite newer results.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchController {
    query: String,
    state: SearchState,
    has_searched: bool,
    generation: u64,
}

impl SearchController {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            state: SearchState::Idle,
            has_searched: false,
            generation: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replaces the query verbatim. No trimming, no validation.
    pub fn set_query(&mut self, text: String) {
        self.query = text;
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// True once the user has submitted at least one non-empty query; stays
    /// true for the rest of the session.
    pub fn has_searched(&self) -> bool {
        self.has_searched
    }

    pub fn is_searching(&self) -> bool {
        matches!(self.state, SearchState::Searching)
    }

    /// Starts a search. Returns `None` without touching any state when the
    /// trimmed query is empty; otherwise transitions to `Searching`
    /// synchronously and returns the submission the caller must run.
    pub fn begin_submit(&mut self) -> Option<Submission> {
        if self.query.trim().is_empty() {
            return None;
        }

        self.generation += 1;
        self.has_searched = true;
        self.state = SearchState::Searching;

        Some(Submission {
            query: self.query.clone(),
            generation: self.generation,
        })
    }

    /// Applies a finished request's results. A stale generation (a newer
    /// submission has started since) is dropped without any state change.
    pub fn settle(&mut self, generation: u64, results: Vec<SearchResult>) {
        if generation != self.generation {
            return;
        }
        self.state = SearchState::Settled(results);
    }

    /// Maps the current state to what the results section should show.
    /// Pure: no side effects, same state always yields the same view.
    pub fn results_view(&self) -> ResultsView {
        if !self.has_searched {
            return ResultsView::Idle;
        }
        match &self.state {
            SearchState::Idle => ResultsView::Idle,
            SearchState::Searching => ResultsView::Loading,
            SearchState::Settled(results) if results.is_empty() => ResultsView::NoResults,
            SearchState::Settled(results) => ResultsView::Results(results.clone()),
        }
    }
}

impl Default for SearchController {
    fn default() -> Self {
        Self::new()
    }
}

/// The four things the results section can display.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultsView {
    /// Never searched: call-to-action placeholder.
    Idle,
    /// Request in flight: skeleton cards.
    Loading,
    /// Settled with nothing to show.
    NoResults,
    /// Settled with results, in the order the endpoint returned them.
    Results(Vec<SearchResult>),
}

/// Count label shown next to the "Search Results" heading once settled.
pub fn result_count_label(count: usize) -> String {
    if count == 1 {
        "1 result found".to_string()
    } else {
        format!("{} results found", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str) -> SearchResult {
        SearchResult {
            link: format!("https://x.test/{}", name),
            prices: vec!["$10".to_string()],
            currency: "USD".to_string(),
            product_name: name.to_string(),
        }
    }

    #[test]
    fn submit_transitions_to_searching_synchronously() {
        let mut ctl = SearchController::new();
        ctl.set_query("rust book".to_string());

        let submission = ctl.begin_submit().expect("non-empty query should submit");

        assert_eq!(*ctl.state(), SearchState::Searching);
        assert!(ctl.has_searched());
        assert_eq!(submission.query, "rust book");
    }

    #[test]
    fn empty_query_is_a_guarded_noop() {
        let mut ctl = SearchController::new();

        assert!(ctl.begin_submit().is_none());
        assert_eq!(*ctl.state(), SearchState::Idle);
        assert!(!ctl.has_searched());
    }

    #[test]
    fn whitespace_only_query_is_a_guarded_noop() {
        let mut ctl = SearchController::new();
        ctl.set_query("   ".to_string());

        assert!(ctl.begin_submit().is_none());
        assert_eq!(*ctl.state(), SearchState::Idle);
        assert!(!ctl.has_searched());
        assert_eq!(ctl.results_view(), ResultsView::Idle);
    }

    #[test]
    fn query_is_stored_verbatim_but_submitted_untrimmed() {
        let mut ctl = SearchController::new();
        ctl.set_query("  rust book  ".to_string());

        assert_eq!(ctl.query(), "  rust book  ");
        let submission = ctl.begin_submit().unwrap();
        assert_eq!(submission.query, "  rust book  ");
    }

    #[test]
    fn settle_applies_results_for_current_generation() {
        let mut ctl = SearchController::new();
        ctl.set_query("laptop".to_string());
        let submission = ctl.begin_submit().unwrap();

        ctl.settle(submission.generation, vec![result("a"), result("b")]);

        match ctl.state() {
            SearchState::Settled(results) => {
                assert_eq!(results.len(), 2);
                assert_eq!(results[0].product_name, "a");
                assert_eq!(results[1].product_name, "b");
            }
            other => panic!("expected Settled, got {:?}", other),
        }
    }

    #[test]
    fn stale_response_never_overwrites_newer_results() {
        let mut ctl = SearchController::new();

        ctl.set_query("first".to_string());
        let first = ctl.begin_submit().unwrap();

        ctl.set_query("second".to_string());
        let second = ctl.begin_submit().unwrap();

        // Second request finishes first, then the first one straggles in.
        ctl.settle(second.generation, vec![result("second-hit")]);
        ctl.settle(first.generation, vec![result("first-hit")]);

        assert_eq!(
            *ctl.state(),
            SearchState::Settled(vec![result("second-hit")])
        );
    }

    #[test]
    fn stale_response_while_still_searching_is_dropped() {
        let mut ctl = SearchController::new();

        ctl.set_query("first".to_string());
        let first = ctl.begin_submit().unwrap();

        ctl.set_query("second".to_string());
        ctl.begin_submit().unwrap();

        ctl.settle(first.generation, vec![result("first-hit")]);

        // Still waiting on the second request.
        assert_eq!(*ctl.state(), SearchState::Searching);
        assert_eq!(ctl.results_view(), ResultsView::Loading);
    }

    #[test]
    fn failed_request_settles_to_no_results() {
        let mut ctl = SearchController::new();
        ctl.set_query("unreachable".to_string());
        let submission = ctl.begin_submit().unwrap();

        // The client reports failures as an empty result set.
        ctl.settle(submission.generation, Vec::new());

        assert_eq!(*ctl.state(), SearchState::Settled(Vec::new()));
        assert_eq!(ctl.results_view(), ResultsView::NoResults);
    }

    #[test]
    fn results_view_maps_all_four_states() {
        let mut ctl = SearchController::new();
        assert_eq!(ctl.results_view(), ResultsView::Idle);

        ctl.set_query("q".to_string());
        let submission = ctl.begin_submit().unwrap();
        assert_eq!(ctl.results_view(), ResultsView::Loading);

        ctl.settle(submission.generation, vec![result("hit")]);
        assert_eq!(ctl.results_view(), ResultsView::Results(vec![result("hit")]));

        let submission = ctl.begin_submit().unwrap();
        ctl.settle(submission.generation, Vec::new());
        assert_eq!(ctl.results_view(), ResultsView::NoResults);
    }

    #[test]
    fn results_view_is_idempotent() {
        let mut ctl = SearchController::new();
        ctl.set_query("q".to_string());
        let submission = ctl.begin_submit().unwrap();
        ctl.settle(submission.generation, vec![result("a"), result("b")]);

        assert_eq!(ctl.results_view(), ctl.results_view());
    }

    #[test]
    fn results_keep_endpoint_order() {
        let mut ctl = SearchController::new();
        ctl.set_query("q".to_string());
        let submission = ctl.begin_submit().unwrap();

        let returned = vec![result("z"), result("a"), result("m")];
        ctl.settle(submission.generation, returned.clone());

        assert_eq!(ctl.results_view(), ResultsView::Results(returned));
    }

    #[test]
    fn count_label_pluralizes() {
        assert_eq!(result_count_label(0), "0 results found");
        assert_eq!(result_count_label(1), "1 result found");
        assert_eq!(result_count_label(2), "2 results found");
    }
}
