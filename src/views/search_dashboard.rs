use dioxus::prelude::*;

use crate::components::{ResultItem, SearchInput, SkeletonCard};
use crate::controller::{result_count_label, ResultsView, SearchController};
use crate::search::SearchClient;
use crate::utils::config;

const SEARCH_CSS: Asset = asset!("/assets/styling/search.css");

/// The search dashboard: query input, submit button and the results section
/// in one of its four states (call-to-action, skeletons, results, empty).
#[component]
pub fn SearchDashboard() -> Element {
    let client = use_context::<SearchClient>();
    let mut controller = use_signal(SearchController::new);

    // One search per submission token; the controller drops settlements from
    // superseded requests, so only the latest submission can land.
    let mut run_search = {
        let client = client.clone();
        move |_: ()| {
            let submission = match controller.write().begin_submit() {
                Some(submission) => submission,
                None => return,
            };
            let client = client.clone();
            spawn(async move {
                let results = client.search_or_empty(&submission.query).await;
                controller.write().settle(submission.generation, results);
            });
        }
    };
    let mut run_search_button = run_search.clone();

    let query = controller.read().query().to_string();
    let searching = controller.read().is_searching();
    let has_searched = controller.read().has_searched();
    let view = controller.read().results_view();

    // Count label only exists once the search has settled.
    let count_label = match &view {
        ResultsView::NoResults => Some(result_count_label(0)),
        ResultsView::Results(results) => Some(result_count_label(results.len())),
        _ => None,
    };

    rsx! {
        document::Link { rel: "stylesheet", href: SEARCH_CSS }

        div { class: "search-dashboard",
            div { class: "dashboard-header",
                h1 { "Search Dashboard" }
                p { class: "dashboard-subtitle", "Find the information you need quickly and easily" }
            }

            div { class: "search-section",
                SearchInput {
                    query: query.clone(),
                    on_change: move |q| controller.write().set_query(q),
                    on_submit: move |_| run_search(())
                }
                button {
                    class: "btn btn-primary",
                    disabled: searching || query.trim().is_empty(),
                    onclick: move |_| run_search_button(()),
                    if searching {
                        span { class: "spinner" }
                        "Searching..."
                    } else {
                        "Search"
                    }
                }
            }

            if has_searched {
                div { class: "results-section",
                    div { class: "results-header",
                        h2 { "Search Results" }
                        {count_label.as_ref().map(|label| rsx! {
                            span { class: "result-count", "({label})" }
                        })}
                    }

                    {match &view {
                        ResultsView::Loading => rsx! {
                            div { class: "results-list",
                                {(0..config::SKELETON_RESULT_CARDS).map(|_| rsx! {
                                    SkeletonCard {}
                                })}
                            }
                        },
                        ResultsView::Results(results) => rsx! {
                            div { class: "results-list",
                                {results.iter().map(|result| rsx! {
                                    ResultItem { result: result.clone() }
                                })}
                            }
                        },
                        _ => rsx! {
                            div { class: "placeholder-card",
                                h3 { "No results found" }
                                p { "Try adjusting your search terms or check for typos." }
                            }
                        },
                    }}
                }
            } else {
                div { class: "placeholder-card cta-card",
                    h3 { "Ready to search?" }
                    p { "Enter your search query above to find relevant results" }
                }
            }
        }
    }
}
