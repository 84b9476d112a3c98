use dioxus::logger::tracing;
use dioxus::prelude::*;

use crate::search::SearchResult;

/// Badge color bucket for a result's category label. The buckets are keyed
/// by content-type names inherited from the endpoint's sibling dashboards;
/// currency codes fall through to the default bucket.
fn category_color(category: &str) -> &'static str {
    match category.to_lowercase().as_str() {
        "documentation" => "badge-blue",
        "tutorial" => "badge-green",
        "guide" => "badge-purple",
        _ => "badge-gray",
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ResultItemProps {
    result: SearchResult,
}

#[component]
pub fn ResultItem(props: ResultItemProps) -> Element {
    let badge_class = category_color(&props.result.currency);
    let link = props.result.link.clone();

    rsx! {
        div { class: "result-card",
            div { class: "result-header",
                h3 { class: "result-title", "{props.result.product_name}" }
                div { class: "result-meta",
                    span { class: "badge {badge_class}", "{props.result.currency}" }
                    span { class: "result-link", "{props.result.link}" }
                }
            }
            div { class: "result-body",
                {props.result.prices.iter().map(|price| rsx! {
                    span { class: "price-line", "{price}" }
                })}
                button {
                    class: "btn btn-outline",
                    onclick: move |_| {
                        if let Err(e) = open::that(&link) {
                            tracing::error!("Failed to open {}: {}", link, e);
                        }
                    },
                    "View Details ↗"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_categories_get_their_bucket() {
        assert_eq!(category_color("documentation"), "badge-blue");
        assert_eq!(category_color("tutorial"), "badge-green");
        assert_eq!(category_color("guide"), "badge-purple");
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(category_color("Documentation"), "badge-blue");
        assert_eq!(category_color("TUTORIAL"), "badge-green");
    }

    #[test]
    fn currency_codes_fall_through_to_default() {
        assert_eq!(category_color("USD"), "badge-gray");
        assert_eq!(category_color("EUR"), "badge-gray");
        assert_eq!(category_color(""), "badge-gray");
    }
}
