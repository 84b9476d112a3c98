use dioxus::prelude::*;
use dioxus_desktop::{Config, WindowBuilder};

mod components;
mod controller;
mod search;
mod utils;
mod views;

use search::SearchClient;
use utils::config;
use views::SearchDashboard;

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new().with_title("Search Dashboard")
            ),
        )
        .launch(App);
}

#[component]
fn App() -> Element {
    // One shared client for the whole session; the endpoint can be
    // overridden through the environment.
    use_context_provider(|| SearchClient::new(config::search_endpoint()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SearchDashboard {}
    }
}
