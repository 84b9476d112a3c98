use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct SearchInputProps {
    query: String,
    on_change: EventHandler<String>,
    on_submit: EventHandler<()>,
}

#[component]
pub fn SearchInput(props: SearchInputProps) -> Element {
    rsx! {
        div { class: "search-container",
            input {
                class: "search-input",
                r#type: "text",
                placeholder: "Enter your search query...",
                value: "{props.query}",
                oninput: move |evt| props.on_change.call(evt.value().clone()),
                onkeydown: move |evt| {
                    if evt.key() == Key::Enter {
                        props.on_submit.call(());
                    }
                }
            }
        }
    }
}
