use dioxus::prelude::*;

/// Search input that filters the book table fragment.
#[component]
pub fn SearchBar() -> Element {
    rsx! {
        div {
            class: "search",
            input {
                r#type: "search",
                name: "q",
                placeholder: "Search by title, author or year",
                "hx-get": "/books",
                "hx-trigger": "input changed delay:300ms, search",
                "hx-target": "#search-results",
            }
            div { id: "search-results" }
        }
    }
}
