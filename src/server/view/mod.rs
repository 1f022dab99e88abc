//! Server-rendered HTML views.
//!
//! Views are dioxus components rendered to strings with `dioxus-ssr`. The index is a full
//! document; every other view is an htmx fragment swapped into the index's content area.

pub mod index;
pub mod search;
pub mod table;

use axum::response::Html;
use dioxus::prelude::Element;

/// Renders a complete HTML document around an element producing `head` and `body`.
pub fn render_page(element: Element) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html><html lang=\"en\">{}</html>",
        dioxus_ssr::render_element(element)
    ))
}

/// Renders a fragment meant to be swapped into an existing page.
pub fn render_fragment(element: Element) -> Html<String> {
    Html(dioxus_ssr::render_element(element))
}
