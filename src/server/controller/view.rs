use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
};
use dioxus::prelude::*;
use serde::Deserialize;

use crate::server::{
    error::AppError,
    model::book::Book,
    service::catalog::CatalogService,
    state::AppState,
    view::{
        index::IndexPage,
        render_fragment, render_page,
        search::SearchBar,
        table::{BookTable, ValueTable},
    },
};

/// Query string of the book table fragment.
#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: Option<String>,
}

/// Full index page.
pub async fn index() -> Html<String> {
    render_page(rsx! { IndexPage {} })
}

/// Book table fragment, optionally narrowed by `?q=`.
pub async fn books(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Html<String>, AppError> {
    let service = CatalogService::new(&state.db);

    let books = match params.q.as_deref() {
        Some(query) => service.search(query).await?,
        None => service.list_all().await?,
    };
    let books: Vec<_> = books.into_iter().map(Book::into_dto).collect();

    Ok(render_fragment(rsx! { BookTable { books } }))
}

/// Distinct authors table fragment.
pub async fn authors(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let service = CatalogService::new(&state.db);

    let values: Vec<String> = service.list_distinct_authors().await?.into_iter().collect();

    Ok(render_fragment(rsx! { ValueTable { heading: "Author", values } }))
}

/// Distinct years table fragment.
pub async fn years(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let service = CatalogService::new(&state.db);

    let values: Vec<String> = service.list_distinct_years().await?.into_iter().collect();

    Ok(render_fragment(rsx! { ValueTable { heading: "Year", values } }))
}

/// Search bar fragment. Typing queries `/books?q=` and swaps the result in.
pub async fn search() -> Html<String> {
    render_fragment(rsx! { SearchBar {} })
}

/// Placeholder for the creation form; the page is not served.
pub async fn create() -> StatusCode {
    StatusCode::NO_CONTENT
}
