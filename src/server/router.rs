use axum::{routing::get, Router};
use dioxus_logger::tracing::Level;
use tower_http::{
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        book::{BookDto, CreateBookDto, UpdateBookDto},
    },
    server::{
        controller::{
            book::{create_book, delete_book, get_book_by_id, get_books, update_book},
            view,
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::server::controller::book::get_books,
        crate::server::controller::book::get_book_by_id,
        crate::server::controller::book::create_book,
        crate::server::controller::book::update_book,
        crate::server::controller::book::delete_book,
    ),
    components(schemas(BookDto, CreateBookDto, UpdateBookDto, ErrorDto, MessageDto)),
    tags((name = "book", description = "Book catalog CRUD endpoints"))
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(view::index))
        .route("/books", get(view::books))
        .route("/authors", get(view::authors))
        .route("/years", get(view::years))
        .route("/search", get(view::search))
        .route("/create", get(view::create))
        .route("/api/books", get(get_books).post(create_book))
        .route(
            "/api/books/{id}",
            get(get_book_by_id).put(update_book).delete(delete_book),
        )
}

/// Full application: routes, API docs, static files and request logging.
pub fn app(state: AppState, static_dir: &str) -> Router {
    router()
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .nest_service("/css", ServeDir::new(static_dir))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
