use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        book::{BookDto, CreateBookDto, UpdateBookDto},
    },
    server::{
        error::AppError,
        model::book::{Book, CreateBookParams, UpdateBookParams},
        service::{book::BookService, catalog::CatalogService},
        state::AppState,
    },
};

/// Tag for grouping book endpoints in OpenAPI documentation
pub static BOOK_TAG: &str = "book";

/// Deserializes a request body that must be a JSON object.
///
/// Arrays are rejected instead of being mapped onto fields by position.
fn object_body<T: DeserializeOwned>(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<T, AppError> {
    let Json(value) = payload?;

    if !value.is_object() {
        return Err(AppError::BadRequest("invalid request body".to_string()));
    }

    serde_json::from_value(value)
        .map_err(|_| AppError::BadRequest("invalid request body".to_string()))
}

/// Get every book in the catalog.
///
/// # Returns
/// - `200 OK` - List of books in the external field vocabulary
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/books",
    tag = BOOK_TAG,
    responses(
        (status = 200, description = "Successfully retrieved books", body = Vec<BookDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_books(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = CatalogService::new(&state.db);

    let books: Vec<BookDto> = service
        .list_all()
        .await?
        .into_iter()
        .map(Book::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(books)))
}

/// Get a book by its identifier.
///
/// # Arguments
/// - `id` - Application-assigned book identifier, not the storage key
///
/// # Returns
/// - `200 OK` - The book
/// - `404 Not Found` - No book carries this identifier
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/books/{id}",
    tag = BOOK_TAG,
    params(
        ("id" = String, Path, description = "Book identifier")
    ),
    responses(
        (status = 200, description = "Successfully retrieved book", body = BookDto),
        (status = 404, description = "Book not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_book_by_id(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = CatalogService::new(&state.db);

    let book = service.get_by_book_id(&book_id).await?;

    Ok((StatusCode::OK, Json(book.into_dto())))
}

/// Create a book.
///
/// `id`, `title` and `author` are required. A book whose every field equals an existing
/// record is rejected as a duplicate.
///
/// # Returns
/// - `201 Created` - Book stored
/// - `400 Bad Request` - Malformed body or missing required field
/// - `409 Conflict` - Identical book already stored
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/books",
    tag = BOOK_TAG,
    request_body = CreateBookDto,
    responses(
        (status = 201, description = "Successfully created book", body = MessageDto),
        (status = 400, description = "Invalid book data", body = ErrorDto),
        (status = 409, description = "Duplicate book entry", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_book(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let payload: CreateBookDto = object_body(payload)?;

    let service = BookService::new(&state.db);

    // Convert DTO to server model
    let params = CreateBookParams::from_dto(payload);

    service.create(params).await?;

    Ok((StatusCode::CREATED, Json(MessageDto::new("book created"))))
}

/// Partially update a book.
///
/// Only the attributes present in the body change; unknown keys and `id` are ignored.
///
/// # Returns
/// - `200 OK` - Book updated
/// - `400 Bad Request` - Malformed body, or title/author cleared
/// - `404 Not Found` - No book carries this identifier
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/books/{id}",
    tag = BOOK_TAG,
    params(
        ("id" = String, Path, description = "Book identifier")
    ),
    request_body = UpdateBookDto,
    responses(
        (status = 200, description = "Successfully updated book", body = MessageDto),
        (status = 400, description = "Invalid book data", body = ErrorDto),
        (status = 404, description = "Book not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let payload: UpdateBookDto = object_body(payload)?;

    let service = BookService::new(&state.db);

    service
        .update(&book_id, UpdateBookParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("book updated"))))
}

/// Delete a book.
///
/// # Returns
/// - `200 OK` - Book deleted
/// - `404 Not Found` - No book carries this identifier
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/books/{id}",
    tag = BOOK_TAG,
    params(
        ("id" = String, Path, description = "Book identifier")
    ),
    responses(
        (status = 200, description = "Successfully deleted book", body = MessageDto),
        (status = 404, description = "Book not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = BookService::new(&state.db);

    service.remove(&book_id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("book deleted"))))
}
