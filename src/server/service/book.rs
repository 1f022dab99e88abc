use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::book::BookRepository,
    error::AppError,
    model::book::{CreateBookParams, UpdateBookParams},
};

/// Create, update and delete operations on the catalog.
pub struct BookService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a book unless a record with identical content already exists.
    ///
    /// Duplicates are detected over every field, not just the identifier: the same `id`
    /// with any differing attribute is a new record.
    ///
    /// # Returns
    /// - `Ok(i32)` - Native key assigned by storage
    /// - `Err(AppError::BadRequest)` - `id`, `title` or `author` missing or empty
    /// - `Err(AppError::Conflict)` - A content-identical book is already stored
    /// - `Err(AppError::DbErr)` - Storage failure
    pub async fn create(&self, params: CreateBookParams) -> Result<i32, AppError> {
        let book = params.into_book().ok_or_else(|| {
            AppError::BadRequest("id, title and author are required".to_string())
        })?;

        let repo = BookRepository::new(self.db);

        if repo.count_matching(&book.field_values()).await? > 0 {
            return Err(AppError::Conflict("duplicate book entry".to_string()));
        }

        let native_key = repo.insert(&book).await?;

        tracing::info!("Created book {} ({})", book.book_id, book.book_name);

        Ok(native_key)
    }

    /// Applies the fields present in `params` to the book with `book_id`.
    ///
    /// An empty update still succeeds as long as the book exists.
    pub async fn update(&self, book_id: &str, params: UpdateBookParams) -> Result<(), AppError> {
        let cleared = params.cleared_required_fields();
        if !cleared.is_empty() {
            let names: Vec<_> = cleared.iter().map(|f| f.external_name()).collect();
            return Err(AppError::BadRequest(format!(
                "{} cannot be empty",
                names.join(" and ")
            )));
        }

        let changes = params.changes();

        let repo = BookRepository::new(self.db);
        let matched = repo.update_fields(book_id, &changes).await?;

        if matched == 0 {
            return Err(AppError::NotFound("book not found".to_string()));
        }

        tracing::debug!(
            "Updated book {} fields [{}]",
            book_id,
            changes
                .iter()
                .map(|c| c.field.internal_name())
                .collect::<Vec<_>>()
                .join(", ")
        );

        Ok(())
    }

    /// Removes the book with `book_id`
    pub async fn remove(&self, book_id: &str) -> Result<(), AppError> {
        let repo = BookRepository::new(self.db);

        if repo.delete_by_book_id(book_id).await? == 0 {
            return Err(AppError::NotFound("book not found".to_string()));
        }

        tracing::info!("Deleted book {}", book_id);

        Ok(())
    }
}
