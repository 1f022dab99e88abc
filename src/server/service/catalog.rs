use std::collections::BTreeSet;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::book::BookRepository,
    error::AppError,
    model::book::{Book, BookField},
};

/// Read-only views over the catalog.
pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every book in storage order
    pub async fn list_all(&self) -> Result<Vec<Book>, AppError> {
        let repo = BookRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a book by its internal identifier
    pub async fn get_by_book_id(&self, book_id: &str) -> Result<Book, AppError> {
        let repo = BookRepository::new(self.db);

        repo.find_by_book_id(book_id).await?.ok_or_else(|| {
            AppError::NotFound(format!(
                "Book with ID: {} not found. Is it stored?",
                book_id
            ))
        })
    }

    /// Gets books whose title, author or year contains `query`, ignoring case.
    ///
    /// A blank query matches every book.
    pub async fn search(&self, query: &str) -> Result<Vec<Book>, AppError> {
        let needle = query.trim().to_lowercase();
        let books = self.list_all().await?;

        if needle.is_empty() {
            return Ok(books);
        }

        Ok(books
            .into_iter()
            .filter(|book| {
                [BookField::Title, BookField::Author, BookField::Year]
                    .iter()
                    .filter_map(|&field| book.value_of(field))
                    .any(|value| value.to_lowercase().contains(&needle))
            })
            .collect())
    }

    /// Gets the distinct non-empty authors across all books
    pub async fn list_distinct_authors(&self) -> Result<BTreeSet<String>, AppError> {
        let books = self.list_all().await?;

        Ok(distinct_values(&books, BookField::Author))
    }

    /// Gets the distinct non-empty publication years across all books
    pub async fn list_distinct_years(&self) -> Result<BTreeSet<String>, AppError> {
        let books = self.list_all().await?;

        Ok(distinct_values(&books, BookField::Year))
    }
}

fn distinct_values(books: &[Book], field: BookField) -> BTreeSet<String> {
    books
        .iter()
        .filter_map(|book| book.value_of(field))
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect()
}
