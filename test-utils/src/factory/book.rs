//! Book factory for creating test book rows.
//!
//! Inserts straight through the entity so repository and service tests can arrange
//! storage state without going through the code under test.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test books with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::book::BookFactory;
///
/// let book = BookFactory::new(&db)
///     .book_id("b1")
///     .author("Mary Shelley")
///     .year(Some("1818"))
///     .build()
///     .await?;
/// ```
pub struct BookFactory<'a> {
    db: &'a DatabaseConnection,
    book_id: String,
    name: String,
    author: String,
    edition: Option<String>,
    pages: Option<String>,
    year: Option<String>,
}

impl<'a> BookFactory<'a> {
    /// Creates a new BookFactory with default values.
    ///
    /// Defaults:
    /// - book_id: `"book-{n}"` where n is auto-incremented
    /// - name: `"Book {n}"`
    /// - author: `"Author {n}"`
    /// - edition, pages, year: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            book_id: format!("book-{}", id),
            name: format!("Book {}", id),
            author: format!("Author {}", id),
            edition: None,
            pages: None,
            year: None,
        }
    }

    pub fn book_id(mut self, book_id: impl Into<String>) -> Self {
        self.book_id = book_id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn edition(mut self, edition: Option<&str>) -> Self {
        self.edition = edition.map(str::to_string);
        self
    }

    pub fn pages(mut self, pages: Option<&str>) -> Self {
        self.pages = pages.map(str::to_string);
        self
    }

    pub fn year(mut self, year: Option<&str>) -> Self {
        self.year = year.map(str::to_string);
        self
    }

    /// Builds and inserts the book entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::book::Model)` - Created book row, including its native key
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::book::Model, DbErr> {
        entity::book::ActiveModel {
            book_id: ActiveValue::Set(self.book_id),
            book_name: ActiveValue::Set(self.name),
            book_author: ActiveValue::Set(self.author),
            book_edition: ActiveValue::Set(self.edition),
            book_pages: ActiveValue::Set(self.pages),
            book_year: ActiveValue::Set(self.year),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a book with default values.
///
/// Shorthand for `BookFactory::new(db).build().await`.
pub async fn create_book(db: &DatabaseConnection) -> Result<entity::book::Model, DbErr> {
    BookFactory::new(db).build().await
}

/// Creates a book with the given id and author, leaving other fields at their defaults.
pub async fn create_book_by(
    db: &DatabaseConnection,
    book_id: &str,
    author: &str,
) -> Result<entity::book::Model, DbErr> {
    BookFactory::new(db)
        .book_id(book_id)
        .author(author)
        .build()
        .await
}
