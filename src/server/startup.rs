use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config, data::book::BookRepository, error::AppError, model::book::Book,
};

/// Connects to the database and runs pending migrations.
///
/// Running the migrations provisions the `books` table on first start.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

fn example_books() -> Vec<Book> {
    [
        (
            "example1",
            "The Vortex",
            "José Eustasio Rivera",
            "958-30-0804-4",
            "292",
            "1924",
        ),
        (
            "example2",
            "Frankenstein",
            "Mary Shelley",
            "978-3-649-64609-9",
            "280",
            "1818",
        ),
        (
            "example3",
            "The Black Cat",
            "Edgar Allan Poe",
            "978-3-99168-238-7",
            "280",
            "1843",
        ),
    ]
    .into_iter()
    .map(|(id, name, author, edition, pages, year)| Book {
        native_key: None,
        book_id: id.to_string(),
        book_name: name.to_string(),
        book_author: author.to_string(),
        book_edition: Some(edition.to_string()),
        book_pages: Some(pages.to_string()),
        book_year: Some(year.to_string()),
    })
    .collect()
}

/// Inserts the example books that are not stored yet.
///
/// A book counts as stored when a record with identical content exists, so running this
/// on every start never creates duplicates.
///
/// # Returns
/// - `Ok(usize)` - Number of books inserted
/// - `Err(AppError::DbErr)` - Database error
pub async fn seed_example_books(db: &DatabaseConnection) -> Result<usize, AppError> {
    let repo = BookRepository::new(db);
    let mut inserted = 0;

    for book in example_books() {
        if repo.count_matching(&book.field_values()).await? > 0 {
            tracing::debug!("Example book {} already stored", book.book_id);
            continue;
        }

        let native_key = repo.insert(&book).await?;
        inserted += 1;
        tracing::info!(
            "Inserted example book {} ({}) with key {}",
            book.book_id,
            book.book_name,
            native_key
        );
    }

    Ok(inserted)
}
