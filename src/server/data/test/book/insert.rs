use super::*;

/// Tests inserting a book stores every field and assigns a native key.
///
/// Expected: Ok with native key of the stored row
#[tokio::test]
async fn inserts_book_with_native_key() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookRepository::new(db);
    let book = Book {
        book_edition: Some("958-30-0804-4".to_string()),
        book_pages: Some("292".to_string()),
        book_year: Some("1924".to_string()),
        ..new_book("example1", "The Vortex", "José Eustasio Rivera")
    };

    let native_key = repo.insert(&book).await?;

    let stored = entity::prelude::Book::find_by_id(native_key)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.book_id, "example1");
    assert_eq!(stored.book_name, "The Vortex");
    assert_eq!(stored.book_edition.as_deref(), Some("958-30-0804-4"));
    assert_eq!(stored.book_pages.as_deref(), Some("292"));
    assert_eq!(stored.book_year.as_deref(), Some("1924"));

    Ok(())
}

/// Tests that the same internal identifier can be stored twice.
///
/// Expected: Ok with two distinct native keys
#[tokio::test]
async fn allows_repeated_book_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookRepository::new(db);
    let first = repo.insert(&new_book("b1", "T", "A")).await?;
    let second = repo.insert(&new_book("b1", "T", "A")).await?;

    assert_ne!(first, second);
    assert_eq!(repo.get_all().await?.len(), 2);

    Ok(())
}
