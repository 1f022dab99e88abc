use super::*;

/// Tests listing books from an empty table.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_books() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookRepository::new(db);
    let books = repo.get_all().await?;

    assert!(books.is_empty());

    Ok(())
}

/// Tests listing returns every stored book with its native key.
///
/// Expected: Ok with all books converted to domain models
#[tokio::test]
async fn returns_all_books() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_book(db).await?;
    let second = factory::book::BookFactory::new(db)
        .year(Some("1818"))
        .build()
        .await?;

    let repo = BookRepository::new(db);
    let books = repo.get_all().await?;

    assert_eq!(books.len(), 2);
    assert!(books
        .iter()
        .any(|b| b.book_id == first.book_id && b.native_key == Some(first.native_key)));
    assert!(books
        .iter()
        .any(|b| b.book_id == second.book_id && b.book_year.as_deref() == Some("1818")));

    Ok(())
}
