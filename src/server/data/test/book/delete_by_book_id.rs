use super::*;

/// Tests deleting a book by its internal identifier.
///
/// Expected: Ok(1) and the book can no longer be found
#[tokio::test]
async fn deletes_book_successfully() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::book::BookFactory::new(db).book_id("b1").build().await?;

    let repo = BookRepository::new(db);
    let deleted = repo.delete_by_book_id("b1").await?;

    assert_eq!(deleted, 1);
    assert!(repo.find_by_book_id("b1").await?.is_none());

    Ok(())
}

/// Tests deleting an identifier nobody stored.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_missing_book() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookRepository::new(db);

    assert_eq!(repo.delete_by_book_id("missing-id").await?, 0);

    Ok(())
}

/// Tests deleting one book doesn't affect others.
///
/// Expected: Ok(1) with the other book still stored
#[tokio::test]
async fn deletes_without_affecting_others() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::book::BookFactory::new(db).book_id("b1").build().await?;
    factory::book::BookFactory::new(db).book_id("b2").build().await?;

    let repo = BookRepository::new(db);
    repo.delete_by_book_id("b1").await?;

    let remaining = repo.get_all().await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].book_id, "b2");

    Ok(())
}
