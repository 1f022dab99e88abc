use super::*;

/// Tests finding a book by its internal identifier.
///
/// Expected: Ok(Some) with matching fields
#[tokio::test]
async fn finds_existing_book() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::book::BookFactory::new(db)
        .book_id("example1")
        .name("The Vortex")
        .author("José Eustasio Rivera")
        .pages(Some("292"))
        .build()
        .await?;

    let repo = BookRepository::new(db);
    let found = repo.find_by_book_id("example1").await?.unwrap();

    assert_eq!(found.native_key, Some(created.native_key));
    assert_eq!(found.book_name, "The Vortex");
    assert_eq!(found.book_author, "José Eustasio Rivera");
    assert_eq!(found.book_pages.as_deref(), Some("292"));
    assert_eq!(found.book_edition, None);

    Ok(())
}

/// Tests finding an identifier nobody stored.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_book(db).await?;

    let repo = BookRepository::new(db);
    let found = repo.find_by_book_id("missing-id").await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests that a shared identifier resolves to the earliest stored record.
///
/// Expected: Ok(Some) with the first inserted book
#[tokio::test]
async fn returns_first_of_shared_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::book::BookFactory::new(db)
        .book_id("shared")
        .edition(Some("1st"))
        .build()
        .await?;
    factory::book::BookFactory::new(db)
        .book_id("shared")
        .edition(Some("2nd"))
        .build()
        .await?;

    let repo = BookRepository::new(db);
    let found = repo.find_by_book_id("shared").await?.unwrap();

    assert_eq!(found.native_key, Some(first.native_key));
    assert_eq!(found.book_edition.as_deref(), Some("1st"));

    Ok(())
}
