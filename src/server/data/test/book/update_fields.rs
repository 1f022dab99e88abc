use super::*;

/// Tests updating only the provided fields.
///
/// Expected: Ok(1) with untouched fields preserved
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::book::BookFactory::new(db)
        .book_id("b1")
        .name("T")
        .author("A")
        .pages(Some("100"))
        .build()
        .await?;

    let repo = BookRepository::new(db);
    let matched = repo
        .update_fields(
            "b1",
            &[FieldValue::new(BookField::Year, Some("2020".to_string()))],
        )
        .await?;

    assert_eq!(matched, 1);

    let book = repo.find_by_book_id("b1").await?.unwrap();
    assert_eq!(book.book_year.as_deref(), Some("2020"));
    assert_eq!(book.book_name, "T");
    assert_eq!(book.book_author, "A");
    assert_eq!(book.book_pages.as_deref(), Some("100"));

    Ok(())
}

/// Tests that an explicit absent value clears an optional field.
///
/// Expected: Ok(1) with the field set to NULL
#[tokio::test]
async fn clears_optional_field() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::book::BookFactory::new(db)
        .book_id("b1")
        .edition(Some("2nd"))
        .build()
        .await?;

    let repo = BookRepository::new(db);
    let matched = repo
        .update_fields("b1", &[FieldValue::new(BookField::Edition, None)])
        .await?;

    assert_eq!(matched, 1);
    assert_eq!(repo.find_by_book_id("b1").await?.unwrap().book_edition, None);

    Ok(())
}

/// Tests updating an identifier nobody stored.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_missing_book() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookRepository::new(db);
    let matched = repo
        .update_fields(
            "missing-id",
            &[FieldValue::new(BookField::Title, Some("X".to_string()))],
        )
        .await?;

    assert_eq!(matched, 0);

    Ok(())
}

/// Tests an empty field set reports the match without changing the record.
///
/// Expected: Ok(1) for an existing book, Ok(0) otherwise
#[tokio::test]
async fn empty_changes_report_match() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::book::BookFactory::new(db).book_id("b1").build().await?;

    let repo = BookRepository::new(db);

    assert_eq!(repo.update_fields("b1", &[]).await?, 1);
    assert_eq!(repo.update_fields("b2", &[]).await?, 0);

    let unchanged = repo.find_by_book_id("b1").await?.unwrap();
    assert_eq!(unchanged.book_name, created.book_name);

    Ok(())
}

/// Tests that only the first record of a shared identifier is updated.
///
/// Expected: Ok(1) with the second record untouched
#[tokio::test]
async fn updates_first_of_shared_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::book::BookFactory::new(db).book_id("shared").build().await?;
    let second = factory::book::BookFactory::new(db).book_id("shared").build().await?;

    let repo = BookRepository::new(db);
    let matched = repo
        .update_fields(
            "shared",
            &[FieldValue::new(BookField::Year, Some("1999".to_string()))],
        )
        .await?;

    assert_eq!(matched, 1);

    let first = entity::prelude::Book::find_by_id(first.native_key)
        .one(db)
        .await?
        .unwrap();
    let second = entity::prelude::Book::find_by_id(second.native_key)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(first.book_year.as_deref(), Some("1999"));
    assert_eq!(second.book_year, None);

    Ok(())
}
