use super::*;

/// Tests counting over a full-content filter of a stored book.
///
/// Expected: Ok(1)
#[tokio::test]
async fn counts_identical_content() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookRepository::new(db);
    let book = Book {
        book_year: Some("1843".to_string()),
        ..new_book("example3", "The Black Cat", "Edgar Allan Poe")
    };
    repo.insert(&book).await?;

    let count = repo.count_matching(&book.field_values()).await?;

    assert_eq!(count, 1);

    Ok(())
}

/// Tests that an absent optional field in the filter only matches NULL columns.
///
/// Expected: Ok(0) when the stored book has a value for that field
#[tokio::test]
async fn absent_value_matches_only_null() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::book::BookFactory::new(db)
        .book_id("b1")
        .name("T")
        .author("A")
        .edition(Some("2nd"))
        .build()
        .await?;

    let repo = BookRepository::new(db);
    let count = repo
        .count_matching(&new_book("b1", "T", "A").field_values())
        .await?;

    assert_eq!(count, 0);

    Ok(())
}

/// Tests that only the provided fields are compared.
///
/// Expected: Ok with count of books by the author regardless of other fields
#[tokio::test]
async fn compares_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_book_by(db, "b1", "Mary Shelley").await?;
    factory::create_book_by(db, "b2", "Mary Shelley").await?;
    factory::create_book_by(db, "b3", "Edgar Allan Poe").await?;

    let repo = BookRepository::new(db);
    let count = repo
        .count_matching(&[FieldValue::new(
            BookField::Author,
            Some("Mary Shelley".to_string()),
        )])
        .await?;

    assert_eq!(count, 2);
    assert_eq!(repo.count_matching(&[]).await?, 3);

    Ok(())
}
