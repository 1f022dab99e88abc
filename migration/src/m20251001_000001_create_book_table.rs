use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Book::Table)
                    .if_not_exists()
                    .col(pk_auto(Book::NativeKey))
                    .col(string(Book::BookId))
                    .col(string(Book::BookName))
                    .col(string(Book::BookAuthor))
                    .col(string_null(Book::BookEdition))
                    .col(string_null(Book::BookPages))
                    .col(string_null(Book::BookYear))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_books_book_id")
                    .table(Book::Table)
                    .col(Book::BookId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Book::Table).to_owned())
            .await
    }
}

/// Column names follow the storage vocabulary, not the API one.
#[derive(DeriveIden)]
pub enum Book {
    #[sea_orm(iden = "books")]
    Table,
    #[sea_orm(iden = "_id")]
    NativeKey,
    #[sea_orm(iden = "ID")]
    BookId,
    #[sea_orm(iden = "BookName")]
    BookName,
    #[sea_orm(iden = "BookAuthor")]
    BookAuthor,
    #[sea_orm(iden = "BookEdition")]
    BookEdition,
    #[sea_orm(iden = "BookPages")]
    BookPages,
    #[sea_orm(iden = "BookYear")]
    BookYear,
}
