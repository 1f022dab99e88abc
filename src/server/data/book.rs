use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::book::{Book, BookField, FieldValue};

/// Storage column holding `field`. Column names equal `BookField::internal_name`.
pub fn column_for(field: BookField) -> entity::book::Column {
    match field {
        BookField::Id => entity::book::Column::BookId,
        BookField::Title => entity::book::Column::BookName,
        BookField::Author => entity::book::Column::BookAuthor,
        BookField::Pages => entity::book::Column::BookPages,
        BookField::Edition => entity::book::Column::BookEdition,
        BookField::Year => entity::book::Column::BookYear,
    }
}

/// Exact-match condition over the provided fields only. `None` matches NULL.
fn match_condition(filter: &[FieldValue]) -> Condition {
    filter
        .iter()
        .fold(Condition::all(), |cond, FieldValue { field, value }| {
            let column = column_for(*field);
            match value {
                Some(value) => cond.add(column.eq(value.clone())),
                None => cond.add(column.is_null()),
            }
        })
}

pub struct BookRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every stored book
    pub async fn get_all(&self) -> Result<Vec<Book>, DbErr> {
        let books = entity::prelude::Book::find()
            .order_by_asc(entity::book::Column::NativeKey)
            .all(self.db)
            .await?;

        Ok(books.into_iter().map(Book::from_entity).collect())
    }

    /// Gets the first book carrying the given internal identifier
    pub async fn find_by_book_id(&self, book_id: &str) -> Result<Option<Book>, DbErr> {
        let book = self.find_model_by_book_id(book_id).await?;

        Ok(book.map(Book::from_entity))
    }

    /// Counts books whose provided fields all match exactly
    pub async fn count_matching(&self, filter: &[FieldValue]) -> Result<u64, DbErr> {
        entity::prelude::Book::find()
            .filter(match_condition(filter))
            .count(self.db)
            .await
    }

    /// Inserts a book and returns the native key storage assigned to it
    pub async fn insert(&self, book: &Book) -> Result<i32, DbErr> {
        let model = entity::book::ActiveModel {
            book_id: ActiveValue::Set(book.book_id.clone()),
            book_name: ActiveValue::Set(book.book_name.clone()),
            book_author: ActiveValue::Set(book.book_author.clone()),
            book_edition: ActiveValue::Set(book.book_edition.clone()),
            book_pages: ActiveValue::Set(book.book_pages.clone()),
            book_year: ActiveValue::Set(book.book_year.clone()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(model.native_key)
    }

    /// Applies only the given fields to the first book with `book_id`.
    ///
    /// Returns the matched count, 0 when no such book exists. An empty field set performs
    /// no write but still reports the match.
    pub async fn update_fields(&self, book_id: &str, changes: &[FieldValue]) -> Result<u64, DbErr> {
        let Some(book) = self.find_model_by_book_id(book_id).await? else {
            return Ok(0);
        };

        if changes.is_empty() {
            return Ok(1);
        }

        let update = changes.iter().fold(
            entity::prelude::Book::update_many(),
            |update, FieldValue { field, value }| {
                update.col_expr(column_for(*field), Expr::value(value.clone()))
            },
        );

        let result = update
            .filter(entity::book::Column::NativeKey.eq(book.native_key))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes the first book with `book_id`, returning the deleted count
    pub async fn delete_by_book_id(&self, book_id: &str) -> Result<u64, DbErr> {
        let Some(book) = self.find_model_by_book_id(book_id).await? else {
            return Ok(0);
        };

        let result = entity::prelude::Book::delete_by_id(book.native_key)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    async fn find_model_by_book_id(
        &self,
        book_id: &str,
    ) -> Result<Option<entity::book::Model>, DbErr> {
        entity::prelude::Book::find()
            .filter(entity::book::Column::BookId.eq(book_id))
            .order_by_asc(entity::book::Column::NativeKey)
            .one(self.db)
            .await
    }
}
