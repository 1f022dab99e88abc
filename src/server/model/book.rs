//! Book domain model and the external/internal field mapping.
//!
//! The catalog speaks two vocabularies: the API and views use `id`, `title`, `author`,
//! `pages`, `edition`, `year`, while storage uses `ID`, `BookName`, `BookAuthor`,
//! `BookPages`, `BookEdition`, `BookYear`. `BookField` is the only place the two are tied
//! together; filters and partial updates are expressed as `FieldValue`s keyed by it.

use crate::model::book::{BookDto, CreateBookDto, UpdateBookDto};

/// One attribute of a book record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookField {
    Id,
    Title,
    Author,
    Pages,
    Edition,
    Year,
}

/// (field, external name, internal name)
const FIELD_NAMES: [(BookField, &str, &str); 6] = [
    (BookField::Id, "id", "ID"),
    (BookField::Title, "title", "BookName"),
    (BookField::Author, "author", "BookAuthor"),
    (BookField::Pages, "pages", "BookPages"),
    (BookField::Edition, "edition", "BookEdition"),
    (BookField::Year, "year", "BookYear"),
];

impl BookField {
    /// Every mapped field, in external declaration order.
    pub const ALL: [BookField; 6] = [
        BookField::Id,
        BookField::Title,
        BookField::Author,
        BookField::Pages,
        BookField::Edition,
        BookField::Year,
    ];

    /// Fields a partial update may change. The identifier is not among them.
    pub const UPDATABLE: [BookField; 5] = [
        BookField::Title,
        BookField::Author,
        BookField::Edition,
        BookField::Pages,
        BookField::Year,
    ];

    /// Name used by the JSON API and the views.
    pub fn external_name(self) -> &'static str {
        FIELD_NAMES
            .iter()
            .find(|(field, _, _)| *field == self)
            .map(|(_, external, _)| *external)
            .unwrap_or_default()
    }

    /// Column name used by storage.
    pub fn internal_name(self) -> &'static str {
        FIELD_NAMES
            .iter()
            .find(|(field, _, _)| *field == self)
            .map(|(_, _, internal)| *internal)
            .unwrap_or_default()
    }

    /// Whether a book must always carry a non-empty value for this field.
    pub fn is_required(self) -> bool {
        matches!(self, BookField::Id | BookField::Title | BookField::Author)
    }
}

/// A single field paired with its value; `None` stands for an absent (NULL) value.
///
/// A slice of these is used both as an exact-match filter and as a partial field set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValue {
    pub field: BookField,
    pub value: Option<String>,
}

impl FieldValue {
    pub fn new(field: BookField, value: Option<String>) -> Self {
        Self { field, value }
    }
}

/// Canonical book record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    /// Storage-assigned identity. `None` until the record has been inserted.
    pub native_key: Option<i32>,
    /// Application-assigned logical identifier.
    pub book_id: String,
    pub book_name: String,
    pub book_author: String,
    pub book_edition: Option<String>,
    pub book_pages: Option<String>,
    pub book_year: Option<String>,
}

impl Book {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::book::Model) -> Self {
        Self {
            native_key: Some(entity.native_key),
            book_id: entity.book_id,
            book_name: entity.book_name,
            book_author: entity.book_author,
            book_edition: entity.book_edition,
            book_pages: entity.book_pages,
            book_year: entity.book_year,
        }
    }

    /// Maps the external representation onto a record that has not been stored yet.
    pub fn from_dto(dto: BookDto) -> Self {
        Self {
            native_key: None,
            book_id: dto.id,
            book_name: dto.title,
            book_author: dto.author,
            book_edition: dto.edition,
            book_pages: dto.pages,
            book_year: dto.year,
        }
    }

    /// Converts domain model to DTO for API responses and views. The native key is dropped.
    pub fn into_dto(self) -> BookDto {
        BookDto {
            id: self.book_id,
            title: self.book_name,
            author: self.book_author,
            pages: self.book_pages,
            edition: self.book_edition,
            year: self.book_year,
        }
    }

    /// Value currently held for `field`.
    pub fn value_of(&self, field: BookField) -> Option<&str> {
        match field {
            BookField::Id => Some(self.book_id.as_str()),
            BookField::Title => Some(self.book_name.as_str()),
            BookField::Author => Some(self.book_author.as_str()),
            BookField::Pages => self.book_pages.as_deref(),
            BookField::Edition => self.book_edition.as_deref(),
            BookField::Year => self.book_year.as_deref(),
        }
    }

    /// Every field with its value, used as the content-equality filter for duplicates.
    pub fn field_values(&self) -> Vec<FieldValue> {
        BookField::ALL
            .iter()
            .map(|&field| FieldValue::new(field, self.value_of(field).map(str::to_string)))
            .collect()
    }
}

/// Raw input for creating a book, before presence checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateBookParams {
    pub book_id: Option<String>,
    pub book_name: Option<String>,
    pub book_author: Option<String>,
    pub book_edition: Option<String>,
    pub book_pages: Option<String>,
    pub book_year: Option<String>,
}

impl CreateBookParams {
    pub fn from_dto(dto: CreateBookDto) -> Self {
        Self {
            book_id: dto.id,
            book_name: dto.title,
            book_author: dto.author,
            book_edition: dto.edition,
            book_pages: dto.pages,
            book_year: dto.year,
        }
    }

    /// Builds the candidate record if `id`, `title` and `author` are present and non-empty.
    pub fn into_book(self) -> Option<Book> {
        let book_id = self.book_id.filter(|v| !v.is_empty())?;
        let book_name = self.book_name.filter(|v| !v.is_empty())?;
        let book_author = self.book_author.filter(|v| !v.is_empty())?;

        Some(Book {
            native_key: None,
            book_id,
            book_name,
            book_author,
            book_edition: self.book_edition,
            book_pages: self.book_pages,
            book_year: self.book_year,
        })
    }
}

/// Partial update input. Outer `None` means the attribute was not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateBookParams {
    pub book_name: Option<Option<String>>,
    pub book_author: Option<Option<String>>,
    pub book_edition: Option<Option<String>>,
    pub book_pages: Option<Option<String>>,
    pub book_year: Option<Option<String>>,
}

impl UpdateBookParams {
    pub fn from_dto(dto: UpdateBookDto) -> Self {
        Self {
            book_name: dto.title,
            book_author: dto.author,
            book_edition: dto.edition,
            book_pages: dto.pages,
            book_year: dto.year,
        }
    }

    fn get(&self, field: BookField) -> Option<&Option<String>> {
        match field {
            BookField::Id => None,
            BookField::Title => self.book_name.as_ref(),
            BookField::Author => self.book_author.as_ref(),
            BookField::Pages => self.book_pages.as_ref(),
            BookField::Edition => self.book_edition.as_ref(),
            BookField::Year => self.book_year.as_ref(),
        }
    }

    /// The partial field set: only attributes present in the request, in storage terms.
    pub fn changes(&self) -> Vec<FieldValue> {
        BookField::UPDATABLE
            .iter()
            .filter_map(|&field| {
                self.get(field)
                    .map(|value| FieldValue::new(field, value.clone()))
            })
            .collect()
    }

    /// Required fields the request tries to clear with `null` or an empty string.
    pub fn cleared_required_fields(&self) -> Vec<BookField> {
        self.changes()
            .into_iter()
            .filter(|change| {
                change.field.is_required() && change.value.as_deref().unwrap_or("").is_empty()
            })
            .map(|change| change.field)
            .collect()
    }
}
