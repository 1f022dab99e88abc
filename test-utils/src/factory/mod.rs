//! Factory methods for creating test data.
//!
//! Each factory inserts rows with sensible, unique defaults so tests only spell out the
//! fields they care about.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let book = factory::create_book(&db).await?;
//!
//! let custom = factory::book::BookFactory::new(&db)
//!     .book_id("b1")
//!     .edition(Some("2nd"))
//!     .build()
//!     .await?;
//! ```

pub mod book;
pub mod helpers;

pub use book::{create_book, create_book_by};
