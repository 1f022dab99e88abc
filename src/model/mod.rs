//! Data transfer objects shared by the JSON API and the HTML views.
//!
//! These types describe the external vocabulary of the catalog (`id`, `title`, `author`,
//! `pages`, `edition`, `year`). The server converts them to and from its domain models at
//! the controller boundary.

pub mod api;
pub mod book;
