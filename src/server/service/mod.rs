//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer. They
//! implement the catalog rules (presence checks, duplicate detection, partial updates)
//! and work with domain models rather than DTOs or entity models.

pub mod book;
pub mod catalog;
