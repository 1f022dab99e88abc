//! Database repository layer.
//!
//! Repositories handle the CRUD operations against storage. They use SeaORM entity models
//! internally and return domain models so the service layer never sees storage types.

pub mod book;
