//! HTTP request handlers.
//!
//! Controllers convert requests into service parameters, call the services and convert
//! domain models back into DTOs or rendered views.

pub mod book;
pub mod view;

#[cfg(test)]
mod test;
