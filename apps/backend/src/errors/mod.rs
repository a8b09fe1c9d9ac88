//! Error handling for the backend core.

pub mod domain;

pub use domain::DomainError;
