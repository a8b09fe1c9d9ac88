//! Domain models and repository traits for the domain layer.

pub mod players;
pub mod words;
