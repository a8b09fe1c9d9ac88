//! Domain services orchestrating repository calls and DTO mapping.

pub mod players;
pub mod words;
