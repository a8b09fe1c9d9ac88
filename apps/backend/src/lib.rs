#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod dto;
pub mod errors;
pub mod repos;
pub mod services;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use dto::{PlayerDto, WordDto};
pub use errors::domain::{DomainError, NotFoundKind};
pub use repos::players::{Player, PlayerRepo};
pub use repos::words::{Word, WordRepo};
pub use services::players::PlayerService;
pub use services::words::WordService;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
