//! Word domain model and repository trait.

use async_trait::async_trait;

use crate::errors::domain::DomainError;

/// Word domain model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub id: i64,
    pub text: String,
    pub used: bool,
}

/// Persistence access for words. Read-only at this layer.
#[async_trait]
pub trait WordRepo: Send + Sync {
    /// Fetch all words in a deterministic order (by id ascending).
    ///
    /// The ordering is part of the repository's contract; the service
    /// preserves it as-is.
    async fn find_all_ordered(&self) -> Result<Vec<Word>, DomainError>;
}
