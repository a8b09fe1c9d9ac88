//! Word domain service.

use crate::dto::WordDto;
use crate::errors::domain::DomainError;
use crate::repos::words::WordRepo;

/// Read-only word listing service.
pub struct WordService<R: WordRepo> {
    repo: R,
}

impl<R: WordRepo> WordService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Fetch all words in the repository's defined order.
    pub async fn get_all_words(&self) -> Result<Vec<WordDto>, DomainError> {
        let words = self.repo.find_all_ordered().await?;
        Ok(words.into_iter().map(WordDto::from).collect())
    }
}
