//! Player domain model and repository trait.

use async_trait::async_trait;
use time::Date;

use crate::errors::domain::DomainError;

/// Player domain model
///
/// `id` is `None` only on an entity that has not been persisted yet; every
/// player returned by a [`PlayerRepo`] carries the id assigned by the
/// backing store.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: Option<i64>,
    pub name: String,
    pub registration_date: Date,
}

/// Persistence access for players.
///
/// Implementations are external to this core (database adapters, in-memory
/// fakes). All faults they raise surface as [`DomainError::Infra`] and pass
/// through the service layer unmodified.
///
/// [`DomainError::Infra`]: crate::errors::domain::DomainError::Infra
#[async_trait]
pub trait PlayerRepo: Send + Sync {
    /// Fetch all players in the store's natural order.
    async fn find_all(&self) -> Result<Vec<Player>, DomainError>;

    /// Look up a single player by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Player>, DomainError>;

    /// Check whether a player with this id exists.
    async fn exists_by_id(&self, id: i64) -> Result<bool, DomainError>;

    /// Persist a player, assigning an id on first save.
    ///
    /// Returns the persisted representation, id included.
    async fn save(&self, player: Player) -> Result<Player, DomainError>;

    /// Remove a player by id.
    async fn delete_by_id(&self, id: i64) -> Result<(), DomainError>;
}
