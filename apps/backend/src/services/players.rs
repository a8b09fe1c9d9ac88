//! Player domain service.

use time::{Date, OffsetDateTime};
use tracing::{debug, info};

use crate::dto::PlayerDto;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::players::{Player, PlayerRepo};

/// Player CRUD service.
///
/// Orchestrates repository calls, applies date defaulting on create, and
/// maps entities to DTOs. The repository is injected at construction.
pub struct PlayerService<R: PlayerRepo> {
    repo: R,
}

/// Current calendar date (UTC), used when a create request carries no date.
fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

impl<R: PlayerRepo> PlayerService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Fetch all players, preserving the repository's order.
    pub async fn get_all_players(&self) -> Result<Vec<PlayerDto>, DomainError> {
        let players = self.repo.find_all().await?;
        Ok(players.into_iter().map(PlayerDto::from).collect())
    }

    /// Look up a single player by id.
    ///
    /// # Returns
    /// * `Ok(PlayerDto)` - The mapped player
    /// * `Err(DomainError::NotFound)` - If no player exists for `id`
    pub async fn get_player_by_id(&self, id: i64) -> Result<PlayerDto, DomainError> {
        let player = self.repo.find_by_id(id).await?.ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Player, format!("Player {id} not found"))
        })?;

        Ok(PlayerDto::from(player))
    }

    /// Create a new player from the DTO.
    ///
    /// A missing `date` defaults to the current date at the moment of the
    /// call; id assignment is the repository's job. Returns the DTO of the
    /// saved entity, reflecting the assigned id and resolved date.
    pub async fn create_player(&self, dto: PlayerDto) -> Result<PlayerDto, DomainError> {
        let registration_date = dto.date.unwrap_or_else(today);

        let player = Player {
            id: None,
            name: dto.name,
            registration_date,
        };

        let saved = self.repo.save(player).await?;
        info!(player_id = ?saved.id, "created player");
        Ok(PlayerDto::from(saved))
    }

    /// Overwrite an existing player's fields with the DTO's values.
    ///
    /// Fails with `NotFound` before any save when `id` is absent. A DTO
    /// without a date keeps the stored registration date, so a persisted
    /// player never loses it.
    pub async fn update_player(&self, id: i64, dto: PlayerDto) -> Result<PlayerDto, DomainError> {
        let Some(mut player) = self.repo.find_by_id(id).await? else {
            return Err(DomainError::not_found(
                NotFoundKind::Player,
                format!("Player {id} not found"),
            ));
        };

        player.name = dto.name;
        if let Some(date) = dto.date {
            player.registration_date = date;
        }

        let saved = self.repo.save(player).await?;
        debug!(player_id = id, "updated player");
        Ok(PlayerDto::from(saved))
    }

    /// Delete a player by id.
    ///
    /// The existence check runs first; `delete_by_id` is never invoked for
    /// a nonexistent id.
    pub async fn delete_player(&self, id: i64) -> Result<(), DomainError> {
        if !self.repo.exists_by_id(id).await? {
            return Err(DomainError::not_found(
                NotFoundKind::Player,
                format!("Player {id} not found"),
            ));
        }

        self.repo.delete_by_id(id).await?;
        info!(player_id = id, "deleted player");
        Ok(())
    }
}
