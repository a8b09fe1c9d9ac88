//! Wire-facing DTO projections of the domain models.
//!
//! DTOs decouple the service boundary from the persistence shape. A DTO
//! produced from a persisted entity always carries `Some` for its optional
//! fields; the optionals exist for the inbound create/update path.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::repos::players::Player;
use crate::repos::words::Word;

/// Player projection: {id, name, date}.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerDto {
    pub id: Option<i64>,
    pub name: String,
    pub date: Option<Date>,
}

/// Word projection: {id, text, used}.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordDto {
    pub id: i64,
    pub text: String,
    pub used: bool,
}

impl From<Player> for PlayerDto {
    fn from(player: Player) -> Self {
        Self {
            id: player.id,
            name: player.name,
            date: Some(player.registration_date),
        }
    }
}

impl From<Word> for WordDto {
    fn from(word: Word) -> Self {
        Self {
            id: word.id,
            text: word.text,
            used: word.used,
        }
    }
}
