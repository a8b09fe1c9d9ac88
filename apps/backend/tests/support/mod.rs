#![allow(dead_code)]

// Shared test doubles: in-memory repositories that record every call so
// tests can verify counts and ordering of repository interactions.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use backend::errors::domain::DomainError;
use backend::repos::players::{Player, PlayerRepo};
use backend::repos::words::{Word, WordRepo};
use time::Date;

// Logging is auto-installed for test binaries
#[ctor::ctor]
fn init_logging() {
    backend_test_support::test_logging::init();
}

/// Repository calls, recorded in invocation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoCall {
    FindAll,
    FindById(i64),
    ExistsById(i64),
    Save,
    DeleteById(i64),
    FindAllOrdered,
}

/// Convenience constructor for test players.
pub fn player(id: i64, name: &str, date: Date) -> Player {
    Player {
        id: Some(id),
        name: name.to_string(),
        registration_date: date,
    }
}

/// Convenience constructor for test words.
pub fn word(id: i64, text: &str, used: bool) -> Word {
    Word {
        id,
        text: text.to_string(),
        used,
    }
}

struct PlayerStore {
    players: Vec<Player>,
    calls: Vec<RepoCall>,
    next_id: i64,
}

/// In-memory `PlayerRepo` with call recording.
///
/// Clones share state, so a test can hand one clone to the service and keep
/// another for assertions.
#[derive(Clone)]
pub struct RecordingPlayerRepo {
    store: Arc<Mutex<PlayerStore>>,
}

impl RecordingPlayerRepo {
    pub fn new() -> Self {
        Self::with_players(Vec::new())
    }

    pub fn with_players(players: Vec<Player>) -> Self {
        let next_id = players
            .iter()
            .filter_map(|p| p.id)
            .max()
            .unwrap_or(0)
            + 1;
        Self {
            store: Arc::new(Mutex::new(PlayerStore {
                players,
                calls: Vec::new(),
                next_id,
            })),
        }
    }

    pub fn calls(&self) -> Vec<RepoCall> {
        self.store.lock().unwrap().calls.clone()
    }

    pub fn save_count(&self) -> usize {
        self.count(|c| matches!(c, RepoCall::Save))
    }

    pub fn delete_count(&self) -> usize {
        self.count(|c| matches!(c, RepoCall::DeleteById(_)))
    }

    /// Current store contents, in insertion order.
    pub fn stored_players(&self) -> Vec<Player> {
        self.store.lock().unwrap().players.clone()
    }

    fn count(&self, pred: impl Fn(&RepoCall) -> bool) -> usize {
        self.store.lock().unwrap().calls.iter().filter(|c| pred(c)).count()
    }
}

#[async_trait]
impl PlayerRepo for RecordingPlayerRepo {
    async fn find_all(&self) -> Result<Vec<Player>, DomainError> {
        let mut store = self.store.lock().unwrap();
        store.calls.push(RepoCall::FindAll);
        Ok(store.players.clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Player>, DomainError> {
        let mut store = self.store.lock().unwrap();
        store.calls.push(RepoCall::FindById(id));
        Ok(store.players.iter().find(|p| p.id == Some(id)).cloned())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, DomainError> {
        let mut store = self.store.lock().unwrap();
        store.calls.push(RepoCall::ExistsById(id));
        Ok(store.players.iter().any(|p| p.id == Some(id)))
    }

    async fn save(&self, mut player: Player) -> Result<Player, DomainError> {
        let mut store = self.store.lock().unwrap();
        store.calls.push(RepoCall::Save);

        match player.id {
            None => {
                player.id = Some(store.next_id);
                store.next_id += 1;
                store.players.push(player.clone());
            }
            Some(id) => {
                if let Some(existing) =
                    store.players.iter_mut().find(|p| p.id == Some(id))
                {
                    *existing = player.clone();
                } else {
                    store.players.push(player.clone());
                }
            }
        }

        Ok(player)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), DomainError> {
        let mut store = self.store.lock().unwrap();
        store.calls.push(RepoCall::DeleteById(id));
        store.players.retain(|p| p.id != Some(id));
        Ok(())
    }
}

struct WordStore {
    words: Vec<Word>,
    calls: Vec<RepoCall>,
}

/// In-memory `WordRepo` with call recording.
#[derive(Clone)]
pub struct RecordingWordRepo {
    store: Arc<Mutex<WordStore>>,
}

impl RecordingWordRepo {
    pub fn with_words(words: Vec<Word>) -> Self {
        Self {
            store: Arc::new(Mutex::new(WordStore {
                words,
                calls: Vec::new(),
            })),
        }
    }

    pub fn calls(&self) -> Vec<RepoCall> {
        self.store.lock().unwrap().calls.clone()
    }
}

#[async_trait]
impl WordRepo for RecordingWordRepo {
    async fn find_all_ordered(&self) -> Result<Vec<Word>, DomainError> {
        let mut store = self.store.lock().unwrap();
        store.calls.push(RepoCall::FindAllOrdered);
        // Contractually ordered: by id ascending, regardless of seeding order.
        let mut words = store.words.clone();
        words.sort_by_key(|w| w.id);
        Ok(words)
    }
}
