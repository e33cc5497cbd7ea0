//! Per-player respawn state and the store that owns it.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use respawn_utils::GlobalPos;

/// The respawn point a player chose, kept across reconnects and deaths.
///
/// `None` means the player has no custom point and respawns at world spawn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedRespawnState {
    /// The stored respawn point, if any.
    pub position: Option<GlobalPos>,
}

impl PersistedRespawnState {
    /// A fresh state with no respawn point.
    #[must_use]
    pub const fn new() -> Self {
        Self { position: None }
    }

    /// The stored respawn point.
    #[must_use]
    pub const fn position(&self) -> Option<&GlobalPos> {
        self.position.as_ref()
    }

    /// Replaces the stored respawn point.
    pub fn set_position(&mut self, position: GlobalPos) {
        self.position = Some(position);
    }

    /// Overwrites this state with a copy of `other`.
    pub fn copy_from(&mut self, other: &Self) {
        self.position.clone_from(&other.position);
    }
}

/// Keyed storage for [`PersistedRespawnState`], one entry per player identity.
pub trait PlayerStateStore {
    /// Whether `player` already has a state attached.
    fn contains(&self, player: &Uuid) -> bool;

    /// The state of `player`.
    fn get(&self, player: &Uuid) -> Option<&PersistedRespawnState>;

    /// Mutable access to the state of `player`.
    fn get_mut(&mut self, player: &Uuid) -> Option<&mut PersistedRespawnState>;

    /// Attaches a fresh state to `player` unless one exists.
    ///
    /// Returns `true` if a new state was created.
    fn attach(&mut self, player: Uuid) -> bool;
}

/// An error raised while snapshotting the store.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The store could not be encoded.
    #[error("Failed to encode respawn states: {0}")]
    Encode(serde_json::Error),
    /// The snapshot is not a valid respawn state map.
    #[error("Failed to decode respawn states: {0}")]
    Decode(serde_json::Error),
}

/// A [`PlayerStateStore`] kept in memory, snapshotted to JSON by the host.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InMemoryStateStore {
    states: FxHashMap<Uuid, PersistedRespawnState>,
}

impl InMemoryStateStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of players with a state.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether no player has a state.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Encodes every state as a JSON object keyed by player UUID.
    pub fn to_json(&self) -> Result<String, StorageError> {
        serde_json::to_string(self).map_err(StorageError::Encode)
    }

    /// Restores a store from [`InMemoryStateStore::to_json`] output.
    pub fn from_json(json: &str) -> Result<Self, StorageError> {
        serde_json::from_str(json).map_err(StorageError::Decode)
    }
}

impl PlayerStateStore for InMemoryStateStore {
    fn contains(&self, player: &Uuid) -> bool {
        self.states.contains_key(player)
    }

    fn get(&self, player: &Uuid) -> Option<&PersistedRespawnState> {
        self.states.get(player)
    }

    fn get_mut(&mut self, player: &Uuid) -> Option<&mut PersistedRespawnState> {
        self.states.get_mut(player)
    }

    fn attach(&mut self, player: Uuid) -> bool {
        if self.states.contains_key(&player) {
            return false;
        }
        self.states.insert(player, PersistedRespawnState::new());
        true
    }
}
