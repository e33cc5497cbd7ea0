//! Respawn location selection and per-player respawn state.
//!
//! When a player dies away from a usable bed, [`RespawnLifecycle`] asks the
//! [`RespawnLocator`] for a random safe spot a configured distance away from
//! the death location. Each player's chosen respawn point (set by using an
//! anchor) lives in a [`PersistedRespawnState`] that survives reconnects and
//! the death-to-respawn clone, and is restored every time the player joins a
//! world.
//!
//! The host server stays in charge of terrain, anchors and the live respawn
//! pointer; it plugs in through the traits in [`host`].

pub mod config;
pub mod error;
pub mod host;
pub mod lifecycle;
pub mod locator;
pub mod state;

pub use config::RespawnConfig;
pub use error::RespawnError;
pub use lifecycle::{DeathOutcome, RespawnLifecycle};
pub use locator::{FIND_SPAWN_ATTEMPTS, RespawnLocator};
pub use state::{InMemoryStateStore, PersistedRespawnState, PlayerStateStore};
