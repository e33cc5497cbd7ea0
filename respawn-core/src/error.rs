//! Diagnostics raised while handling respawn events.
//!
//! None of these are fatal. Handlers log them and fall back to the host's
//! default spawn behavior.

use respawn_utils::BlockPos;
use thiserror::Error;
use uuid::Uuid;

/// A recoverable problem found while deciding a respawn point.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RespawnError {
    /// Every search attempt came back without a safe surface.
    #[error("Found no valid respawn location after {attempts} attempts")]
    SearchExhausted {
        /// How many columns were tried.
        attempts: u32,
    },
    /// The player has no respawn state attached.
    #[error("Player {player} has no respawn location state")]
    MissingState {
        /// The player whose state is missing.
        player: Uuid,
    },
    /// The stored anchor no longer resolves to a spawn point.
    #[error("Respawn anchor at {anchor} is missing or obstructed")]
    UnresolvableAnchor {
        /// Position of the anchor block.
        anchor: BlockPos,
    },
}
