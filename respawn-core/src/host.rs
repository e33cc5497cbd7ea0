//! Interfaces the host server implements for the respawn logic.
//!
//! Terrain queries, anchor validation and the live respawn pointer all stay
//! with the host. The respawn logic only ever calls through these traits.

use respawn_utils::{BlockPos, ColumnPos, GlobalPos, Identifier};
use uuid::Uuid;

/// Finds a safe, standable surface inside a column.
pub trait SurfaceOracle {
    /// Returns the position a player can safely spawn at in `column`, or
    /// `None` if the column has no safe surface. The host may search the whole
    /// chunk around the column, vanilla `getSpawnPosInChunk` style.
    fn find_safe_surface_in_column(&self, column: ColumnPos) -> Option<BlockPos>;
}

impl<F> SurfaceOracle for F
where
    F: Fn(ColumnPos) -> Option<BlockPos>,
{
    fn find_safe_surface_in_column(&self, column: ColumnPos) -> Option<BlockPos> {
        self(column)
    }
}

/// The world a player is in.
pub trait RespawnWorld: SurfaceOracle {
    /// Key of this world's dimension.
    fn dimension(&self) -> &Identifier;

    /// Whether beds work in this dimension. Vanilla: `DimensionType.bedWorks`.
    fn supports_anchor_respawn(&self) -> bool;

    /// Resolves an anchor block to the position the player would respawn at,
    /// or `None` if the anchor is gone or obstructed.
    ///
    /// Vanilla: `ServerPlayer.findRespawnAndUseSpawnBlock` without consuming charges.
    fn resolve_anchor(&self, anchor: BlockPos, angle: f32) -> Option<BlockPos>;

    /// Resolves a stored respawn point for a player joining this world.
    ///
    /// Points stored in another dimension resolve to `None`.
    fn resolve_stored_position(&self, stored: &GlobalPos) -> Option<BlockPos> {
        (stored.dimension == *self.dimension()).then_some(stored.pos)
    }
}

/// A respawn point written to the player's live respawn pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct RespawnPoint {
    /// Dimension the player respawns in.
    pub dimension: Identifier,
    /// Where to respawn. `None` means world spawn.
    pub position: Option<BlockPos>,
    /// Yaw the player faces after respawning.
    pub angle: f32,
    /// Whether the point is forced, i.e. used even without a valid anchor.
    pub forced: bool,
}

impl RespawnPoint {
    /// A non-forced respawn point facing angle 0.
    #[must_use]
    pub const fn unforced(dimension: Identifier, position: Option<BlockPos>) -> Self {
        Self {
            dimension,
            position,
            angle: 0.0,
            forced: false,
        }
    }
}

/// A server-side player as seen by the respawn logic.
pub trait RespawnPlayer {
    /// Stable identity of the player.
    fn uuid(&self) -> Uuid;

    /// Display name, used in log messages.
    fn name(&self) -> &str;

    /// Whether the player entity is alive.
    fn is_alive(&self) -> bool;

    /// Key of the dimension the player is currently in.
    fn dimension(&self) -> &Identifier;

    /// The anchor (bed) the player currently respawns at, if any.
    fn respawn_anchor(&self) -> Option<BlockPos>;

    /// Overwrites the player's live respawn pointer.
    fn set_respawn_position(&mut self, respawn: RespawnPoint);
}

/// What kind of entity a state attach request is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// A connected player.
    Player,
    /// A placeholder player used by automation. Never gets respawn state.
    FakePlayer,
    /// Any non-player entity.
    Other,
}

/// An entity offered for respawn state attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttachTarget {
    /// Identity of the entity.
    pub uuid: Uuid,
    /// What the entity is.
    pub kind: EntityKind,
}

impl AttachTarget {
    /// Whether the target is a real, connected player.
    #[must_use]
    pub const fn is_real_player(&self) -> bool {
        matches!(self.kind, EntityKind::Player)
    }
}
