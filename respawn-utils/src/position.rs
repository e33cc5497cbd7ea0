//! Block, column and chunk positions.

use std::fmt;

use glam::IVec3;
use serde::{Deserialize, Serialize};

use crate::Identifier;

/// A block position in the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BlockPos(pub IVec3);

impl BlockPos {
    /// Creates a block position from its components.
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self(IVec3::new(x, y, z))
    }

    /// The x coordinate.
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.0.x
    }

    /// The y coordinate.
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.0.y
    }

    /// The z coordinate.
    #[must_use]
    pub const fn z(&self) -> i32 {
        self.0.z
    }

    /// Taxicab distance to `other`. Vanilla: `Vec3i.distManhattan`.
    ///
    /// Widened to `i64` so positions at opposite ends of the world do not overflow.
    #[must_use]
    pub fn manhattan_distance(&self, other: &Self) -> i64 {
        i64::from(self.0.x.abs_diff(other.0.x))
            + i64::from(self.0.y.abs_diff(other.0.y))
            + i64::from(self.0.z.abs_diff(other.0.z))
    }

    /// The column this block stands in.
    #[must_use]
    pub const fn column(&self) -> ColumnPos {
        ColumnPos::new(self.0.x, self.0.z)
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.0.x, self.0.y, self.0.z)
    }
}

/// A horizontal `(x, z)` position, i.e. a vertical column of blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ColumnPos {
    /// The x coordinate.
    pub x: i32,
    /// The z coordinate.
    pub z: i32,
}

impl ColumnPos {
    /// Creates a column position.
    #[must_use]
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// The chunk containing this column.
    #[must_use]
    pub const fn chunk_pos(&self) -> ChunkPos {
        ChunkPos::new(self.x >> 4, self.z >> 4)
    }

    /// The block at height `y` in this column.
    #[must_use]
    pub const fn at_height(&self, y: i32) -> BlockPos {
        BlockPos::new(self.x, y, self.z)
    }
}

impl fmt::Display for ColumnPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.z)
    }
}

/// A 16x16 chunk coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ChunkPos {
    /// Chunk x coordinate (block x >> 4).
    pub x: i32,
    /// Chunk z coordinate (block z >> 4).
    pub z: i32,
}

impl ChunkPos {
    /// Creates a chunk position.
    #[must_use]
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }
}

/// A block position tagged with the dimension it lives in.
///
/// Vanilla: `GlobalPos`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GlobalPos {
    /// The dimension key, e.g. `minecraft:overworld`.
    pub dimension: Identifier,
    /// The position inside that dimension.
    pub pos: BlockPos,
}

impl GlobalPos {
    /// Creates a new global position.
    #[must_use]
    pub const fn new(dimension: Identifier, pos: BlockPos) -> Self {
        Self { dimension, pos }
    }
}

impl fmt::Display for GlobalPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.dimension, self.pos)
    }
}
