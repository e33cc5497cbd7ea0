//! Shared value types for the respawn crates.
//!
//! Positions are integer block coordinates, dimensions are namespaced
//! identifiers and randomness goes through the [`random::Random`] trait so
//! callers can inject a seeded source.

mod identifier;
mod position;
pub mod random;

pub use identifier::{Identifier, IdentifierError};
pub use position::{BlockPos, ChunkPos, ColumnPos, GlobalPos};
