//! Random respawn location search around a death location.
//!
//! Candidates are drawn from a square ring: each horizontal axis is offset
//! independently by `±[min, max)` blocks, so the sampled region is the square
//! of half-width `max` minus the square of half-width `min`.

use respawn_utils::random::{LegacyRandom, Random};
use respawn_utils::{BlockPos, ColumnPos};

use crate::host::SurfaceOracle;

/// Maximum number of columns tried per search.
pub const FIND_SPAWN_ATTEMPTS: u32 = 16;

/// Picks respawn locations near a death location.
///
/// Owns its random source. Tests inject a seeded [`LegacyRandom`] through
/// [`RespawnLocator::with_random`] to get a reproducible candidate sequence.
#[derive(Debug, Clone)]
pub struct RespawnLocator<R: Random = LegacyRandom> {
    random: R,
}

impl RespawnLocator<LegacyRandom> {
    /// A locator seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_random(LegacyRandom::from_entropy())
    }
}

impl Default for RespawnLocator<LegacyRandom> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Random> RespawnLocator<R> {
    /// A locator drawing from `random`.
    #[must_use]
    pub const fn with_random(random: R) -> Self {
        Self { random }
    }

    /// Searches for a safe respawn location around `death_location`.
    ///
    /// Tries up to [`FIND_SPAWN_ATTEMPTS`] random columns and returns the first
    /// surface the oracle accepts, unchanged. `min_distance < max_distance` is
    /// a configuration invariant and is not checked here; an empty range puts
    /// every candidate at exactly `±min_distance`.
    #[tracing::instrument(level = "trace", skip(self, oracle), name = "find_respawn")]
    pub fn find_valid_respawn_location<O: SurfaceOracle + ?Sized>(
        &mut self,
        death_location: BlockPos,
        min_distance: i32,
        max_distance: i32,
        oracle: &O,
    ) -> Option<BlockPos> {
        let center = death_location.column();
        for attempt in 1..=FIND_SPAWN_ATTEMPTS {
            log::debug!("Searching for respawn location - Attempt {attempt}/{FIND_SPAWN_ATTEMPTS}");
            let column = self.sample_column(center, min_distance, max_distance);
            if let Some(pos) = oracle.find_safe_surface_in_column(column) {
                log::debug!("Found valid respawn location: {pos}");
                return Some(pos);
            }
        }
        log::debug!("Found no valid respawn location after {FIND_SPAWN_ATTEMPTS} attempts");
        None
    }

    /// Draws one candidate column around `center`. X is sampled before Z.
    pub fn sample_column(
        &mut self,
        center: ColumnPos,
        min_distance: i32,
        max_distance: i32,
    ) -> ColumnPos {
        let dx = self.random_offset(min_distance, max_distance);
        let dz = self.random_offset(min_distance, max_distance);
        ColumnPos::new(center.x.wrapping_add(dx), center.z.wrapping_add(dz))
    }

    /// `sign * (min + uniform[0, max - min))`, the sign drawn first.
    fn random_offset(&mut self, min_distance: i32, max_distance: i32) -> i32 {
        let sign = if self.random.next_bool() { -1 } else { 1 };
        let spread = self
            .random
            .next_i32_bounded(max_distance.saturating_sub(min_distance));
        sign * (min_distance + spread)
    }
}
