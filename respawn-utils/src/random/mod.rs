//! Random number sources.
//!
//! Game logic takes a `&mut impl Random` instead of reaching for a thread-local
//! generator, so every consumer can be driven from a fixed seed in tests.

pub mod legacy_random;

pub use legacy_random::LegacyRandom;

/// A source of pseudo-random values.
pub trait Random {
    /// Next `i32` in `[0, bound)`. Returns 0 when `bound <= 0`.
    fn next_i32_bounded(&mut self, bound: i32) -> i32;

    /// Next boolean, true and false equally likely.
    fn next_bool(&mut self) -> bool;
}
