//! Synthetic ratings.
//!
//! The source datasets carry no ratings. Each load assigns a fresh value so
//! the list has something to show; it is not part of a facility's identity.

use rand::Rng;

/// Lower bound (inclusive) of generated ratings.
pub const RATING_MIN: f64 = 3.5;

/// Upper bound (exclusive) of generated ratings.
pub const RATING_MAX: f64 = 4.5;

/// Produces ratings for newly normalized facilities.
pub trait RatingSource: Send + Sync {
    fn rating(&self) -> f64;
}

/// Uniformly random ratings in `[RATING_MIN, RATING_MAX)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomRating;

impl RatingSource for RandomRating {
    fn rating(&self) -> f64 {
        rand::thread_rng().gen_range(RATING_MIN..RATING_MAX)
    }
}

/// Always the same rating. Useful for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedRating(pub f64);

impl RatingSource for FixedRating {
    fn rating(&self) -> f64 {
        self.0
    }
}
