//! Player data structure.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used for selection and lookups).
pub type PlayerId = Uuid;

/// Lowest rating a player can have.
pub const MIN_RATING: u8 = 1;
/// Highest rating a player can have.
pub const MAX_RATING: u8 = 10;

/// A player on the roster. Serialized as `{id, name, rating}`, which is also the stored format.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Skill rating in `MIN_RATING..=MAX_RATING`.
    pub rating: u8,
}

impl Player {
    /// Create a new player with a fresh id. Callers validate name and rating.
    pub fn new(name: impl Into<String>, rating: u8) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            rating,
        }
    }

    /// Replace the rating.
    pub fn set_rating(&mut self, rating: u8) {
        self.rating = rating;
    }
}

/// Whether `rating` lies within the allowed bounds.
pub fn is_valid_rating(rating: u8) -> bool {
    (MIN_RATING..=MAX_RATING).contains(&rating)
}
