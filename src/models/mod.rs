//! Data structures for the team balancer: players, teams, match info, application state.

mod manager;
mod match_info;
mod player;
mod team;

pub use manager::{RosterSnapshot, TeamError, TeamManager};
pub use match_info::{MatchDay, MatchInfo};
pub use player::{is_valid_rating, Player, PlayerId, MAX_RATING, MIN_RATING};
pub use team::{glyph_for_label, Team, TeamColor, TeamConfig};
