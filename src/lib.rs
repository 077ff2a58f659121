//! Football team balancer web app: library with models, business logic and roster storage.

pub mod logic;
pub mod models;
pub mod storage;

pub use logic::{format_team_list, generate_teams, generate_teams_with_rng};
pub use models::{
    glyph_for_label, is_valid_rating, MatchDay, MatchInfo, Player, PlayerId, RosterSnapshot, Team,
    TeamColor, TeamConfig, TeamError, TeamManager, MAX_RATING, MIN_RATING,
};
pub use storage::{
    commit_roster, load_roster, save_roster, JsonFileStore, KeyValueStore, MemoryStore, StoreError,
    ROSTER_KEY,
};
