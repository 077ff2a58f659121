//! TeamManager: roster, selection, configuration and the last generated teams.

use crate::logic::{format_team_list, generate_teams};
use crate::models::match_info::MatchInfo;
use crate::models::player::{is_valid_rating, Player, PlayerId, MAX_RATING, MIN_RATING};
use crate::models::team::{Team, TeamConfig};
use serde::{Deserialize, Serialize};

/// Errors that can occur while managing the roster or generating teams.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TeamError {
    /// Fewer players selected than the configuration needs.
    InsufficientPlayers {
        required: usize,
        actual: usize,
        team_count: usize,
        players_per_team: usize,
    },
    /// Team count, team size or palette is unusable.
    InvalidConfig(&'static str),
    /// No player with this id on the roster.
    PlayerNotFound(PlayerId),
    /// Player name is empty after trimming.
    EmptyName,
    /// Rating outside `MIN_RATING..=MAX_RATING`.
    RatingOutOfRange(u8),
}

impl std::fmt::Display for TeamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TeamError::InsufficientPlayers {
                required,
                actual,
                team_count,
                players_per_team,
            } => write!(
                f,
                "You need at least {} players selected to create {} teams with {} players each (selected {})",
                required, team_count, players_per_team, actual
            ),
            TeamError::InvalidConfig(reason) => write!(f, "Invalid team configuration: {}", reason),
            TeamError::PlayerNotFound(_) => write!(f, "Player not found"),
            TeamError::EmptyName => write!(f, "Player name must not be empty"),
            TeamError::RatingOutOfRange(r) => {
                write!(f, "Rating must be between {} and {} (got {})", MIN_RATING, MAX_RATING, r)
            }
        }
    }
}

/// Roster and selection as they were before an edit, for rolling back.
#[derive(Clone, Debug)]
pub struct RosterSnapshot {
    players: Vec<Player>,
    selected: Vec<PlayerId>,
}

/// Application state owned by the UI shell. Teams are only replaced by a successful generation.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TeamManager {
    /// Full roster, in insertion order.
    pub players: Vec<Player>,
    /// Ids chosen for the next draw; always a subset of `players`.
    pub selected: Vec<PlayerId>,
    pub config: TeamConfig,
    pub match_info: MatchInfo,
    /// Result of the last successful generation.
    pub teams: Vec<Team>,
    /// Message from the last failed generation, cleared on success.
    pub error: Option<String>,
}

impl TeamManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a previously stored roster. Nothing is selected.
    pub fn with_roster(players: Vec<Player>) -> Self {
        Self {
            players,
            ..Self::new()
        }
    }

    /// Copy of the roster and selection, taken before an edit that must be saved.
    pub fn roster_snapshot(&self) -> RosterSnapshot {
        RosterSnapshot {
            players: self.players.clone(),
            selected: self.selected.clone(),
        }
    }

    /// Put back a roster and selection taken with [`TeamManager::roster_snapshot`].
    pub fn restore_roster(&mut self, snapshot: RosterSnapshot) {
        self.players = snapshot.players;
        self.selected = snapshot.selected;
    }

    pub fn get_player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn is_selected(&self, id: PlayerId) -> bool {
        self.selected.contains(&id)
    }

    /// Add a player to the end of the roster and return their id.
    pub fn add_player(&mut self, name: impl Into<String>, rating: u8) -> Result<PlayerId, TeamError> {
        let name = name.into();
        let name = name.trim();
        if name.is_empty() {
            return Err(TeamError::EmptyName);
        }
        if !is_valid_rating(rating) {
            return Err(TeamError::RatingOutOfRange(rating));
        }
        let player = Player::new(name, rating);
        let id = player.id;
        self.players.push(player);
        Ok(id)
    }

    /// Remove a player from the roster and from the selection.
    pub fn remove_player(&mut self, id: PlayerId) -> Result<(), TeamError> {
        let idx = self
            .players
            .iter()
            .position(|p| p.id == id)
            .ok_or(TeamError::PlayerNotFound(id))?;
        self.players.remove(idx);
        self.selected.retain(|&s| s != id);
        Ok(())
    }

    /// Replace one player's rating. Returns whether anything changed; unknown ids and a missing
    /// or out-of-range rating are no-ops. Teams are not regenerated.
    pub fn update_rating(&mut self, id: PlayerId, rating: Option<u8>) -> bool {
        let Some(rating) = rating.filter(|&r| is_valid_rating(r)) else {
            log::debug!("Ignoring rating edit for {} without a usable rating", id);
            return false;
        };
        match self.players.iter_mut().find(|p| p.id == id) {
            Some(p) => {
                p.set_rating(rating);
                true
            }
            None => {
                log::debug!("Ignoring rating edit for unknown player {}", id);
                false
            }
        }
    }

    /// Flip selection of a roster player. Returns whether the player is now selected.
    pub fn toggle_selection(&mut self, id: PlayerId) -> Result<bool, TeamError> {
        if self.get_player(id).is_none() {
            return Err(TeamError::PlayerNotFound(id));
        }
        if self.is_selected(id) {
            self.selected.retain(|&s| s != id);
            Ok(false)
        } else {
            self.selected.push(id);
            Ok(true)
        }
    }

    /// Select every roster player.
    pub fn select_all(&mut self) {
        self.selected = self.players.iter().map(|p| p.id).collect();
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Selected players, in roster order.
    pub fn selected_players(&self) -> Vec<Player> {
        self.players
            .iter()
            .filter(|p| self.is_selected(p.id))
            .cloned()
            .collect()
    }

    pub fn set_config(&mut self, config: TeamConfig) -> Result<(), TeamError> {
        if let Some(reason) = config.problem() {
            return Err(TeamError::InvalidConfig(reason));
        }
        self.config = config;
        Ok(())
    }

    pub fn set_match_info(&mut self, match_info: MatchInfo) {
        self.match_info = match_info;
    }

    /// Balance the selected players into teams. On failure the message is kept in `error` and
    /// the previous teams stay as they were.
    pub fn generate(&mut self) -> Result<&[Team], TeamError> {
        match generate_teams(&self.selected_players(), &self.config) {
            Ok(teams) => {
                self.teams = teams;
                self.error = None;
                Ok(&self.teams)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Draw again with the same selection and config; assignments will usually differ.
    pub fn regenerate(&mut self) -> Result<&[Team], TeamError> {
        self.generate()
    }

    /// Shareable listing of the current teams, if any have been generated.
    pub fn team_list(&self) -> Option<String> {
        if self.teams.is_empty() {
            None
        } else {
            Some(format_team_list(&self.teams, &self.match_info))
        }
    }
}
