//! TeamColor, Team, and TeamConfig.

use crate::models::player::Player;
use serde::{Deserialize, Serialize};

/// Color label for a team. The set is closed: every color has a fixed glyph.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamColor {
    Black,
    White,
    Red,
    Blue,
    Green,
    Yellow,
    Orange,
    Purple,
}

impl TeamColor {
    /// All colors, in default palette order.
    pub const ALL: [TeamColor; 8] = [
        TeamColor::Black,
        TeamColor::White,
        TeamColor::Red,
        TeamColor::Blue,
        TeamColor::Green,
        TeamColor::Yellow,
        TeamColor::Orange,
        TeamColor::Purple,
    ];

    /// Lowercase label, as stored and sent over the API.
    pub fn label(self) -> &'static str {
        match self {
            TeamColor::Black => "black",
            TeamColor::White => "white",
            TeamColor::Red => "red",
            TeamColor::Blue => "blue",
            TeamColor::Green => "green",
            TeamColor::Yellow => "yellow",
            TeamColor::Orange => "orange",
            TeamColor::Purple => "purple",
        }
    }

    /// Label with the first letter uppercased (used in the team listing).
    pub fn display_name(self) -> &'static str {
        match self {
            TeamColor::Black => "Black",
            TeamColor::White => "White",
            TeamColor::Red => "Red",
            TeamColor::Blue => "Blue",
            TeamColor::Green => "Green",
            TeamColor::Yellow => "Yellow",
            TeamColor::Orange => "Orange",
            TeamColor::Purple => "Purple",
        }
    }

    /// Emoji glyph shown next to the color in the listing.
    pub fn glyph(self) -> &'static str {
        match self {
            TeamColor::Black => "\u{26AB}\u{FE0F}",
            TeamColor::White => "\u{26AA}\u{FE0F}",
            TeamColor::Red => "\u{1F534}",
            TeamColor::Blue => "\u{1F535}",
            TeamColor::Green => "\u{1F7E2}",
            TeamColor::Yellow => "\u{1F7E1}",
            TeamColor::Orange => "\u{1F7E0}",
            TeamColor::Purple => "\u{1F7E3}",
        }
    }

    /// Parse a lowercase label. Unknown labels give `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl std::fmt::Display for TeamColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Glyph for a free-form color label; empty for labels outside the known set.
pub fn glyph_for_label(label: &str) -> &'static str {
    TeamColor::from_label(label).map_or("", TeamColor::glyph)
}

/// One generated team. Teams are rebuilt from scratch on every generation.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    /// 1-based position among the generated teams.
    pub id: usize,
    pub name: String,
    pub color: TeamColor,
    pub players: Vec<Player>,
}

impl Team {
    /// Empty team number `id` (1-based).
    pub fn new(id: usize, color: TeamColor) -> Self {
        Self {
            id,
            name: format!("Team {id}"),
            color,
            players: Vec::new(),
        }
    }

    /// Sum of player ratings.
    pub fn total_rating(&self) -> u32 {
        self.players.iter().map(|p| u32::from(p.rating)).sum()
    }
}

/// How many teams to build and how big they are.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamConfig {
    /// At least 2.
    pub team_count: usize,
    /// At least 1.
    pub players_per_team: usize,
    /// Colors assigned cyclically to teams. Must not be empty.
    #[serde(default = "default_palette")]
    pub palette: Vec<TeamColor>,
}

fn default_palette() -> Vec<TeamColor> {
    TeamColor::ALL.to_vec()
}

impl Default for TeamConfig {
    fn default() -> Self {
        Self {
            team_count: 2,
            players_per_team: 5,
            palette: default_palette(),
        }
    }
}

impl TeamConfig {
    pub fn new(team_count: usize, players_per_team: usize) -> Self {
        Self {
            team_count,
            players_per_team,
            ..Self::default()
        }
    }

    /// Number of players needed to fill every team.
    pub fn required_players(&self) -> usize {
        self.team_count.saturating_mul(self.players_per_team)
    }

    /// Color for the team at zero-based `index`, cycling through the palette. `None` when the
    /// palette is empty.
    pub fn color_for(&self, index: usize) -> Option<TeamColor> {
        if self.palette.is_empty() {
            return None;
        }
        Some(self.palette[index % self.palette.len()])
    }

    /// Describe why this config cannot be used, if it cannot.
    pub fn problem(&self) -> Option<&'static str> {
        if self.team_count < 2 {
            Some("Need at least 2 teams")
        } else if self.players_per_team == 0 {
            Some("Need at least 1 player per team")
        } else if self.palette.is_empty() {
            Some("Color palette is empty")
        } else {
            None
        }
    }
}
