//! Plain-text team listing, used verbatim as the clipboard payload.

use crate::models::{MatchInfo, Team};
use std::fmt::Write;

/// Render the listing: match day/time, ground, then each team's color, glyph and player names.
///
/// The layout (including the leading newline and blank lines between teams) is what gets pasted
/// into group chats, so keep it stable.
pub fn format_team_list(teams: &[Team], info: &MatchInfo) -> String {
    let mut out = format!(
        "\n{} Play {}\n{}\n\nTeam List:\n",
        info.day,
        info.time_label(),
        info.ground
    );
    for team in teams {
        let names: Vec<&str> = team.players.iter().map(|p| p.name.as_str()).collect();
        // Writing to a String cannot fail.
        let _ = write!(
            out,
            "\n{} {}:\n{}\n\n",
            team.color.display_name(),
            team.color.glyph(),
            names.join("\n")
        );
    }
    out
}
