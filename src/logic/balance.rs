//! Balanced team generation: rating-sorted round-robin over a shuffled selection.

use crate::models::{Player, Team, TeamConfig, TeamError};
use rand::seq::SliceRandom;
use rand::Rng;

/// Split `selected` into `config.team_count` teams of roughly equal total rating.
///
/// Uses the thread-local RNG, so two calls with the same input usually differ.
pub fn generate_teams(selected: &[Player], config: &TeamConfig) -> Result<Vec<Team>, TeamError> {
    generate_teams_with_rng(selected, config, &mut rand::thread_rng())
}

/// Same as [`generate_teams`] with a caller-supplied RNG.
///
/// 1. Shuffle the selection (breaks ties between equal ratings).
/// 2. Stable sort by rating, highest first.
/// 3. Deal players round-robin: player `i` joins team `i % team_count` if it still has room.
///    Players landing on a full team are left out.
/// 4. Shuffle each team's players for display.
pub fn generate_teams_with_rng<R: Rng + ?Sized>(
    selected: &[Player],
    config: &TeamConfig,
    rng: &mut R,
) -> Result<Vec<Team>, TeamError> {
    if let Some(reason) = config.problem() {
        return Err(TeamError::InvalidConfig(reason));
    }
    let required = config.required_players();
    if selected.len() < required {
        return Err(TeamError::InsufficientPlayers {
            required,
            actual: selected.len(),
            team_count: config.team_count,
            players_per_team: config.players_per_team,
        });
    }

    let mut ranked = selected.to_vec();
    ranked.shuffle(rng);
    ranked.sort_by(|a, b| b.rating.cmp(&a.rating));

    let mut teams: Vec<Team> = (0..config.team_count)
        .map(|i| {
            config
                .color_for(i)
                .map(|color| Team::new(i + 1, color))
                .ok_or(TeamError::InvalidConfig("Color palette is empty"))
        })
        .collect::<Result<_, _>>()?;

    let mut dropped = 0;
    for (i, player) in ranked.into_iter().enumerate() {
        let team = &mut teams[i % config.team_count];
        if team.players.len() < config.players_per_team {
            team.players.push(player);
        } else {
            dropped += 1;
        }
    }
    if dropped > 0 {
        log::debug!("{} selected player(s) left out: all teams full", dropped);
    }

    for team in &mut teams {
        team.players.shuffle(rng);
    }

    Ok(teams)
}
