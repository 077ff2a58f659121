//! Integration tests for the team manager: roster edits, selection and generation state.

use team_balancer_web::{Player, TeamConfig, TeamError, TeamManager};
use uuid::Uuid;

fn manager_with(ratings: &[u8]) -> TeamManager {
    let mut m = TeamManager::new();
    for (i, &r) in ratings.iter().enumerate() {
        m.add_player(format!("P{i}"), r).unwrap();
    }
    m
}

#[test]
fn add_player_trims_and_validates() {
    let mut m = TeamManager::new();
    let id = m.add_player("  Alice ", 7).unwrap();
    assert_eq!(m.get_player(id).unwrap().name, "Alice");
    assert_eq!(m.add_player("   ", 5), Err(TeamError::EmptyName));
    assert_eq!(m.add_player("Bob", 0), Err(TeamError::RatingOutOfRange(0)));
    assert_eq!(m.add_player("Bob", 11), Err(TeamError::RatingOutOfRange(11)));
    assert_eq!(m.players.len(), 1);
}

#[test]
fn removing_a_player_drops_them_from_selection() {
    let mut m = manager_with(&[5, 6, 7]);
    let id = m.players[1].id;
    m.select_all();
    m.remove_player(id).unwrap();
    assert_eq!(m.players.len(), 2);
    assert!(!m.selected.contains(&id));
    assert_eq!(m.selected.len(), 2);
    assert_eq!(m.remove_player(id), Err(TeamError::PlayerNotFound(id)));
}

#[test]
fn rating_edit_for_unknown_id_leaves_roster_unchanged() {
    let mut m = manager_with(&[5, 6]);
    let before = m.players.clone();
    assert!(!m.update_rating(Uuid::new_v4(), Some(9)));
    assert_eq!(m.players, before);
}

#[test]
fn rating_edit_without_usable_rating_is_a_no_op() {
    let mut m = manager_with(&[5]);
    let id = m.players[0].id;
    assert!(!m.update_rating(id, None));
    assert!(!m.update_rating(id, Some(42)));
    assert_eq!(m.players[0].rating, 5);
    assert!(m.update_rating(id, Some(9)));
    assert_eq!(m.players[0].rating, 9);
}

#[test]
fn rating_edit_does_not_touch_generated_teams() {
    let mut m = manager_with(&[5, 6, 7, 8]);
    m.set_config(TeamConfig::new(2, 2)).unwrap();
    m.select_all();
    m.generate().unwrap();
    let teams = m.teams.clone();
    let id = m.players[0].id;
    assert!(m.update_rating(id, Some(1)));
    assert_eq!(m.teams, teams);
}

#[test]
fn toggle_selection_flips_and_rejects_unknown_ids() {
    let mut m = manager_with(&[5]);
    let id = m.players[0].id;
    assert_eq!(m.toggle_selection(id), Ok(true));
    assert!(m.is_selected(id));
    assert_eq!(m.toggle_selection(id), Ok(false));
    assert!(!m.is_selected(id));
    let unknown = Uuid::new_v4();
    assert_eq!(m.toggle_selection(unknown), Err(TeamError::PlayerNotFound(unknown)));
}

#[test]
fn selected_players_follow_roster_order() {
    let mut m = manager_with(&[1, 2, 3, 4]);
    let ids: Vec<_> = m.players.iter().map(|p| p.id).collect();
    m.toggle_selection(ids[3]).unwrap();
    m.toggle_selection(ids[0]).unwrap();
    m.toggle_selection(ids[2]).unwrap();
    let names: Vec<_> = m.selected_players().into_iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["P0", "P2", "P3"]);
}

#[test]
fn failed_generation_keeps_previous_teams_and_records_error() {
    let mut m = manager_with(&[10, 8, 6, 4]);
    m.set_config(TeamConfig::new(2, 2)).unwrap();
    m.select_all();
    m.generate().unwrap();
    let teams = m.teams.clone();
    assert!(m.error.is_none());

    let id = m.players[0].id;
    m.toggle_selection(id).unwrap();
    let err = m.regenerate().unwrap_err();
    assert!(matches!(err, TeamError::InsufficientPlayers { required: 4, actual: 3, .. }));
    assert_eq!(m.teams, teams);
    assert_eq!(m.error.as_deref(), Some(err.to_string().as_str()));

    m.toggle_selection(id).unwrap();
    m.regenerate().unwrap();
    assert!(m.error.is_none());
}

#[test]
fn failed_first_generation_produces_no_teams() {
    let mut m = manager_with(&[5, 5, 5]);
    m.select_all();
    assert!(m.generate().is_err());
    assert!(m.teams.is_empty());
    assert!(m.team_list().is_none());
}

#[test]
fn team_list_reflects_generated_teams() {
    let mut m = manager_with(&[5, 5, 5, 5]);
    m.set_config(TeamConfig::new(2, 2)).unwrap();
    m.select_all();
    m.generate().unwrap();
    let listing = m.team_list().unwrap();
    assert!(listing.contains("Team List:"));
    assert!(listing.contains("Black"));
    assert!(listing.contains("White"));
    for p in &m.players {
        assert!(listing.contains(&p.name));
    }
}

#[test]
fn invalid_config_is_not_applied() {
    let mut m = TeamManager::new();
    assert!(matches!(m.set_config(TeamConfig::new(1, 5)), Err(TeamError::InvalidConfig(_))));
    assert_eq!(m.config, TeamConfig::default());
}

#[test]
fn with_roster_starts_with_nothing_selected() {
    let m = TeamManager::with_roster(vec![Player::new("Ann", 4), Player::new("Ben", 6)]);
    assert_eq!(m.players.len(), 2);
    assert!(m.selected.is_empty());
    assert!(m.teams.is_empty());
}
