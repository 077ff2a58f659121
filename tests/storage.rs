//! Integration tests for roster persistence.

use team_balancer_web::{
    commit_roster, generate_teams, load_roster, save_roster, JsonFileStore, KeyValueStore,
    MemoryStore, Player, StoreError, TeamConfig, TeamManager, ROSTER_KEY,
};
use uuid::Uuid;

#[test]
fn roster_round_trips_through_memory_store() {
    let store = MemoryStore::new();
    let players = vec![Player::new("Alice", 7), Player::new("Bob", 3)];
    save_roster(&store, &players).unwrap();
    assert_eq!(load_roster(&store), players);
}

#[test]
fn stored_records_are_id_name_rating() {
    let store = MemoryStore::new();
    let p = Player::new("Alice", 7);
    save_roster(&store, std::slice::from_ref(&p)).unwrap();
    let raw = store.get(ROSTER_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{ "id": p.id.to_string(), "name": "Alice", "rating": 7 }])
    );
}

#[test]
fn absent_roster_loads_empty() {
    assert!(load_roster(&MemoryStore::new()).is_empty());
}

#[test]
fn malformed_roster_loads_empty() {
    let store = MemoryStore::new();
    store.set(ROSTER_KEY, "{not json").unwrap();
    assert!(load_roster(&store).is_empty());
    store.set(ROSTER_KEY, r#"[{"name":"no id"}]"#).unwrap();
    assert!(load_roster(&store).is_empty());
}

#[test]
fn json_file_store_persists_across_instances() {
    let dir = std::env::temp_dir().join(format!("team-balancer-test-{}", Uuid::new_v4()));
    let players = vec![Player::new("Carol", 9)];

    let store = JsonFileStore::new(&dir);
    assert!(load_roster(&store).is_empty());
    save_roster(&store, &players).unwrap();
    assert!(dir.join(format!("{ROSTER_KEY}.json")).exists());

    let reopened = JsonFileStore::new(&dir);
    assert_eq!(load_roster(&reopened), players);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn stored_players_with_out_of_range_ratings_are_dropped() {
    let store = MemoryStore::new();
    let (low, ok, high) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
    let raw = serde_json::json!([
        { "id": low, "name": "Low", "rating": 0 },
        { "id": ok, "name": "Fine", "rating": 6 },
        { "id": high, "name": "High", "rating": 200 },
    ]);
    store.set(ROSTER_KEY, &raw.to_string()).unwrap();
    let players = load_roster(&store);
    assert_eq!(players.len(), 1);
    assert_eq!(players[0].id, ok);
    assert_eq!(players[0].rating, 6);
}

#[test]
fn stored_players_with_duplicate_ids_keep_only_the_first() {
    let store = MemoryStore::new();
    let shared = Uuid::new_v4();
    let raw = serde_json::json!([
        { "id": shared, "name": "A", "rating": 9 },
        { "id": shared, "name": "A2", "rating": 8 },
        { "id": Uuid::new_v4(), "name": "C", "rating": 5 },
        { "id": Uuid::new_v4(), "name": "D", "rating": 4 },
    ]);
    store.set(ROSTER_KEY, &raw.to_string()).unwrap();
    let players = load_roster(&store);
    let names: Vec<_> = players.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["A", "C", "D"]);

    // Three distinct players cannot fill two teams of two.
    let mut m = TeamManager::with_roster(players);
    m.select_all();
    assert!(m.generate().is_err());
    assert!(generate_teams(&m.selected_players(), &TeamConfig::new(2, 2)).is_err());
}

/// Store whose writes always fail.
struct ReadOnlyStore;

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "read-only",
        )))
    }
}

#[test]
fn failed_save_rolls_back_an_added_player() {
    let mut m = TeamManager::with_roster(vec![Player::new("Ann", 5)]);
    let before = m.roster_snapshot();
    m.add_player("Ben", 7).unwrap();
    assert!(commit_roster(&ReadOnlyStore, &mut m, before).is_err());
    let names: Vec<_> = m.players.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Ann"]);
}

#[test]
fn failed_save_rolls_back_removal_and_selection() {
    let mut m = TeamManager::with_roster(vec![Player::new("Ann", 5), Player::new("Ben", 7)]);
    m.select_all();
    let id = m.players[1].id;
    let before = m.roster_snapshot();
    m.remove_player(id).unwrap();
    assert!(commit_roster(&ReadOnlyStore, &mut m, before).is_err());
    assert!(m.get_player(id).is_some());
    assert!(m.is_selected(id));
}

#[test]
fn failed_save_rolls_back_a_rating_edit() {
    let mut m = TeamManager::with_roster(vec![Player::new("Ann", 5)]);
    let id = m.players[0].id;
    let before = m.roster_snapshot();
    assert!(m.update_rating(id, Some(9)));
    assert!(commit_roster(&ReadOnlyStore, &mut m, before).is_err());
    assert_eq!(m.players[0].rating, 5);
}

#[test]
fn successful_commit_keeps_the_edit_and_stores_it() {
    let store = MemoryStore::new();
    let mut m = TeamManager::new();
    let before = m.roster_snapshot();
    m.add_player("Ann", 5).unwrap();
    commit_roster(&store, &mut m, before).unwrap();
    assert_eq!(m.players.len(), 1);
    assert_eq!(load_roster(&store), m.players);
}
