//! Single binary web server: HTML from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default so the app is reachable via DNS on a VPS.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080), ROSTER_DIR (e.g. data).

use actix_files::Files;
use actix_web::{
    delete, get, post, put,
    web::{self, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use serde::{Deserialize, Serialize};
use std::sync::RwLock;
use team_balancer_web::{
    commit_roster, load_roster, JsonFileStore, MatchInfo, PlayerId, RosterSnapshot, StoreError,
    Team, TeamConfig, TeamError, TeamManager,
};

/// Team manager plus the store its roster is written to.
struct AppData {
    manager: TeamManager,
    store: JsonFileStore,
}

impl AppData {
    /// Rewrite the stored roster after a change, rolling back to `before` if the write fails.
    fn persist_roster(&mut self, before: RosterSnapshot) -> Result<(), StoreError> {
        commit_roster(&self.store, &mut self.manager, before)
    }
}

/// Single shared state: one roster, one UI.
type AppState = Data<RwLock<AppData>>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// Everything the page needs to render, in one response.
#[derive(Serialize)]
struct StateView<'a> {
    #[serde(flatten)]
    manager: &'a TeamManager,
    required_players: usize,
    listing: Option<String>,
}

impl<'a> StateView<'a> {
    fn new(manager: &'a TeamManager) -> Self {
        Self {
            manager,
            required_players: manager.config.required_players(),
            listing: manager.team_list(),
        }
    }
}

#[derive(Deserialize)]
struct AddPlayerBody {
    name: String,
    rating: u8,
}

#[derive(Deserialize)]
struct UpdateRatingBody {
    #[serde(default)]
    rating: Option<u8>,
}

/// Path segment: player id (e.g. /api/players/{id})
#[derive(Deserialize)]
struct PlayerPath {
    id: PlayerId,
}

fn state_response(manager: &TeamManager) -> HttpResponse {
    HttpResponse::Ok().json(StateView::new(manager))
}

fn team_error_response(e: &TeamError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        TeamError::PlayerNotFound(_) => HttpResponse::NotFound().json(body),
        _ => HttpResponse::BadRequest().json(body),
    }
}

/// Shared tail of generate and regenerate: log the outcome and answer with the new state.
fn generation_response(manager: &TeamManager, result: Result<usize, TeamError>) -> HttpResponse {
    match result {
        Ok(n) => {
            log::info!("Generated {} teams from {} selected players", n, manager.selected.len());
            state_response(manager)
        }
        Err(e) => {
            log::info!("Team generation skipped: {}", e);
            team_error_response(&e)
        }
    }
}

fn store_error_response(e: &StoreError) -> HttpResponse {
    log::error!("Failed to save roster: {}", e);
    HttpResponse::InternalServerError().json(serde_json::json!({ "error": "Failed to save roster" }))
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "team-balancer-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Full state: roster, selection, config, match info, teams, last error and listing.
#[get("/api/state")]
async fn api_get_state(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    state_response(&g.manager)
}

/// Add a player to the roster.
#[post("/api/players")]
async fn api_add_player(state: AppState, body: Json<AddPlayerBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let before = g.manager.roster_snapshot();
    if let Err(e) = g.manager.add_player(body.name.as_str(), body.rating) {
        return team_error_response(&e);
    }
    if let Err(e) = g.persist_roster(before) {
        return store_error_response(&e);
    }
    state_response(&g.manager)
}

/// Remove a player from the roster (and the selection).
#[delete("/api/players/{id}")]
async fn api_remove_player(state: AppState, path: Path<PlayerPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let before = g.manager.roster_snapshot();
    if let Err(e) = g.manager.remove_player(path.id) {
        return team_error_response(&e);
    }
    if let Err(e) = g.persist_roster(before) {
        return store_error_response(&e);
    }
    state_response(&g.manager)
}

/// Edit a player's rating. Unknown id or missing rating leaves everything unchanged.
#[put("/api/players/{id}/rating")]
async fn api_update_rating(
    state: AppState,
    path: Path<PlayerPath>,
    body: Json<UpdateRatingBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let before = g.manager.roster_snapshot();
    if g.manager.update_rating(path.id, body.rating) {
        if let Err(e) = g.persist_roster(before) {
            return store_error_response(&e);
        }
    }
    state_response(&g.manager)
}

/// Select or deselect a player for the next draw.
#[post("/api/players/{id}/toggle")]
async fn api_toggle_selection(state: AppState, path: Path<PlayerPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.manager.toggle_selection(path.id) {
        Ok(_) => state_response(&g.manager),
        Err(e) => team_error_response(&e),
    }
}

#[post("/api/selection/all")]
async fn api_select_all(state: AppState) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    g.manager.select_all();
    state_response(&g.manager)
}

#[post("/api/selection/clear")]
async fn api_clear_selection(state: AppState) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    g.manager.clear_selection();
    state_response(&g.manager)
}

/// Set team count, players per team and (optionally) the palette.
#[put("/api/config")]
async fn api_set_config(state: AppState, body: Json<TeamConfig>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.manager.set_config(body.into_inner()) {
        Ok(()) => state_response(&g.manager),
        Err(e) => team_error_response(&e),
    }
}

/// Set match day, kick-off time and ground.
#[put("/api/match-info")]
async fn api_set_match_info(state: AppState, body: Json<MatchInfo>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    g.manager.set_match_info(body.into_inner());
    state_response(&g.manager)
}

/// Balance the selected players into teams.
#[post("/api/teams/generate")]
async fn api_generate_teams(state: AppState) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let result = g.manager.generate().map(<[Team]>::len);
    generation_response(&g.manager, result)
}

/// Draw again with the same selection and config.
#[post("/api/teams/regenerate")]
async fn api_regenerate_teams(state: AppState) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let result = g.manager.regenerate().map(<[Team]>::len);
    generation_response(&g.manager, result)
}

/// Team listing as plain text (what the copy button puts on the clipboard).
#[get("/api/teams/listing")]
async fn api_team_listing(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.manager.team_list() {
        Some(text) => HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .body(text),
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No teams generated" })),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_roster_dir() -> String {
    "data".to_string()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let roster_dir = std::env::var("ROSTER_DIR").unwrap_or_else(|_| default_roster_dir());

    let store = JsonFileStore::new(roster_dir);
    let players = load_roster(&store);
    log::info!(
        "Loaded {} player(s) from {}",
        players.len(),
        store.dir().display()
    );

    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(AppData {
        manager: TeamManager::with_roster(players),
        store,
    }));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_get_state)
            .service(api_add_player)
            .service(api_remove_player)
            .service(api_update_rating)
            .service(api_toggle_selection)
            .service(api_select_all)
            .service(api_clear_selection)
            .service(api_set_config)
            .service(api_set_match_info)
            .service(api_generate_teams)
            .service(api_regenerate_teams)
            .service(api_team_listing)
            .service(Files::new("/static", "static"))
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
