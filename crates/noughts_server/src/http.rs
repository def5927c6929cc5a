//! REST API over a shared [`GameStore`].
//!
//! | Method | Path               | Result                      |
//! |--------|--------------------|-----------------------------|
//! | POST   | `/games`           | `{"Id": n}`                 |
//! | GET    | `/games/{id}`      | game snapshot               |
//! | POST   | `/games/{id}/move` | snapshot after the move     |
//! | GET    | `/health`          | `{"status": "ok", ...}`     |

use crate::error::ApiError;
use crate::store::GameStore;
use axum::body::{Body, Bytes};
use axum::extract::{Path, State};
use axum::http::Request;
use axum::response::Response;
use axum::routing::{get, post};
use axum::{Json, Router};
use noughts_tictactoe::{GameError, GameId, GameSnapshot, Mark};
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tracing::{debug, info, instrument};

/// Body of `POST /games`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreatedGame {
    /// Id of the new game.
    pub id: GameId,
}

/// Body accepted by `POST /games/{id}/move`.
///
/// Every field is required and unknown fields are refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct MoveRequest {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub column: usize,
    /// Mark of the player moving, `"X"` or `"0"`.
    pub player: Mark,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    /// Always `"ok"` while the server is answering.
    pub status: String,
    /// Games created so far.
    pub games: usize,
}

/// Builds the application router with request logging.
pub fn router(store: GameStore) -> Router {
    Router::new()
        .route("/games", post(create_game))
        .route("/games/{id}", get(get_game))
        .route("/games/{id}/move", post(play_move))
        .route("/health", get(health))
        .with_state(store)
        .layer(
            ServiceBuilder::new()
                .map_request(|req: Request<Body>| {
                    info!(method = %req.method(), uri = %req.uri(), "Incoming HTTP request");
                    req
                })
                .map_response(|resp: Response| {
                    info!(status = %resp.status(), "Response sent");
                    resp
                }),
        )
}

/// Ids are decimal digits only; anything else names no game.
fn parse_id(raw: &str) -> Result<GameId, ApiError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        debug!(raw, "Rejecting non-numeric game id");
        return Err(ApiError::not_found());
    }
    raw.parse::<u64>()
        .map(GameId::new)
        .map_err(|_| ApiError::not_found())
}

fn parse_move(body: &[u8]) -> Result<MoveRequest, GameError> {
    if body.is_empty() {
        return Err(GameError::MalformedRequest(
            "Please send a request body".to_string(),
        ));
    }
    serde_json::from_slice(body).map_err(|e| GameError::MalformedRequest(e.to_string()))
}

#[instrument(skip(store))]
async fn create_game(State(store): State<GameStore>) -> Json<CreatedGame> {
    let id = store.create_game();
    Json(CreatedGame { id })
}

#[instrument(skip(store))]
async fn get_game(
    State(store): State<GameStore>,
    Path(raw_id): Path<String>,
) -> Result<Json<GameSnapshot>, ApiError> {
    let id = parse_id(&raw_id)?;
    Ok(Json(store.get_snapshot(id)?))
}

#[instrument(skip(store, body), fields(body_len = body.len()))]
async fn play_move(
    State(store): State<GameStore>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<Json<GameSnapshot>, ApiError> {
    let id = parse_id(&raw_id)?;
    // An unknown game is reported ahead of a bad body.
    store.lookup(id)?;

    let request = parse_move(&body)?;
    debug!(?request, "Decoded move");

    let snapshot = store.submit_move(id, request.row, request.column, request.player)?;
    Ok(Json(snapshot))
}

async fn health(State(store): State<GameStore>) -> Json<Health> {
    Json(Health {
        status: "ok".to_string(),
        games: store.len(),
    })
}
