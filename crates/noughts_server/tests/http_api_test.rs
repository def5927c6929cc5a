//! End-to-end tests for the REST API, driven through the router in-process.

use axum::Router;
use axum::body::{Body, Bytes};
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use noughts_server::{CreatedGame, GameStore, Health, router};
use noughts_tictactoe::{Board, GameId, GameSnapshot, Mark};
use tower::ServiceExt;

async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Bytes) {
    let body = match body {
        Some(text) => Body::from(text.to_owned()),
        None => Body::empty(),
    };
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(body)
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes)
}

async fn create(app: &Router) -> GameId {
    let (status, body) = send(app, Method::POST, "/games", None).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_slice::<CreatedGame>(&body).unwrap().id
}

async fn play(
    app: &Router,
    id: u64,
    row: usize,
    column: usize,
    player: &str,
) -> (StatusCode, Bytes) {
    let body = format!(r#"{{"Row": {row}, "Column": {column}, "Player": "{player}"}}"#);
    send(app, Method::POST, &format!("/games/{id}/move"), Some(&body)).await
}

fn snapshot(body: &Bytes) -> GameSnapshot {
    serde_json::from_slice(body).unwrap()
}

#[tokio::test]
async fn test_create_returns_id_object() {
    let app = router(GameStore::new());
    let (status, body) = send(&app, Method::POST, "/games", None).await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json, serde_json::json!({ "Id": 1 }));
    assert_eq!(create(&app).await, GameId::new(2));
}

#[tokio::test]
async fn test_new_game_state() {
    let app = router(GameStore::new());
    create(&app).await;

    let (status, body) = send(&app, Method::GET, "/games/1", None).await;
    assert_eq!(status, StatusCode::OK);

    let game = snapshot(&body);
    assert_eq!(game.board, Board::new());
    assert_eq!(game.next_to_play, Mark::Cross);
    assert!(!game.finished);
    assert_eq!(game.winner, None);

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(json.get("Winner").is_none());
}

#[tokio::test]
async fn test_move_flow() {
    let app = router(GameStore::new());
    create(&app).await;

    let (status, body) = play(&app, 1, 0, 0, "X").await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        json["Board"],
        serde_json::json!([["X", " ", " "], [" ", " ", " "], [" ", " ", " "]])
    );
    assert_eq!(json["NextToPlay"], "0");
    assert_eq!(json["Finished"], false);

    // Same cell again, by the right player.
    let (status, _) = play(&app, 1, 0, 0, "0").await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Same move repeated by X, who is no longer next.
    let (status, _) = play(&app, 1, 0, 0, "X").await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (_, body) = send(&app, Method::GET, "/games/1", None).await;
    assert_eq!(snapshot(&body).move_count, 1);
}

#[tokio::test]
async fn test_wrong_player_forbidden() {
    let app = router(GameStore::new());
    create(&app).await;

    let (status, body) = play(&app, 1, 1, 1, "0").await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(!body.is_empty());
}

#[tokio::test]
async fn test_unknown_game_not_found() {
    let app = router(GameStore::new());
    create(&app).await;

    for uri in ["/games/999", "/games/0", "/games/abc"] {
        let (status, _) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
    }

    let (status, _) = play(&app, 999, 0, 0, "X").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_bad_bodies_rejected() {
    let app = router(GameStore::new());
    create(&app).await;

    let bodies = [
        None,
        Some("{"),
        Some(r#"{"Row": 0, "Column": 0, "Player": "X", "Colour": "red"}"#),
        Some(r#"{"Row": 0, "Column": 0}"#),
        Some(r#"{"Row": 3, "Column": 0, "Player": "X"}"#),
        Some(r#"{"Row": 0, "Column": 0, "Player": "Q"}"#),
    ];
    for body in bodies {
        let (status, _) = send(&app, Method::POST, "/games/1/move", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body:?}");
    }

    let (_, body) = send(&app, Method::GET, "/games/1", None).await;
    assert_eq!(snapshot(&body).move_count, 0);
}

#[tokio::test]
async fn test_draw_over_http() {
    let app = router(GameStore::new());
    create(&app).await;

    let moves = [
        ("X", 0, 0),
        ("0", 0, 1),
        ("X", 0, 2),
        ("0", 1, 1),
        ("X", 1, 0),
        ("0", 1, 2),
        ("X", 2, 1),
        ("0", 2, 0),
        ("X", 2, 2),
    ];
    let mut last = Bytes::new();
    for (player, row, column) in moves {
        let (status, body) = play(&app, 1, row, column, player).await;
        assert_eq!(status, StatusCode::OK);
        last = body;
    }

    let game = snapshot(&last);
    assert!(game.finished);
    assert_eq!(game.winner, None);
    assert_eq!(game.move_count, 9);
}

#[tokio::test]
async fn test_diagonal_win_then_finished() {
    let app = router(GameStore::new());
    create(&app).await;

    for (player, row, column) in [("X", 0, 0), ("0", 0, 1), ("X", 1, 1), ("0", 0, 2)] {
        let (status, _) = play(&app, 1, row, column, player).await;
        assert_eq!(status, StatusCode::OK);
    }
    let (status, body) = play(&app, 1, 2, 2, "X").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["Finished"], true);
    assert_eq!(json["Winner"], "X");

    // Nought is next but the game is over.
    let (status, _) = play(&app, 1, 2, 0, "0").await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_games_are_independent() {
    let app = router(GameStore::new());
    create(&app).await;
    create(&app).await;

    let (status, _) = play(&app, 2, 1, 1, "X").await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, Method::GET, "/games/1", None).await;
    assert_eq!(snapshot(&body).move_count, 0);
    let (_, body) = send(&app, Method::GET, "/games/2", None).await;
    assert_eq!(snapshot(&body).next_to_play, Mark::Nought);
}

#[tokio::test]
async fn test_health_counts_games() {
    let app = router(GameStore::new());
    create(&app).await;

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    let health: Health = serde_json::from_slice(&body).unwrap();
    assert_eq!(health.status, "ok");
    assert_eq!(health.games, 1);
}
