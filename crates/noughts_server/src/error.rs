//! Mapping of game errors onto HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use noughts_tictactoe::GameError;
use tracing::warn;

/// A rejected request: status code plus a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}: {}", status, message)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// Creates an error with an explicit status.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// 404 for an id that never named a game.
    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "Game not found")
    }

    /// Status code sent to the client.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Message sent to the client.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<GameError> for ApiError {
    fn from(err: GameError) -> Self {
        let status = match &err {
            GameError::MalformedRequest(_) | GameError::OutOfBounds { .. } => {
                StatusCode::BAD_REQUEST
            }
            GameError::WrongPlayer { .. }
            | GameError::AlreadyOccupied(_)
            | GameError::GameFinished => StatusCode::FORBIDDEN,
            GameError::GameNotFound(_) => StatusCode::NOT_FOUND,
        };
        Self::new(status, err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!(status = %self.status, message = %self.message, "Request rejected");
        (self.status, self.message).into_response()
    }
}
