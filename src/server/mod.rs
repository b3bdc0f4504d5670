//! Axum HTTP server: the game REST API
//!
//! The dictionary index is shared as `Arc<DictionaryIndex>` across async
//! handlers; per-board mutation goes through the [`session::SessionStore`].
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | GET | `/api/game/new` | Create a game board and register it |
//! | POST | `/api/game/guess` | Submit a guess for a board id |

pub mod session;

use std::sync::Arc;
use std::time::SystemTime;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use uuid::Uuid;

use crate::dictionary::DictionaryIndex;
use crate::engine::WordEngine;
use crate::game::{self, GameError, GuessOutcome};
use session::{GameBoard, SessionStore};

/// Word length used for every board created over the API
pub const GAME_WORD_LENGTH: usize = 6;
/// Minimum sub-word length used for every board created over the API
pub const GAME_MIN_SUB_LENGTH: usize = 3;

#[derive(Clone)]
pub struct AppState {
    index: Arc<DictionaryIndex>,
    sessions: Arc<SessionStore>,
}

impl AppState {
    #[must_use]
    pub fn new(index: Arc<DictionaryIndex>) -> Self {
        Self {
            index,
            sessions: Arc::new(SessionStore::new()),
        }
    }
}

pub fn create_router(index: Arc<DictionaryIndex>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handle_health_check))
        .route("/api/game/new", get(handle_new_game))
        .route("/api/game/guess", post(handle_guess))
        .layer(cors)
        .with_state(AppState::new(index))
}

/// Serve the game API until interrupted
///
/// # Errors
///
/// Returns an error when the listener cannot bind or the server fails.
pub async fn run(index: Arc<DictionaryIndex>, port: u16) -> std::io::Result<()> {
    let words = index.len();
    let app = create_router(index);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(port, words, "jumble API server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install CTRL+C signal handler");
}

// ── Request/Response types ──────────────────────────────────────────

/// Guess submission payload
#[derive(Debug, Clone, Deserialize)]
pub struct GuessRequest {
    pub id: Option<String>,
    pub word: Option<String>,
}

/// Wire shape shared by every game API response
///
/// Failure responses carry only `result`; the other fields are omitted.
#[derive(Debug, Clone, Serialize)]
pub struct GameResponse {
    pub result: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_word: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scramble_word: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guess_word: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_words: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_words: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guessed_words: Option<Vec<String>>,
}

impl GameResponse {
    /// A result label with every other field omitted
    fn label(result: impl Into<String>) -> Self {
        Self {
            result: result.into(),
            id: None,
            original_word: None,
            scramble_word: None,
            guess_word: None,
            total_words: None,
            remaining_words: None,
            guessed_words: None,
        }
    }

    /// Snapshot of a board's current state under the given result label
    fn from_board(result: impl Into<String>, board: &GameBoard, guess_word: Option<&str>) -> Self {
        Self {
            result: result.into(),
            id: Some(board.id.to_string()),
            original_word: Some(board.state.original().to_string()),
            scramble_word: Some(board.state.scramble().to_string()),
            guess_word: guess_word.map(ToString::to_string),
            total_words: Some(board.state.total_words()),
            remaining_words: Some(board.state.remaining_words()),
            guessed_words: Some(board.state.guessed_words()),
        }
    }
}

// ── Handlers ────────────────────────────────────────────────────────

async fn handle_health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "OK" }))
}

async fn handle_new_game(State(state): State<AppState>) -> (StatusCode, Json<GameResponse>) {
    match create_game(&state) {
        Ok(resp) => {
            tracing::info!(
                id = resp.id.as_deref().unwrap_or_default(),
                boards = state.sessions.len(),
                "created new game"
            );
            (StatusCode::OK, Json(resp))
        }
        Err(err) => {
            tracing::error!(%err, "game creation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(GameResponse::label(err.to_string())),
            )
        }
    }
}

async fn handle_guess(
    State(state): State<AppState>,
    Json(input): Json<GuessRequest>,
) -> (StatusCode, Json<GameResponse>) {
    let (status, resp) = apply_guess(&state, &input);
    (status, Json(resp))
}

// ── Game logic over the store ───────────────────────────────────────

/// Create a board, register it, and snapshot it for the caller
fn create_game(state: &AppState) -> Result<GameResponse, GameError> {
    let engine = WordEngine::new(&state.index);
    let game_state = game::new_game(&engine, GAME_WORD_LENGTH, GAME_MIN_SUB_LENGTH)?;

    let (_, board) = state.sessions.insert(game_state);
    let board = board.lock().expect("game board lock poisoned");

    Ok(GameResponse::from_board("Created new game.", &board, None))
}

/// Validate the id, then play one guess against the matching board
///
/// A missing/malformed id and an unregistered id are distinct failures,
/// and neither touches any stored state.
fn apply_guess(state: &AppState, input: &GuessRequest) -> (StatusCode, GameResponse) {
    let Some(raw_id) = input
        .id
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
    else {
        return (
            StatusCode::NOT_FOUND,
            GameResponse::label("Invalid Game ID."),
        );
    };
    let Ok(id) = Uuid::parse_str(raw_id) else {
        return (
            StatusCode::NOT_FOUND,
            GameResponse::label("Invalid Game ID."),
        );
    };

    let Some(board) = state.sessions.get(&id) else {
        return (
            StatusCode::NOT_FOUND,
            GameResponse::label("Game board/state not found."),
        );
    };

    let mut board = board.lock().expect("game board lock poisoned");
    let guess_word = input.word.as_deref().map(str::trim);

    let outcome = board.state.guess(guess_word.unwrap_or(""));
    board.modified_at = SystemTime::now();

    let result = match outcome {
        GuessOutcome::Correct => "Guessed correctly.",
        GuessOutcome::Incorrect => "Guessed incorrectly.",
        GuessOutcome::AllGuessed => "All words guessed.",
    };
    tracing::debug!(id = %board.id, result, "guess played");

    (
        StatusCode::OK,
        GameResponse::from_board(result, &board, guess_word),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::loader;

    fn app_state() -> AppState {
        // "yellow" is the only six-letter word, so every board uses it
        let index = loader::from_lines(["yellow", "low", "owl", "yell"]).unwrap();
        AppState::new(Arc::new(index))
    }

    fn guess(state: &AppState, id: Option<&str>, word: Option<&str>) -> (StatusCode, GameResponse) {
        apply_guess(
            state,
            &GuessRequest {
                id: id.map(ToString::to_string),
                word: word.map(ToString::to_string),
            },
        )
    }

    #[test]
    fn create_game_snapshot() {
        let state = app_state();
        let resp = create_game(&state).unwrap();

        assert_eq!(resp.result, "Created new game.");
        assert_eq!(resp.original_word.as_deref(), Some("yellow"));
        assert_ne!(resp.scramble_word.as_deref(), Some("yellow"));
        assert_eq!(resp.total_words, Some(3));
        assert_eq!(resp.remaining_words, Some(3));
        assert_eq!(resp.guessed_words.as_deref(), Some(&[][..]));
        assert!(resp.guess_word.is_none());
        assert_eq!(state.sessions.len(), 1);
    }

    #[test]
    fn guess_with_missing_id_is_invalid() {
        let state = app_state();
        create_game(&state).unwrap();

        for id in [None, Some(""), Some("   ")] {
            let (status, resp) = guess(&state, id, Some("low"));
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(resp.result, "Invalid Game ID.");
            assert!(resp.id.is_none());
        }
    }

    #[test]
    fn guess_with_malformed_id_is_invalid() {
        let state = app_state();
        create_game(&state).unwrap();

        let (status, resp) = guess(&state, Some("not-a-uuid"), Some("low"));
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(resp.result, "Invalid Game ID.");
    }

    #[test]
    fn guess_with_unknown_id_is_not_found() {
        let state = app_state();
        create_game(&state).unwrap();

        let unknown = Uuid::new_v4().to_string();
        let (status, resp) = guess(&state, Some(&unknown), Some("low"));
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(resp.result, "Game board/state not found.");
    }

    #[test]
    fn failed_guesses_do_not_mutate_state() {
        let state = app_state();
        let created = create_game(&state).unwrap();
        let id = created.id.unwrap();

        guess(&state, Some("not-a-uuid"), Some("low"));
        guess(&state, Some(&Uuid::new_v4().to_string()), Some("low"));

        let (_, resp) = guess(&state, Some(&id), Some("zzz"));
        assert_eq!(resp.remaining_words, Some(3));
        assert_eq!(resp.guessed_words.as_deref(), Some(&[][..]));
    }

    #[test]
    fn guess_flow_to_completion() {
        let state = app_state();
        let created = create_game(&state).unwrap();
        let id = created.id.unwrap();

        // Wrong word first
        let (status, resp) = guess(&state, Some(&id), Some("zzz"));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(resp.result, "Guessed incorrectly.");
        assert_eq!(resp.guess_word.as_deref(), Some("zzz"));
        assert_eq!(resp.remaining_words, Some(3));

        // First correct word
        let (_, resp) = guess(&state, Some(&id), Some("low"));
        assert_eq!(resp.result, "Guessed correctly.");
        assert_eq!(resp.remaining_words, Some(2));
        assert_eq!(resp.guessed_words.as_deref(), Some(&["low".to_string()][..]));

        // Repeat gives no credit
        let (_, resp) = guess(&state, Some(&id), Some("low"));
        assert_eq!(resp.result, "Guessed incorrectly.");
        assert_eq!(resp.remaining_words, Some(2));

        // Finish the board
        let (_, resp) = guess(&state, Some(&id), Some("owl"));
        assert_eq!(resp.result, "Guessed correctly.");
        let (_, resp) = guess(&state, Some(&id), Some("yell"));
        assert_eq!(resp.result, "All words guessed.");
        assert_eq!(resp.remaining_words, Some(0));
        assert_eq!(
            resp.guessed_words,
            Some(vec!["low".to_string(), "owl".to_string(), "yell".to_string()])
        );
    }

    #[test]
    fn guess_echoes_trimmed_word_and_rescrambles() {
        let state = app_state();
        let created = create_game(&state).unwrap();
        let id = created.id.unwrap();

        let (_, resp) = guess(&state, Some(&id), Some("  low  "));
        assert_eq!(resp.result, "Guessed correctly.");
        assert_eq!(resp.guess_word.as_deref(), Some("low"));
        assert_ne!(resp.scramble_word.as_deref(), Some("yellow"));
    }

    #[test]
    fn guess_with_missing_word_is_incorrect() {
        let state = app_state();
        let created = create_game(&state).unwrap();
        let id = created.id.unwrap();

        let (status, resp) = guess(&state, Some(&id), None);
        assert_eq!(status, StatusCode::OK);
        assert_eq!(resp.result, "Guessed incorrectly.");
        assert!(resp.guess_word.is_none());
    }

    #[test]
    fn error_response_serializes_result_only() {
        let resp = GameResponse::label("Invalid Game ID.");
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json, serde_json::json!({ "result": "Invalid Game ID." }));
    }
}
