use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::EngineError;

use serde::Serialize;
pub use server::{ServerState, router, run, run_with_listener, spawn_with_listener};

mod items;
mod movements;
mod server;
mod statistics;
mod user;

pub mod types {
    pub mod item {
        pub use api_types::item::{ItemNew, ItemUpdate, ItemView};
    }

    pub mod movement {
        pub use api_types::movement::{MovementKind, MovementNew, MovementView};
    }

    pub mod stats {
        pub use api_types::stats::DashboardStats;
    }

    pub mod user {
        pub use api_types::user::{LoggedUser, Login, LoginResponse, UserNew, UserView};
    }
}

pub enum ServerError {
    Engine(EngineError),
    Generic(String),
}

/// Failure body shape: `{"error": "..."}`.
#[derive(Serialize)]
struct Error {
    error: String,
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::NotFound(_) => StatusCode::NOT_FOUND,
        EngineError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        EngineError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
        EngineError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn message_for_engine_error(err: EngineError) -> String {
    match err {
        EngineError::Database(db_err) => {
            tracing::error!("database error: {db_err}");
            "internal server error".to_string()
        }
        other => other.to_string(),
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ServerError::Engine(err) => {
                (status_for_engine_error(&err), message_for_engine_error(err))
            }
            ServerError::Generic(err) => (StatusCode::BAD_REQUEST, err),
        };

        (status, Json(Error { error })).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}
