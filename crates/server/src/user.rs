//! User registration and login API endpoints

use api_types::user::{LoggedUser, Login, LoginResponse, UserNew, UserView};
use axum::{Json, extract::State};

use crate::{ServerError, server::ServerState};

/// Handle requests for registering a user.
///
/// The response carries the password digest, never the plaintext.
pub async fn register(
    State(state): State<ServerState>,
    Json(payload): Json<UserNew>,
) -> Result<Json<UserView>, ServerError> {
    let user = state
        .engine
        .register_user(engine::UserNew {
            username: payload.username,
            email: payload.email,
            password: payload.password,
        })
        .await?;

    Ok(Json(UserView {
        id: user.id,
        username: user.username,
        email: user.email,
        password_digest: user.password_digest,
        created_at: user.created_at,
    }))
}

/// Handle login requests
pub async fn login(
    State(state): State<ServerState>,
    Json(payload): Json<Login>,
) -> Result<Json<LoginResponse>, ServerError> {
    let user = state
        .engine
        .verify_credentials(&payload.username, &payload.password)
        .await?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        user: LoggedUser {
            id: user.id,
            username: user.username,
        },
    }))
}
