use axum::{
    Json, Router,
    routing::{get, post},
};
use serde::Serialize;

use std::sync::Arc;

use crate::{items, movements, statistics, user};
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

#[derive(Serialize)]
struct Welcome {
    message: String,
}

async fn index() -> Json<Welcome> {
    Json(Welcome {
        message: "Scorta inventory API".to_string(),
    })
}

pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/api/", get(index))
        .route("/api/items", post(items::create).get(items::list))
        .route(
            "/api/items/{id}",
            get(items::get).put(items::update).delete(items::remove),
        )
        .route(
            "/api/movements",
            post(movements::create).get(movements::list),
        )
        .route("/api/dashboard/stats", get(statistics::get_stats))
        .route("/api/users", post(user::register))
        .route("/api/auth/login", post(user::login))
        .with_state(state)
}

pub async fn run(engine: Engine) {
    let listener = match tokio::net::TcpListener::bind("127.0.0.1:3000").await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener: {err}");
            return;
        }
    };
    if let Err(err) = run_with_listener(engine, listener).await {
        tracing::error!("server failed: {err}");
    }
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    let state = ServerState {
        engine: Arc::new(engine),
    };

    axum::serve(listener, router(state)).await
}

pub fn spawn_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(engine, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
