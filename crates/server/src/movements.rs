//! Stock movement API endpoints

use api_types::movement::{MovementKind as ApiKind, MovementNew, MovementView};
use axum::{Json, extract::State};

use crate::{ServerError, server::ServerState};

fn map_kind(kind: engine::MovementKind) -> ApiKind {
    match kind {
        engine::MovementKind::Increase => ApiKind::Increase,
        engine::MovementKind::Decrease => ApiKind::Decrease,
        engine::MovementKind::Correction => ApiKind::Correction,
    }
}

fn view(movement: engine::Movement) -> MovementView {
    MovementView {
        id: movement.id,
        item_id: movement.item_id,
        item_name: movement.item_name,
        kind: map_kind(movement.kind),
        quantity: movement.quantity,
        reason: movement.reason,
        actor: movement.actor,
        timestamp: movement.timestamp,
    }
}

/// Handle requests for recording a movement.
///
/// The referenced item's quantity is updated as a side effect; a movement
/// against an unknown item id is recorded without touching any item.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MovementNew>,
) -> Result<Json<MovementView>, ServerError> {
    let kind = match payload.kind {
        ApiKind::Increase => engine::MovementKind::Increase,
        ApiKind::Decrease => engine::MovementKind::Decrease,
        ApiKind::Correction => engine::MovementKind::Correction,
    };

    let movement = state
        .engine
        .record_movement(engine::MovementNew {
            item_id: payload.item_id,
            item_name: payload.item_name,
            kind,
            quantity: payload.quantity,
            reason: payload.reason,
            actor: payload.actor,
        })
        .await?;

    Ok(Json(view(movement)))
}

/// Handle requests for listing movements, newest first
pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<MovementView>>, ServerError> {
    let movements = state.engine.list_movements().await?;
    Ok(Json(movements.into_iter().map(view).collect()))
}
