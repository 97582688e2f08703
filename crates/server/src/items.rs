//! Item API endpoints

use api_types::item::{ItemNew, ItemUpdate, ItemView};
use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::{ServerError, server::ServerState};

fn view(item: engine::Item) -> ItemView {
    ItemView {
        id: item.id,
        name: item.name,
        code: item.code,
        quantity: item.quantity,
        unit_price_minor: item.unit_price_minor,
        location: item.location,
        category: item.category,
        min_stock: item.min_stock,
        created_at: item.created_at,
        updated_at: item.updated_at,
    }
}

/// Handle requests for creating a new item
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ItemNew>,
) -> Result<Json<ItemView>, ServerError> {
    let item = state
        .engine
        .create_item(engine::ItemNew {
            name: payload.name,
            code: payload.code,
            quantity: payload.quantity,
            unit_price_minor: payload.unit_price_minor,
            location: payload.location,
            category: payload.category,
            min_stock: payload.min_stock,
        })
        .await?;

    Ok(Json(view(item)))
}

/// Handle requests for listing all items
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<ItemView>>, ServerError> {
    let items = state.engine.list_items().await?;
    Ok(Json(items.into_iter().map(view).collect()))
}

/// Handle requests for a single item
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<ItemView>, ServerError> {
    let item = state.engine.item(&id).await?;
    Ok(Json(view(item)))
}

/// Handle requests for partially updating an item
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ItemUpdate>,
) -> Result<Json<ItemView>, ServerError> {
    let item = state
        .engine
        .update_item(
            &id,
            engine::ItemPatch {
                name: payload.name,
                code: payload.code,
                quantity: payload.quantity,
                unit_price_minor: payload.unit_price_minor,
                location: payload.location,
                category: payload.category,
                min_stock: payload.min_stock,
            },
        )
        .await?;

    Ok(Json(view(item)))
}

#[derive(Serialize)]
pub struct Deleted {
    message: String,
}

/// Handle requests for deleting an item
pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Deleted>, ServerError> {
    state.engine.delete_item(&id).await?;

    Ok(Json(Deleted {
        message: "Item deleted successfully".to_string(),
    }))
}
