//! Stock movement primitives.
//!
//! A `Movement` is an append-only record of a quantity change applied to an
//! item. Movements are never updated or deleted; the item's `quantity` is the
//! derived value, the movement log is the history.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{EngineError, ResultEngine};

pub const DEFAULT_ACTOR: &str = "System";

/// The closed set of movement kinds. Unknown kinds are an error, never a
/// silent fallback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementKind {
    Increase,
    Decrease,
    Correction,
}

impl MovementKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Increase => "increase",
            Self::Decrease => "decrease",
            Self::Correction => "correction",
        }
    }
}

impl TryFrom<&str> for MovementKind {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "increase" => Ok(Self::Increase),
            "decrease" => Ok(Self::Decrease),
            "correction" => Ok(Self::Correction),
            other => Err(EngineError::InvalidInput(format!(
                "invalid movement kind: {other}"
            ))),
        }
    }
}

/// Computes an item's new quantity from a movement.
///
/// - `Increase` adds `amount` with no upper bound. The amount is expected
///   non-negative but is not validated.
/// - `Decrease` subtracts `amount` and floors at zero: a stock-out truncates,
///   it never fails. This is the only place the non-negativity of item
///   quantities is enforced.
/// - `Correction` sets `amount` verbatim, negative values included.
pub fn apply_movement(current_quantity: i64, kind: MovementKind, amount: i64) -> i64 {
    match kind {
        MovementKind::Increase => current_quantity + amount,
        MovementKind::Decrease => (current_quantity - amount).max(0),
        MovementKind::Correction => amount,
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movement {
    pub id: String,
    pub item_id: String,
    /// Item name as submitted, denormalized at recording time.
    pub item_name: String,
    pub kind: MovementKind,
    /// Delta for increase/decrease, absolute new value for a correction.
    pub quantity: i64,
    pub reason: String,
    pub actor: String,
    pub timestamp: DateTime<Utc>,
}

/// Input for recording a movement. `actor` falls back to "System".
#[derive(Clone, Debug)]
pub struct MovementNew {
    pub item_id: String,
    pub item_name: String,
    pub kind: MovementKind,
    pub quantity: i64,
    pub reason: String,
    pub actor: Option<String>,
}

impl Movement {
    pub fn new(new: MovementNew, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            item_id: new.item_id,
            item_name: new.item_name,
            kind: new.kind,
            quantity: new.quantity,
            reason: new.reason,
            actor: new.actor.unwrap_or_else(|| DEFAULT_ACTOR.to_string()),
            timestamp,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "stock_movements")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub item_id: String,
    pub item_name: String,
    pub kind: String,
    pub quantity: i64,
    pub reason: String,
    pub actor: String,
    pub timestamp: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Movement> for ActiveModel {
    fn from(movement: &Movement) -> Self {
        Self {
            id: ActiveValue::Set(movement.id.clone()),
            item_id: ActiveValue::Set(movement.item_id.clone()),
            item_name: ActiveValue::Set(movement.item_name.clone()),
            kind: ActiveValue::Set(movement.kind.as_str().to_string()),
            quantity: ActiveValue::Set(movement.quantity),
            reason: ActiveValue::Set(movement.reason.clone()),
            actor: ActiveValue::Set(movement.actor.clone()),
            timestamp: ActiveValue::Set(movement.timestamp),
        }
    }
}

impl TryFrom<Model> for Movement {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            item_id: model.item_id,
            item_name: model.item_name,
            kind: MovementKind::try_from(model.kind.as_str())?,
            quantity: model.quantity,
            reason: model.reason,
            actor: model.actor,
            timestamp: model.timestamp,
        })
    }
}
