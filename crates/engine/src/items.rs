//! Inventory item primitives.
//!
//! An `Item` is a tracked inventory unit: a quantity on hand, a unit price in
//! minor units, and a minimum-stock threshold used by the dashboard to flag
//! items running low. Item `code`s are free text and deliberately not unique.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{EngineError, ResultEngine};

pub const DEFAULT_CATEGORY: &str = "General";
pub const DEFAULT_MIN_STOCK: i64 = 10;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub code: String,
    pub quantity: i64,
    pub unit_price_minor: i64,
    pub location: String,
    pub category: String,
    pub min_stock: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating an item. Optional fields fall back to the defaults.
#[derive(Clone, Debug)]
pub struct ItemNew {
    pub name: String,
    pub code: String,
    pub quantity: i64,
    pub unit_price_minor: i64,
    pub location: String,
    pub category: Option<String>,
    pub min_stock: Option<i64>,
}

/// Partial update. `None` fields are left untouched.
///
/// `quantity` set through here is written verbatim, including negative
/// values: the floor rule lives on the movement path only.
#[derive(Clone, Debug, Default)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub code: Option<String>,
    pub quantity: Option<i64>,
    pub unit_price_minor: Option<i64>,
    pub location: Option<String>,
    pub category: Option<String>,
    pub min_stock: Option<i64>,
}

impl Item {
    pub fn new(new: ItemNew, created_at: DateTime<Utc>) -> ResultEngine<Self> {
        if new.unit_price_minor < 0 {
            return Err(EngineError::InvalidInput(
                "unit_price_minor must be >= 0".to_string(),
            ));
        }

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name: new.name,
            code: new.code,
            quantity: new.quantity,
            unit_price_minor: new.unit_price_minor,
            location: new.location,
            category: new.category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            min_stock: new.min_stock.unwrap_or(DEFAULT_MIN_STOCK),
            created_at,
            updated_at: created_at,
        })
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub code: String,
    pub quantity: i64,
    pub unit_price_minor: i64,
    pub location: String,
    pub category: String,
    pub min_stock: i64,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Item> for ActiveModel {
    fn from(item: &Item) -> Self {
        Self {
            id: ActiveValue::Set(item.id.clone()),
            name: ActiveValue::Set(item.name.clone()),
            code: ActiveValue::Set(item.code.clone()),
            quantity: ActiveValue::Set(item.quantity),
            unit_price_minor: ActiveValue::Set(item.unit_price_minor),
            location: ActiveValue::Set(item.location.clone()),
            category: ActiveValue::Set(item.category.clone()),
            min_stock: ActiveValue::Set(item.min_stock),
            created_at: ActiveValue::Set(item.created_at),
            updated_at: ActiveValue::Set(item.updated_at),
        }
    }
}

impl From<Model> for Item {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            code: model.code,
            quantity: model.quantity,
            unit_price_minor: model.unit_price_minor,
            location: model.location,
            category: model.category,
            min_stock: model.min_stock,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ItemNew {
        ItemNew {
            name: "Bulloni M8".to_string(),
            code: "BLT-M8".to_string(),
            quantity: 40,
            unit_price_minor: 35,
            location: "A-12".to_string(),
            category: None,
            min_stock: None,
        }
    }

    #[test]
    fn new_item_applies_defaults() {
        let item = Item::new(draft(), Utc::now()).unwrap();

        assert_eq!(item.category, DEFAULT_CATEGORY);
        assert_eq!(item.min_stock, DEFAULT_MIN_STOCK);
        assert_eq!(item.created_at, item.updated_at);
        assert!(!item.id.is_empty());
    }

    #[test]
    fn new_item_keeps_explicit_fields() {
        let mut new = draft();
        new.category = Some("Fasteners".to_string());
        new.min_stock = Some(5);
        let item = Item::new(new, Utc::now()).unwrap();

        assert_eq!(item.category, "Fasteners");
        assert_eq!(item.min_stock, 5);
    }

    #[test]
    fn new_item_rejects_negative_price() {
        let mut new = draft();
        new.unit_price_minor = -1;

        assert!(matches!(
            Item::new(new, Utc::now()),
            Err(EngineError::InvalidInput(_))
        ));
    }
}
