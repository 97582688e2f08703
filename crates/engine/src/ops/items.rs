use chrono::Utc;
use sea_orm::{ActiveValue, QuerySelect, TransactionTrait, prelude::*};

use crate::{EngineError, Item, ItemNew, ItemPatch, ResultEngine, items};

use super::{Engine, FETCH_CAP, with_tx};

impl Engine {
    /// Create an item, applying defaults and stamping both timestamps.
    pub async fn create_item(&self, new: ItemNew) -> ResultEngine<Item> {
        let item = Item::new(new, Utc::now())?;

        with_tx!(self, |db_tx| {
            items::ActiveModel::from(&item).insert(&db_tx).await?;
            Ok(item)
        })
    }

    /// List items in store order, capped at the fetch limit (1000 rows).
    pub async fn list_items(&self) -> ResultEngine<Vec<Item>> {
        let models = items::Entity::find()
            .limit(FETCH_CAP)
            .all(&self.database)
            .await?;

        Ok(models.into_iter().map(Item::from).collect())
    }

    /// Return a single item by id.
    pub async fn item(&self, item_id: &str) -> ResultEngine<Item> {
        items::Entity::find_by_id(item_id)
            .one(&self.database)
            .await?
            .map(Item::from)
            .ok_or_else(|| EngineError::NotFound("Item".to_string()))
    }

    /// Partially update an item: only fields present in the patch are
    /// written, `updated_at` is always refreshed.
    ///
    /// `quantity` set through here bypasses the movement floor rule.
    pub async fn update_item(&self, item_id: &str, patch: ItemPatch) -> ResultEngine<Item> {
        if let Some(price) = patch.unit_price_minor {
            if price < 0 {
                return Err(EngineError::InvalidInput(
                    "unit_price_minor must be >= 0".to_string(),
                ));
            }
        }

        with_tx!(self, |db_tx| {
            let existing = items::Entity::find_by_id(item_id)
                .one(&db_tx)
                .await?
                .ok_or_else(|| EngineError::NotFound("Item".to_string()))?;

            let mut active = items::ActiveModel {
                id: ActiveValue::Set(existing.id),
                updated_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            };
            if let Some(name) = patch.name {
                active.name = ActiveValue::Set(name);
            }
            if let Some(code) = patch.code {
                active.code = ActiveValue::Set(code);
            }
            if let Some(quantity) = patch.quantity {
                active.quantity = ActiveValue::Set(quantity);
            }
            if let Some(price) = patch.unit_price_minor {
                active.unit_price_minor = ActiveValue::Set(price);
            }
            if let Some(location) = patch.location {
                active.location = ActiveValue::Set(location);
            }
            if let Some(category) = patch.category {
                active.category = ActiveValue::Set(category);
            }
            if let Some(min_stock) = patch.min_stock {
                active.min_stock = ActiveValue::Set(min_stock);
            }

            let model = active.update(&db_tx).await?;
            Ok(Item::from(model))
        })
    }

    /// Delete an item by id. Deleting an absent id is reported as not found,
    /// not as an empty success.
    pub async fn delete_item(&self, item_id: &str) -> ResultEngine<()> {
        with_tx!(self, |db_tx| {
            let result = items::Entity::delete_by_id(item_id).exec(&db_tx).await?;
            if result.rows_affected == 0 {
                return Err(EngineError::NotFound("Item".to_string()));
            }
            Ok(())
        })
    }
}
