use chrono::Utc;
use sea_orm::{ActiveValue, QueryOrder, QuerySelect, TransactionTrait, prelude::*};

use crate::{Movement, MovementNew, ResultEngine, items, movements, movements::apply_movement};

use super::{Engine, FETCH_CAP, with_tx};

impl Engine {
    /// Record a stock movement and apply it to the referenced item.
    ///
    /// The movement row and the item mutation share one DB transaction, so
    /// concurrent movements against the same item serialize at the store
    /// instead of racing read-then-write.
    ///
    /// A movement referencing an unknown item id is still recorded; the item
    /// side is a silent no-op, not an error.
    pub async fn record_movement(&self, new: MovementNew) -> ResultEngine<Movement> {
        let movement = Movement::new(new, Utc::now());

        with_tx!(self, |db_tx| {
            movements::ActiveModel::from(&movement).insert(&db_tx).await?;

            if let Some(item) = items::Entity::find_by_id(movement.item_id.as_str())
                .one(&db_tx)
                .await?
            {
                let new_quantity = apply_movement(item.quantity, movement.kind, movement.quantity);
                let item_model = items::ActiveModel {
                    id: ActiveValue::Set(item.id),
                    quantity: ActiveValue::Set(new_quantity),
                    updated_at: ActiveValue::Set(movement.timestamp),
                    ..Default::default()
                };
                item_model.update(&db_tx).await?;
            }

            Ok(movement)
        })
    }

    /// List movements newest first, capped at the fetch limit (1000 rows).
    pub async fn list_movements(&self) -> ResultEngine<Vec<Movement>> {
        let models = movements::Entity::find()
            .order_by_desc(movements::Column::Timestamp)
            .limit(FETCH_CAP)
            .all(&self.database)
            .await?;

        models.into_iter().map(Movement::try_from).collect()
    }
}
