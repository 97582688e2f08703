use std::collections::HashSet;

use sea_orm::{QuerySelect, prelude::*};

use crate::{ResultEngine, items};

use super::{Engine, FETCH_CAP};

/// Totals over the current item set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_items: u64,
    pub total_quantity: i64,
    pub total_value_minor: i64,
    pub low_stock_items: u64,
    pub categories: u64,
}

impl Engine {
    /// Recompute dashboard totals from scratch over the item set (same
    /// fetch cap as the item listing). No caching.
    pub async fn dashboard_stats(&self) -> ResultEngine<DashboardStats> {
        let items = items::Entity::find()
            .limit(FETCH_CAP)
            .all(&self.database)
            .await?;

        let mut categories: HashSet<&str> = HashSet::new();
        let mut total_quantity = 0i64;
        let mut total_value_minor = 0i64;
        let mut low_stock_items = 0u64;

        for item in &items {
            total_quantity += item.quantity;
            total_value_minor += item.quantity * item.unit_price_minor;
            if item.quantity <= item.min_stock {
                low_stock_items += 1;
            }
            // Case-sensitive on purpose: "General" and "general" are two
            // categories.
            categories.insert(item.category.as_str());
        }

        Ok(DashboardStats {
            total_items: items.len() as u64,
            total_quantity,
            total_value_minor,
            low_stock_items,
            categories: categories.len() as u64,
        })
    }
}
