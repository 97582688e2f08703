use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod item {
    use super::*;

    /// Request body for creating an item.
    ///
    /// `category` defaults to "General" and `min_stock` to 10 when absent.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ItemNew {
        pub name: String,
        pub code: String,
        pub quantity: i64,
        /// Unit price in integer minor units (e.g. cents).
        pub unit_price_minor: i64,
        pub location: String,
        pub category: Option<String>,
        pub min_stock: Option<i64>,
    }

    /// Request body for partially updating an item.
    ///
    /// Absent fields are left untouched.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct ItemUpdate {
        pub name: Option<String>,
        pub code: Option<String>,
        pub quantity: Option<i64>,
        pub unit_price_minor: Option<i64>,
        pub location: Option<String>,
        pub category: Option<String>,
        pub min_stock: Option<i64>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ItemView {
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
}

pub mod movement {
    use super::*;

    /// The three movement kinds. Anything else is rejected at the boundary.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum MovementKind {
        Increase,
        Decrease,
        Correction,
    }

    /// Request body for recording a stock movement.
    ///
    /// `quantity` is a delta for increase/decrease and the absolute new value
    /// for a correction. `actor` defaults to "System" when absent.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct MovementNew {
        pub item_id: String,
        pub item_name: String,
        pub kind: MovementKind,
        pub quantity: i64,
        pub reason: String,
        pub actor: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct MovementView {
        pub id: String,
        pub item_id: String,
        pub item_name: String,
        pub kind: MovementKind,
        pub quantity: i64,
        pub reason: String,
        pub actor: String,
        pub timestamp: DateTime<Utc>,
    }
}

pub mod stats {
    use super::*;

    /// Dashboard summary, recomputed over the current item set on every call.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct DashboardStats {
        pub total_items: u64,
        pub total_quantity: i64,
        /// Sum of quantity × unit price, in minor units.
        pub total_value_minor: i64,
        /// Items at or below their own minimum-stock threshold.
        pub low_stock_items: u64,
        /// Distinct category strings (case-sensitive).
        pub categories: u64,
    }
}

pub mod user {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct UserNew {
        pub username: String,
        pub email: String,
        pub password: String,
    }

    /// A stored user. Carries the password digest, never the plaintext.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct UserView {
        pub id: String,
        pub username: String,
        pub email: String,
        pub password_digest: String,
        pub created_at: DateTime<Utc>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct Login {
        pub username: String,
        pub password: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct LoggedUser {
        pub id: String,
        pub username: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct LoginResponse {
        pub message: String,
        pub user: LoggedUser,
    }
}
