//! Inventory engine: items, stock movements, dashboard totals, users.
//!
//! The engine owns the database connection and exposes one operation per
//! request the server handles. Item quantities are derived state: the
//! movement log is append-only and [`apply_movement`] is the single rule set
//! turning a movement into a quantity change.

pub use error::EngineError;
pub use items::{DEFAULT_CATEGORY, DEFAULT_MIN_STOCK, Item, ItemNew, ItemPatch};
pub use movements::{DEFAULT_ACTOR, Movement, MovementKind, MovementNew, apply_movement};
pub use ops::{DashboardStats, Engine, EngineBuilder};
pub use users::{User, UserNew};

mod error;
mod items;
mod movements;
mod ops;
mod users;

type ResultEngine<T> = Result<T, EngineError>;
