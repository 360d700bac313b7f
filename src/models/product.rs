use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// A sellable item. `sold` and `revenue` are aggregated from its sales.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub cost: i32,
    pub quantity: i32,
    pub sold: i64,
    pub revenue: i64,
    pub date_created: DateTime<Utc>,
    pub date_updated: DateTime<Utc>,
}
