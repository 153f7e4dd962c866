//! Row model for the ships table

use sqlx::FromRow;

/// One row of the `ships` table
#[derive(Debug, Clone, FromRow)]
pub struct ShipModel {
    pub id: i64,
    pub user1_id: String,
    pub user2_id: String,
    pub name: String,
    pub support_count: i64,
}
