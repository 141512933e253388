use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Immutable snapshot of the catalog line at order time. Never re-read live
/// product data once the row exists.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrderDetail {
    pub order_detail_id: i32,
    pub sub_order_id: i32,
    pub product_id: i32,
    pub product_name: String,
    pub quantity: i32,
    pub price_per_unit: i64,
    pub unit: String,
    pub total_price: i64,
}
