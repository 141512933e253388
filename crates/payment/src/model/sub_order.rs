use crate::model::status::OrderStatus;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SubOrder {
    pub sub_order_id: i32,
    pub order_id: i32,
    pub farm_id: i32,
    pub status: OrderStatus,
    pub total_amount: i64,
    pub discount_amount: i64,
    pub shipping_amount: i64,
    pub final_amount: i64,
    pub created_at: Option<NaiveDateTime>,
}
