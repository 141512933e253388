use crate::model::status::DeliveryStatus;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Delivery {
    pub delivery_id: i32,
    pub sub_order_id: i32,
    pub status: DeliveryStatus,
    pub cod_amount: i64,
    pub shipping_amount: i64,
    pub tracking_code: Option<String>,
    pub addressee_name: String,
    pub addressee_phone: String,
    pub address: String,
    pub delivery_method: String,
    pub created_at: Option<NaiveDateTime>,
}
