use crate::model::status::{PaymentMethod, PaymentStatus};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Payment {
    pub payment_id: i32,
    pub order_id: i32,
    pub amount: i64,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    pub transaction_id: Option<String>,
    pub paid_at: Option<NaiveDateTime>,
    pub currency: String,
    pub qr_code: Option<String>,
    pub checkout_url: Option<String>,
    pub signature: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}
