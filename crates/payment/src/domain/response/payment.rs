use crate::model::payment::Payment as PaymentModel;
use genproto::order::PaymentResponse as PaymentResponseProto;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct PaymentResponse {
    pub id: i32,
    pub order_id: i32,
    pub amount: i64,
    pub method: String,
    pub status: String,
    pub transaction_id: Option<String>,
    #[serde(rename = "paid_at")]
    pub paid_at: Option<String>,
    pub currency: String,
    pub qr_code: Option<String>,
    pub checkout_url: Option<String>,
}

// model to response
impl From<PaymentModel> for PaymentResponse {
    fn from(value: PaymentModel) -> Self {
        PaymentResponse {
            id: value.payment_id,
            order_id: value.order_id,
            amount: value.amount,
            method: value.method.to_string(),
            status: value.status.to_string(),
            transaction_id: value.transaction_id,
            paid_at: value.paid_at.map(|dt| dt.to_string()),
            currency: value.currency,
            qr_code: value.qr_code,
            checkout_url: value.checkout_url,
        }
    }
}

// response to proto
impl From<PaymentResponse> for PaymentResponseProto {
    fn from(value: PaymentResponse) -> Self {
        PaymentResponseProto {
            id: value.id,
            order_id: value.order_id,
            amount: value.amount,
            method: value.method,
            status: value.status,
            transaction_id: value.transaction_id.unwrap_or_default(),
            paid_at: value.paid_at,
            currency: value.currency,
            qr_code: value.qr_code.unwrap_or_default(),
            checkout_url: value.checkout_url.unwrap_or_default(),
        }
    }
}
