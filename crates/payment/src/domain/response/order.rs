use crate::{
    domain::response::{payment::PaymentResponse, sub_order::SubOrderResponse},
    model::order::{Order as OrderModel, OrderGraph},
};
use genproto::order::OrderResponse as OrderResponseProto;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderResponse {
    pub id: i32,
    pub customer_id: i32,
    pub address_id: i32,
    pub total_amount: i64,
    pub discount_amount: i64,
    pub shipping_amount: i64,
    pub final_amount: i64,
    pub currency: String,
    pub status: String,
    #[serde(rename = "created_at")]
    pub created_at: Option<String>,
    #[serde(rename = "updated_at")]
    pub updated_at: Option<String>,
    pub payment: Option<PaymentResponse>,
    pub sub_orders: Vec<SubOrderResponse>,
}

// model to response (shallow, for paginated lists)
impl From<OrderModel> for OrderResponse {
    fn from(value: OrderModel) -> Self {
        OrderResponse {
            id: value.order_id,
            customer_id: value.customer_id,
            address_id: value.address_id,
            total_amount: value.total_amount,
            discount_amount: value.discount_amount,
            shipping_amount: value.shipping_amount,
            final_amount: value.final_amount,
            currency: value.currency,
            status: value.status.to_string(),
            created_at: value.created_at.map(|dt| dt.to_string()),
            updated_at: value.updated_at.map(|dt| dt.to_string()),
            payment: None,
            sub_orders: Vec::new(),
        }
    }
}

// graph to response (payment + sub-order trees)
impl From<OrderGraph> for OrderResponse {
    fn from(value: OrderGraph) -> Self {
        let mut response = OrderResponse::from(value.order);
        response.payment = value.payment.map(PaymentResponse::from);
        response.sub_orders = value
            .sub_orders
            .into_iter()
            .map(SubOrderResponse::from)
            .collect();
        response
    }
}

// response to proto
impl From<OrderResponse> for OrderResponseProto {
    fn from(value: OrderResponse) -> Self {
        OrderResponseProto {
            id: value.id,
            customer_id: value.customer_id,
            address_id: value.address_id,
            total_amount: value.total_amount,
            discount_amount: value.discount_amount,
            shipping_amount: value.shipping_amount,
            final_amount: value.final_amount,
            currency: value.currency,
            status: value.status,
            created_at: value.created_at.unwrap_or_default(),
            updated_at: value.updated_at.unwrap_or_default(),
            payment: value.payment.map(Into::into),
            sub_orders: value.sub_orders.into_iter().map(Into::into).collect(),
        }
    }
}
