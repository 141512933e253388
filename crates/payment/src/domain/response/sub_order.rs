use crate::{
    domain::response::{delivery::DeliveryResponse, order_detail::OrderDetailResponse},
    model::{order::SubOrderGraph, sub_order::SubOrder as SubOrderModel},
};
use genproto::order::SubOrderResponse as SubOrderResponseProto;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct SubOrderResponse {
    pub id: i32,
    pub order_id: i32,
    pub farm_id: i32,
    pub status: String,
    pub total_amount: i64,
    pub discount_amount: i64,
    pub shipping_amount: i64,
    pub final_amount: i64,
    #[serde(rename = "created_at")]
    pub created_at: Option<String>,
    pub delivery: Option<DeliveryResponse>,
    pub order_details: Vec<OrderDetailResponse>,
}

// model to response (shallow, for paginated lists)
impl From<SubOrderModel> for SubOrderResponse {
    fn from(value: SubOrderModel) -> Self {
        SubOrderResponse {
            id: value.sub_order_id,
            order_id: value.order_id,
            farm_id: value.farm_id,
            status: value.status.to_string(),
            total_amount: value.total_amount,
            discount_amount: value.discount_amount,
            shipping_amount: value.shipping_amount,
            final_amount: value.final_amount,
            created_at: value.created_at.map(|dt| dt.to_string()),
            delivery: None,
            order_details: Vec::new(),
        }
    }
}

// graph to response (with delivery and lines)
impl From<SubOrderGraph> for SubOrderResponse {
    fn from(value: SubOrderGraph) -> Self {
        let mut response = SubOrderResponse::from(value.sub_order);
        response.delivery = value.delivery.map(DeliveryResponse::from);
        response.order_details = value
            .order_details
            .into_iter()
            .map(OrderDetailResponse::from)
            .collect();
        response
    }
}

// response to proto
impl From<SubOrderResponse> for SubOrderResponseProto {
    fn from(value: SubOrderResponse) -> Self {
        SubOrderResponseProto {
            id: value.id,
            order_id: value.order_id,
            farm_id: value.farm_id,
            status: value.status,
            total_amount: value.total_amount,
            discount_amount: value.discount_amount,
            shipping_amount: value.shipping_amount,
            final_amount: value.final_amount,
            created_at: value.created_at.unwrap_or_default(),
            delivery: value.delivery.map(Into::into),
            order_details: value.order_details.into_iter().map(Into::into).collect(),
        }
    }
}
