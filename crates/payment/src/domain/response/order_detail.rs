use crate::model::order_detail::OrderDetail as OrderDetailModel;
use genproto::order::OrderDetailResponse as OrderDetailResponseProto;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderDetailResponse {
    pub id: i32,
    pub sub_order_id: i32,
    pub product_id: i32,
    pub product_name: String,
    pub quantity: i32,
    pub price_per_unit: i64,
    pub unit: String,
    pub total_price: i64,
}

// model to response
impl From<OrderDetailModel> for OrderDetailResponse {
    fn from(value: OrderDetailModel) -> Self {
        OrderDetailResponse {
            id: value.order_detail_id,
            sub_order_id: value.sub_order_id,
            product_id: value.product_id,
            product_name: value.product_name,
            quantity: value.quantity,
            price_per_unit: value.price_per_unit,
            unit: value.unit,
            total_price: value.total_price,
        }
    }
}

// response to proto
impl From<OrderDetailResponse> for OrderDetailResponseProto {
    fn from(value: OrderDetailResponse) -> Self {
        OrderDetailResponseProto {
            id: value.id,
            sub_order_id: value.sub_order_id,
            product_id: value.product_id,
            product_name: value.product_name,
            quantity: value.quantity,
            price_per_unit: value.price_per_unit,
            unit: value.unit,
            total_price: value.total_price,
        }
    }
}
