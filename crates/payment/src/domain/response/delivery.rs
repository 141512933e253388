use crate::model::delivery::Delivery as DeliveryModel;
use genproto::order::DeliveryResponse as DeliveryResponseProto;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct DeliveryResponse {
    pub id: i32,
    pub sub_order_id: i32,
    pub status: String,
    pub cod_amount: i64,
    pub shipping_amount: i64,
    pub tracking_code: Option<String>,
    pub addressee_name: String,
    pub addressee_phone: String,
    pub address: String,
    pub delivery_method: String,
}

// model to response
impl From<DeliveryModel> for DeliveryResponse {
    fn from(value: DeliveryModel) -> Self {
        DeliveryResponse {
            id: value.delivery_id,
            sub_order_id: value.sub_order_id,
            status: value.status.to_string(),
            cod_amount: value.cod_amount,
            shipping_amount: value.shipping_amount,
            tracking_code: value.tracking_code,
            addressee_name: value.addressee_name,
            addressee_phone: value.addressee_phone,
            address: value.address,
            delivery_method: value.delivery_method,
        }
    }
}

// response to proto
impl From<DeliveryResponse> for DeliveryResponseProto {
    fn from(value: DeliveryResponse) -> Self {
        DeliveryResponseProto {
            id: value.id,
            sub_order_id: value.sub_order_id,
            status: value.status,
            cod_amount: value.cod_amount,
            shipping_amount: value.shipping_amount,
            tracking_code: value.tracking_code.unwrap_or_default(),
            addressee_name: value.addressee_name,
            addressee_phone: value.addressee_phone,
            address: value.address,
            delivery_method: value.delivery_method,
        }
    }
}
