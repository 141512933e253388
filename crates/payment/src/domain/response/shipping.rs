use crate::domain::validated::ShippingFeeQuote;
use genproto::order::ShippingFeeResponse as ShippingFeeResponseProto;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ShippingFeeResponse {
    pub farm_id: i32,
    pub shipping_fee: i64,
    pub carrier_fee: i64,
    pub final_fee: i64,
}

impl From<ShippingFeeQuote> for ShippingFeeResponse {
    fn from(value: ShippingFeeQuote) -> Self {
        ShippingFeeResponse {
            farm_id: value.farm_id,
            shipping_fee: value.declared_shipping_fee,
            carrier_fee: value.carrier_fee,
            final_fee: value.final_fee,
        }
    }
}

impl From<ShippingFeeResponse> for ShippingFeeResponseProto {
    fn from(value: ShippingFeeResponse) -> Self {
        ShippingFeeResponseProto {
            farm_id: value.farm_id,
            shipping_fee: value.shipping_fee,
            carrier_fee: value.carrier_fee,
            final_fee: value.final_fee,
        }
    }
}
