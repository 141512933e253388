use crate::domain::{
    requests::order::{CartSubOrder, OrderInfoRequest},
    validated::{ShippingFeeQuote, Validated},
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynShippingFeeService = Arc<dyn ShippingFeeServiceTrait + Send + Sync>;

#[async_trait]
pub trait ShippingFeeServiceTrait {
    async fn calculate_shipping_fee(
        &self,
        cart: &CartSubOrder,
        info: &OrderInfoRequest,
    ) -> Result<Validated<ShippingFeeQuote>, ServiceError>;
}
