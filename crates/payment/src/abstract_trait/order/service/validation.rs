use crate::domain::{
    requests::order::{CartSubOrder, OrderInfoRequest},
    validated::{ShippingFeeDetails, Validated, ValidatedOrderInfo},
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynOrderValidationService = Arc<dyn OrderValidationServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderValidationServiceTrait {
    /// Farm-side validation of one cart portion: farm approval, address and
    /// carrier codes, per-product existence/status/stock, catalog pricing.
    async fn validate_sub_order(
        &self,
        cart: &CartSubOrder,
    ) -> Result<Validated<ShippingFeeDetails>, ServiceError>;

    /// Buyer-side validation: user active, address owned and complete,
    /// destination resolved to carrier codes.
    async fn validate_order_info(
        &self,
        info: &OrderInfoRequest,
    ) -> Result<Validated<ValidatedOrderInfo>, ServiceError>;
}
