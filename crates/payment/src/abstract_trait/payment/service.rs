use crate::domain::requests::{
    order::CreatePaymentRecordRequest, payment::PaymentCallbackRequest,
};
use async_trait::async_trait;
use shared::{domain::responses::ApiResponse, errors::ServiceError};
use std::sync::Arc;

pub type DynPaymentMethodStrategy = Arc<dyn PaymentMethodStrategyTrait + Send + Sync>;
pub type DynPaymentCallbackService = Arc<dyn PaymentCallbackServiceTrait + Send + Sync>;

/// Builds the Payment row for one checkout. COD and the external gateway
/// each implement this with their method-specific fields.
#[async_trait]
pub trait PaymentMethodStrategyTrait {
    async fn build_payment(
        &self,
        order_id: i32,
        amount: i64,
    ) -> Result<CreatePaymentRecordRequest, ServiceError>;
}

#[async_trait]
pub trait PaymentCallbackServiceTrait {
    async fn handle_callback(
        &self,
        req: &PaymentCallbackRequest,
    ) -> Result<ApiResponse<()>, ServiceError>;
}
