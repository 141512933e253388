use crate::domain::{
    requests::order::CreateOrderRequest, response::order::OrderResponse, validated::Validated,
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynOrderCommandService = Arc<dyn OrderCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderCommandServiceTrait {
    /// The full checkout sequence. Business-rule failures come back as
    /// `Validated::Invalid`; only operational faults use the `Err` channel.
    async fn create_order(
        &self,
        req: &CreateOrderRequest,
    ) -> Result<Validated<OrderResponse>, ServiceError>;
}
