use crate::gateway::{CreatePaymentLinkRequest, GatewayError, PaymentLinkResult};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynPaymentGateway = Arc<dyn PaymentGatewayTrait + Send + Sync>;

#[async_trait]
pub trait PaymentGatewayTrait {
    async fn create_payment_link(
        &self,
        req: &CreatePaymentLinkRequest,
    ) -> Result<PaymentLinkResult, GatewayError>;
}
