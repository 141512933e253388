use crate::{
    abstract_trait::{gateway::DynPaymentGateway, payment::PaymentMethodStrategyTrait},
    domain::requests::order::CreatePaymentRecordRequest,
    gateway::CreatePaymentLinkRequest,
    model::status::PaymentMethod,
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use tracing::info;

/// Cash on delivery: a plain PENDING payment row, settled by the carrier.
pub struct CodPaymentStrategy;

impl CodPaymentStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CodPaymentStrategy {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PaymentMethodStrategyTrait for CodPaymentStrategy {
    async fn build_payment(
        &self,
        order_id: i32,
        amount: i64,
    ) -> Result<CreatePaymentRecordRequest, ServiceError> {
        info!("💵 COD payment plan for order {} ({amount})", order_id);

        Ok(CreatePaymentRecordRequest {
            order_id,
            amount,
            method: PaymentMethod::Cod,
            transaction_id: None,
            currency: "VND".into(),
            qr_code: None,
            checkout_url: None,
            signature: None,
        })
    }
}

/// External gateway: creates the payment link up front and stores the
/// checkout artifacts on the payment row. The numeric gateway order code is
/// the serial order id.
pub struct PayosPaymentStrategy {
    gateway: DynPaymentGateway,
}

impl PayosPaymentStrategy {
    pub fn new(gateway: DynPaymentGateway) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl PaymentMethodStrategyTrait for PayosPaymentStrategy {
    async fn build_payment(
        &self,
        order_id: i32,
        amount: i64,
    ) -> Result<CreatePaymentRecordRequest, ServiceError> {
        let link = self
            .gateway
            .create_payment_link(&CreatePaymentLinkRequest {
                order_code: i64::from(order_id),
                amount,
                description: format!("Thanh toan don hang {order_id}"),
            })
            .await
            .map_err(ServiceError::from)?;

        info!(
            "💳 Gateway payment plan for order {} (link {})",
            order_id, link.transaction_id
        );

        Ok(CreatePaymentRecordRequest {
            order_id,
            amount,
            method: PaymentMethod::Payos,
            transaction_id: Some(link.transaction_id),
            currency: "VND".into(),
            qr_code: Some(link.qr_code),
            checkout_url: Some(link.checkout_url),
            signature: Some(link.signature),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::testing::MockPaymentGateway;
    use std::sync::Arc;

    #[tokio::test]
    async fn cod_plan_has_no_transaction_id() {
        let plan = CodPaymentStrategy::new()
            .build_payment(42, 155_000)
            .await
            .unwrap();

        assert_eq!(plan.method, PaymentMethod::Cod);
        assert_eq!(plan.amount, 155_000);
        assert!(plan.transaction_id.is_none());
        assert!(plan.checkout_url.is_none());
    }

    #[tokio::test]
    async fn payos_plan_carries_the_checkout_artifacts() {
        let strategy = PayosPaymentStrategy::new(Arc::new(MockPaymentGateway { fail: false }));

        let plan = strategy.build_payment(42, 155_000).await.unwrap();

        assert_eq!(plan.method, PaymentMethod::Payos);
        assert_eq!(plan.transaction_id.as_deref(), Some("link-42"));
        assert!(plan.checkout_url.is_some());
        assert!(plan.qr_code.is_some());
        assert!(plan.signature.is_some());
    }

    #[tokio::test]
    async fn payos_plan_propagates_gateway_failure() {
        let strategy = PayosPaymentStrategy::new(Arc::new(MockPaymentGateway { fail: true }));

        let err = strategy.build_payment(42, 155_000).await.unwrap_err();
        assert!(matches!(err, ServiceError::UpstreamUnavailable(_)));
    }
}
