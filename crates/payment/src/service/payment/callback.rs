use crate::{
    abstract_trait::{
        order::repository::DynOrderCommandRepository,
        payment::{
            DynPaymentCommandRepository, DynPaymentQueryRepository, PaymentCallbackServiceTrait,
        },
    },
    domain::requests::payment::PaymentCallbackRequest,
    gateway::verify_signature,
    model::status::PaymentStatus,
};
use async_trait::async_trait;
use serde_json::Value;
use shared::{
    domain::responses::ApiResponse,
    errors::{RepositoryError, ServiceError},
};
use tracing::{info, warn};

#[derive(Clone)]
pub struct PaymentCallbackService {
    payment_query: DynPaymentQueryRepository,
    payment_command: DynPaymentCommandRepository,
    order_command: DynOrderCommandRepository,
    checksum_key: String,
}

impl PaymentCallbackService {
    pub fn new(
        payment_query: DynPaymentQueryRepository,
        payment_command: DynPaymentCommandRepository,
        order_command: DynOrderCommandRepository,
        checksum_key: String,
    ) -> Self {
        Self {
            payment_query,
            payment_command,
            order_command,
            checksum_key,
        }
    }
}

#[async_trait]
impl PaymentCallbackServiceTrait for PaymentCallbackService {
    async fn handle_callback(
        &self,
        req: &PaymentCallbackRequest,
    ) -> Result<ApiResponse<()>, ServiceError> {
        // Nothing in the payload is acted on before the signature verifies.
        if !verify_signature(&req.data, &self.checksum_key, &req.signature) {
            warn!("🚫 Rejecting payment callback with an invalid signature");
            return Err(ServiceError::Forbidden(
                "Invalid webhook signature".into(),
            ));
        }

        let order_code = req
            .data
            .get("orderCode")
            .and_then(Value::as_i64)
            .ok_or_else(|| {
                ServiceError::Validation(vec!["Callback payload has no orderCode".into()])
            })?;

        let order_id = i32::try_from(order_code).map_err(|_| {
            ServiceError::Validation(vec![format!("orderCode {order_code} out of range")])
        })?;

        info!("💳 Processing payment callback for order {}", order_id);

        let payment = self
            .payment_query
            .find_by_order_id(order_id)
            .await
            .map_err(ServiceError::Repo)?
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        let status = req
            .data
            .get("status")
            .and_then(Value::as_str)
            .map(PaymentStatus::from_gateway)
            .unwrap_or(if req.success {
                PaymentStatus::Completed
            } else {
                PaymentStatus::Failed
            });

        let transaction_id = req
            .data
            .get("paymentLinkId")
            .and_then(Value::as_str)
            .map(str::to_string);

        let updated = self
            .payment_command
            .update_from_callback(payment.payment_id, status, transaction_id)
            .await
            .map_err(ServiceError::Repo)?;

        if updated.status == PaymentStatus::Completed {
            self.order_command
                .mark_paid(updated.order_id)
                .await
                .map_err(ServiceError::Repo)?;
        }

        info!(
            "✅ Payment {} for order {} now {}",
            updated.payment_id, updated.order_id, updated.status
        );

        Ok(ApiResponse {
            status: "success".into(),
            message: "Callback processed".into(),
            data: (),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::sign_payload;
    use crate::service::testing::{NoopOrderCommandRepo, NoopPaymentCommandRepo};
    use crate::abstract_trait::payment::PaymentQueryRepositoryTrait;
    use crate::model::payment::Payment as PaymentModel;
    use serde_json::json;
    use std::sync::Arc;

    struct EmptyPaymentQueryRepo;

    #[async_trait]
    impl PaymentQueryRepositoryTrait for EmptyPaymentQueryRepo {
        async fn find_by_order_id(
            &self,
            _order_id: i32,
        ) -> Result<Option<PaymentModel>, RepositoryError> {
            Ok(None)
        }
    }

    fn service(key: &str) -> PaymentCallbackService {
        PaymentCallbackService::new(
            Arc::new(EmptyPaymentQueryRepo),
            Arc::new(NoopPaymentCommandRepo),
            Arc::new(NoopOrderCommandRepo),
            key.into(),
        )
    }

    #[tokio::test]
    async fn tampered_payload_is_rejected_before_any_lookup() {
        let key = "secret";
        let data = json!({ "orderCode": 5, "status": "PAID", "amount": 100_000 });
        let signature = sign_payload(&data, key);

        let tampered = PaymentCallbackRequest {
            code: "00".into(),
            desc: "success".into(),
            success: true,
            data: json!({ "orderCode": 5, "status": "PAID", "amount": 999_999 }),
            signature,
        };

        let err = service(key).handle_callback(&tampered).await.unwrap_err();
        assert!(matches!(err, ServiceError::Forbidden(_)));
    }

    #[tokio::test]
    async fn valid_signature_reaches_the_payment_lookup() {
        let key = "secret";
        let data = json!({ "orderCode": 5, "status": "PAID" });
        let signature = sign_payload(&data, key);

        let req = PaymentCallbackRequest {
            code: "00".into(),
            desc: "success".into(),
            success: true,
            data,
            signature,
        };

        // The signature verifies; the stubbed repository then reports the
        // payment as unknown.
        let err = service(key).handle_callback(&req).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Repo(RepositoryError::NotFound)
        ));
    }

    #[tokio::test]
    async fn payload_without_order_code_is_a_validation_error() {
        let key = "secret";
        let data = json!({ "status": "PAID" });
        let signature = sign_payload(&data, key);

        let req = PaymentCallbackRequest {
            code: "00".into(),
            desc: "success".into(),
            success: true,
            data,
            signature,
        };

        let err = service(key).handle_callback(&req).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }
}
