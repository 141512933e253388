use crate::{
    abstract_trait::product::{
        repository::DynProductCommandRepository, service::ProductCommandServiceTrait,
    },
    domain::{requests::stock::StockAdjustmentRequest, response::stock::StockUpdateResponse},
};
use async_trait::async_trait;
use shared::{domain::responses::ApiResponse, errors::ServiceError};
use tracing::{info, warn};

#[derive(Clone)]
pub struct ProductCommandService {
    command: DynProductCommandRepository,
}

impl ProductCommandService {
    pub fn new(command: DynProductCommandRepository) -> Self {
        Self { command }
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn update_quantities(
        &self,
        items: &[StockAdjustmentRequest],
    ) -> Result<ApiResponse<StockUpdateResponse>, ServiceError> {
        if items.is_empty() {
            return Err(ServiceError::Validation(vec![
                "Stock adjustment batch cannot be empty".into(),
            ]));
        }

        info!("🏗️ Updating stock quantities for {} products", items.len());

        let (success, results) = self
            .command
            .apply_adjustments(items)
            .await
            .map_err(ServiceError::Repo)?;

        if !success {
            let failed = results.iter().filter(|r| !r.success).count();
            warn!("↩️ Stock batch rejected, {failed} item(s) failed");
        }

        Ok(ApiResponse {
            status: if success { "success" } else { "rejected" }.into(),
            message: if success {
                "Stock quantities updated".into()
            } else {
                "Stock adjustment batch rejected".into()
            },
            data: StockUpdateResponse { success, results },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abstract_trait::product::repository::ProductCommandRepositoryTrait;
    use crate::domain::requests::stock::StockOperation;
    use crate::domain::response::stock::StockAdjustmentResult;
    use shared::errors::RepositoryError;
    use std::sync::Arc;

    struct FixedOutcomeRepo {
        success: bool,
    }

    #[async_trait]
    impl ProductCommandRepositoryTrait for FixedOutcomeRepo {
        async fn apply_adjustments(
            &self,
            items: &[StockAdjustmentRequest],
        ) -> Result<(bool, Vec<StockAdjustmentResult>), RepositoryError> {
            let results = items
                .iter()
                .map(|item| StockAdjustmentResult {
                    product_id: item.product_id,
                    success: self.success,
                    message: if self.success { "OK" } else { "Insufficient stock" }.into(),
                })
                .collect();
            Ok((self.success, results))
        }
    }

    fn decrease(product_id: i32, qty: i32) -> StockAdjustmentRequest {
        StockAdjustmentRequest {
            product_id,
            operation: StockOperation::Decrease,
            request_quantity: qty,
        }
    }

    #[tokio::test]
    async fn empty_batch_is_a_validation_error() {
        let service = ProductCommandService::new(Arc::new(FixedOutcomeRepo { success: true }));
        let err = service.update_quantities(&[]).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn rejected_batch_reports_per_item_diagnostics() {
        let service = ProductCommandService::new(Arc::new(FixedOutcomeRepo { success: false }));
        let response = service
            .update_quantities(&[decrease(1, 5), decrease(2, 3)])
            .await
            .unwrap();

        assert!(!response.data.success);
        assert_eq!(response.data.results.len(), 2);
        assert!(response.data.results.iter().all(|r| !r.success));
    }

    #[tokio::test]
    async fn applied_batch_reports_success() {
        let service = ProductCommandService::new(Arc::new(FixedOutcomeRepo { success: true }));
        let response = service.update_quantities(&[decrease(7, 2)]).await.unwrap();

        assert!(response.data.success);
        assert_eq!(response.data.results[0].product_id, 7);
    }
}
