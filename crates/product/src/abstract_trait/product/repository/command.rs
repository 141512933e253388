use crate::domain::{requests::stock::StockAdjustmentRequest, response::stock::StockAdjustmentResult};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    /// Applies the whole batch inside one transaction. Returns
    /// `(false, per-item diagnostics)` and rolls everything back when any
    /// DECREASE would drive a stock count negative.
    async fn apply_adjustments(
        &self,
        items: &[StockAdjustmentRequest],
    ) -> Result<(bool, Vec<StockAdjustmentResult>), RepositoryError>;
}
