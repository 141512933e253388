use crate::domain::catalog::{CatalogFarm, CatalogProduct, StockAdjustment, StockUpdateOutcome};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynCatalogGrpcClient = Arc<dyn CatalogGrpcClientTrait + Send + Sync>;

#[async_trait]
pub trait CatalogGrpcClientTrait {
    async fn find_products_by_ids(
        &self,
        ids: &[i32],
        include_farm: bool,
    ) -> Result<Vec<CatalogProduct>, ServiceError>;

    async fn find_farm_by_id(&self, id: i32) -> Result<Option<CatalogFarm>, ServiceError>;

    /// Batched stock adjustment. The catalog applies the batch atomically on
    /// its side; a rejected batch comes back as `success == false` with
    /// per-item diagnostics, not as `Err`.
    async fn update_quantities(
        &self,
        items: &[StockAdjustment],
    ) -> Result<StockUpdateOutcome, ServiceError>;
}
