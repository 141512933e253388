use crate::model::farm::Farm as FarmModel;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynFarmQueryRepository = Arc<dyn FarmQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait FarmQueryRepositoryTrait {
    async fn find_by_id(&self, id: i32) -> Result<Option<FarmModel>, RepositoryError>;
    async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<FarmModel>, RepositoryError>;
}
