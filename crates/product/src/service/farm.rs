use crate::{
    abstract_trait::farm::{DynFarmQueryRepository, FarmQueryServiceTrait},
    domain::response::farm::FarmResponse,
};
use async_trait::async_trait;
use shared::{
    domain::responses::ApiResponse,
    errors::{RepositoryError, ServiceError},
};
use tracing::info;

#[derive(Clone)]
pub struct FarmQueryService {
    query: DynFarmQueryRepository,
}

impl FarmQueryService {
    pub fn new(query: DynFarmQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl FarmQueryServiceTrait for FarmQueryService {
    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<FarmResponse>, ServiceError> {
        info!("🏡 Fetching farm id={id}");

        let farm = self
            .query
            .find_by_id(id)
            .await
            .map_err(ServiceError::Repo)?
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        Ok(ApiResponse {
            status: "success".into(),
            message: "OK".into(),
            data: FarmResponse::from(farm),
        })
    }
}
