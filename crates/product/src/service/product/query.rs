use crate::{
    abstract_trait::{
        farm::DynFarmQueryRepository,
        product::{repository::DynProductQueryRepository, service::ProductQueryServiceTrait},
    },
    domain::response::{farm::FarmResponse, product::ProductResponse},
};
use async_trait::async_trait;
use shared::{
    domain::responses::ApiResponse,
    errors::{RepositoryError, ServiceError},
};
use std::collections::HashMap;
use tracing::info;

#[derive(Clone)]
pub struct ProductQueryService {
    query: DynProductQueryRepository,
    farm_query: DynFarmQueryRepository,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository, farm_query: DynFarmQueryRepository) -> Self {
        Self { query, farm_query }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        info!("📦 Fetching product id={id}");

        let product = self
            .query
            .find_by_id(id)
            .await
            .map_err(ServiceError::Repo)?
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        Ok(ApiResponse {
            status: "success".into(),
            message: "OK".into(),
            data: ProductResponse::from(product),
        })
    }

    async fn find_by_ids(
        &self,
        ids: &[i32],
        include_farm: bool,
        _include_address: bool,
    ) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError> {
        info!("📦 Fetching {} products (include_farm={include_farm})", ids.len());

        let products = self
            .query
            .find_by_ids(ids)
            .await
            .map_err(ServiceError::Repo)?;

        let farms_by_id: HashMap<i32, FarmResponse> = if include_farm {
            let farm_ids: Vec<i32> = {
                let mut ids: Vec<i32> = products.iter().map(|p| p.farm_id).collect();
                ids.sort_unstable();
                ids.dedup();
                ids
            };

            self.farm_query
                .find_by_ids(&farm_ids)
                .await
                .map_err(ServiceError::Repo)?
                .into_iter()
                .map(|farm| (farm.farm_id, FarmResponse::from(farm)))
                .collect()
        } else {
            HashMap::new()
        };

        let responses = products
            .into_iter()
            .map(|product| {
                let farm = farms_by_id.get(&product.farm_id).cloned();
                let mut response = ProductResponse::from(product);
                response.farm = farm;
                response
            })
            .collect();

        Ok(ApiResponse {
            status: "success".into(),
            message: "OK".into(),
            data: responses,
        })
    }
}
