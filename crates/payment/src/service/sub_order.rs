use crate::{
    abstract_trait::{
        order::{
            delivery::DynDeliveryQueryRepository, order_detail::DynOrderDetailQueryRepository,
        },
        sub_order::{DynSubOrderQueryRepository, SubOrderQueryServiceTrait},
    },
    domain::{
        requests::order::{FindSubOrdersByFarmRequest, FindSubOrdersByUserRequest},
        response::sub_order::SubOrderResponse,
    },
    model::order::SubOrderGraph,
};
use async_trait::async_trait;
use chrono::Duration;
use shared::{
    cache::CacheStore,
    domain::responses::{ApiResponse, ApiResponsePagination, Pagination},
    errors::{RepositoryError, ServiceError},
};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct SubOrderQueryService {
    query: DynSubOrderQueryRepository,
    delivery_query: DynDeliveryQueryRepository,
    order_detail_query: DynOrderDetailQueryRepository,
    cache_store: Arc<CacheStore>,
}

impl SubOrderQueryService {
    pub fn new(
        query: DynSubOrderQueryRepository,
        delivery_query: DynDeliveryQueryRepository,
        order_detail_query: DynOrderDetailQueryRepository,
        cache_store: Arc<CacheStore>,
    ) -> Self {
        Self {
            query,
            delivery_query,
            order_detail_query,
            cache_store,
        }
    }
}

#[async_trait]
impl SubOrderQueryServiceTrait for SubOrderQueryService {
    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<SubOrderResponse>, ServiceError> {
        info!("📦 Fetching sub-order {}", id);

        let sub_order = self
            .query
            .find_by_id(id)
            .await
            .map_err(ServiceError::Repo)?
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        let delivery = self
            .delivery_query
            .find_by_sub_order(id)
            .await
            .map_err(ServiceError::Repo)?;

        let order_details = self
            .order_detail_query
            .find_by_sub_order(id)
            .await
            .map_err(ServiceError::Repo)?;

        let graph = SubOrderGraph {
            sub_order,
            delivery,
            order_details,
        };

        Ok(ApiResponse {
            status: "success".into(),
            message: "OK".into(),
            data: SubOrderResponse::from(graph),
        })
    }

    async fn find_by_farm(
        &self,
        req: &FindSubOrdersByFarmRequest,
    ) -> Result<ApiResponsePagination<Vec<SubOrderResponse>>, ServiceError> {
        let page = if req.page > 0 { req.page } else { 1 };
        let page_size = if req.limit > 0 { req.limit } else { 10 };

        info!(
            "📦 Fetching sub-orders for farm {} | page {page}, size {page_size}",
            req.farm_id
        );

        let cache_key = format!(
            "sub_order:find_by_farm:farm:{}:status:{}:page:{page}:size:{page_size}",
            req.farm_id,
            req.status.map(|s| s.to_string()).unwrap_or_default()
        );

        if let Some(cached) = self
            .cache_store
            .get_from_cache::<ApiResponsePagination<Vec<SubOrderResponse>>>(&cache_key)
            .await
        {
            return Ok(cached);
        }

        let (sub_orders, total) = self
            .query
            .find_by_farm(req.farm_id, req.status, page, page_size)
            .await
            .map_err(ServiceError::Repo)?;

        let response = ApiResponsePagination {
            status: "success".into(),
            message: "OK".into(),
            data: sub_orders.into_iter().map(SubOrderResponse::from).collect(),
            pagination: Pagination::new(page, page_size, total),
        };

        self.cache_store
            .set_to_cache(&cache_key, &response, Duration::minutes(1))
            .await;

        Ok(response)
    }

    async fn find_by_user(
        &self,
        req: &FindSubOrdersByUserRequest,
    ) -> Result<ApiResponsePagination<Vec<SubOrderResponse>>, ServiceError> {
        let page = if req.page > 0 { req.page } else { 1 };
        let page_size = if req.limit > 0 { req.limit } else { 10 };

        info!(
            "📦 Fetching sub-orders for user {} | page {page}, size {page_size}",
            req.user_id
        );

        let cache_key = format!(
            "sub_order:find_by_user:user:{}:status:{}:page:{page}:size:{page_size}",
            req.user_id,
            req.status.map(|s| s.to_string()).unwrap_or_default()
        );

        if let Some(cached) = self
            .cache_store
            .get_from_cache::<ApiResponsePagination<Vec<SubOrderResponse>>>(&cache_key)
            .await
        {
            return Ok(cached);
        }

        let (sub_orders, total) = self
            .query
            .find_by_user(req.user_id, req.status, page, page_size)
            .await
            .map_err(ServiceError::Repo)?;

        let response = ApiResponsePagination {
            status: "success".into(),
            message: "OK".into(),
            data: sub_orders.into_iter().map(SubOrderResponse::from).collect(),
            pagination: Pagination::new(page, page_size, total),
        };

        self.cache_store
            .set_to_cache(&cache_key, &response, Duration::minutes(1))
            .await;

        Ok(response)
    }
}
