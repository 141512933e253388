use crate::{
    abstract_trait::order::{
        repository::DynOrderQueryRepository, service::OrderQueryServiceTrait,
    },
    domain::{requests::order::FindUserOrdersRequest, response::order::OrderResponse},
};
use async_trait::async_trait;
use chrono::Duration;
use prometheus_client::registry::Registry;
use shared::{
    cache::CacheStore,
    domain::responses::{ApiResponse, ApiResponsePagination, Pagination},
    errors::{RepositoryError, ServiceError},
    utils::{Method, Metrics, Status as StatusUtils},
};
use std::sync::Arc;
use tokio::time::Instant;
use tracing::{error, info};

#[derive(Clone)]
pub struct OrderQueryService {
    query: DynOrderQueryRepository,
    cache_store: Arc<CacheStore>,
    metrics: Metrics,
}

impl OrderQueryService {
    pub fn new(
        query: DynOrderQueryRepository,
        cache_store: Arc<CacheStore>,
        registry: &mut Registry,
    ) -> Self {
        let metrics = Metrics::new();
        metrics.register(registry, "order_query_service");

        Self {
            query,
            cache_store,
            metrics,
        }
    }
}

#[async_trait]
impl OrderQueryServiceTrait for OrderQueryService {
    async fn find_by_id(
        &self,
        order_id: i32,
        user_id: i32,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        info!("📦 Fetching order {} for user {}", order_id, user_id);

        let started = Instant::now();

        let graph = self
            .query
            .find_with_relations(order_id)
            .await
            .map_err(ServiceError::Repo)?
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        // An order is only visible to its buyer.
        if graph.order.customer_id != user_id {
            self.metrics.record(
                Method::Get,
                StatusUtils::Error,
                started.elapsed().as_secs_f64(),
            );
            return Err(ServiceError::Forbidden(format!(
                "Order {order_id} does not belong to user {user_id}"
            )));
        }

        self.metrics.record(
            Method::Get,
            StatusUtils::Success,
            started.elapsed().as_secs_f64(),
        );

        Ok(ApiResponse {
            status: "success".into(),
            message: "OK".into(),
            data: OrderResponse::from(graph),
        })
    }

    async fn find_by_user(
        &self,
        req: &FindUserOrdersRequest,
    ) -> Result<ApiResponsePagination<Vec<OrderResponse>>, ServiceError> {
        let page = if req.page > 0 { req.page } else { 1 };
        let page_size = if req.limit > 0 { req.limit } else { 10 };

        info!(
            "📦 Fetching orders for user {} | page {page}, size {page_size}, status {:?}",
            req.user_id, req.status
        );

        let started = Instant::now();

        let cache_key = format!(
            "order:find_by_user:user:{}:status:{}:page:{page}:size:{page_size}",
            req.user_id,
            req.status.map(|s| s.to_string()).unwrap_or_default()
        );

        if let Some(cached) = self
            .cache_store
            .get_from_cache::<ApiResponsePagination<Vec<OrderResponse>>>(&cache_key)
            .await
        {
            info!("✅ Found cached orders (total: {})", cached.data.len());
            self.metrics.record(
                Method::Get,
                StatusUtils::Success,
                started.elapsed().as_secs_f64(),
            );
            return Ok(cached);
        }

        let (orders, total) = self
            .query
            .find_by_user(req.user_id, req.status, page, page_size)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch orders for user {}: {e:?}", req.user_id);
                ServiceError::Repo(e)
            })?;

        let response = ApiResponsePagination {
            status: "success".into(),
            message: "OK".into(),
            data: orders.into_iter().map(OrderResponse::from).collect(),
            pagination: Pagination::new(page, page_size, total),
        };

        self.cache_store
            .set_to_cache(&cache_key, &response, Duration::minutes(1))
            .await;

        self.metrics.record(
            Method::Get,
            StatusUtils::Success,
            started.elapsed().as_secs_f64(),
        );

        Ok(response)
    }
}
