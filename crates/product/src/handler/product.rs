use std::fmt;

use crate::{
    abstract_trait::product::service::{DynProductCommandService, DynProductQueryService},
    domain::requests::stock::{StockAdjustmentRequest, StockOperation},
};
use genproto::product::{
    ApiResponseProduct, ApiResponseProducts, ApiResponseUpdateQuantities, FindByIdProductRequest,
    FindByIdsProductRequest, UpdateQuantitiesRequest,
    product_command_service_server::ProductCommandService,
    product_query_service_server::ProductQueryService,
};
use shared::errors::AppErrorGrpc;
use tonic::{Request, Response, Status};
use tracing::info;

#[derive(Clone)]
pub struct ProductQueryGrpcServiceImpl {
    pub query: DynProductQueryService,
}

impl fmt::Debug for ProductQueryGrpcServiceImpl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProductQueryGrpcServiceImpl")
            .field("query", &"DynProductQueryService")
            .finish()
    }
}

impl ProductQueryGrpcServiceImpl {
    pub fn new(query: DynProductQueryService) -> Self {
        Self { query }
    }
}

#[tonic::async_trait]
impl ProductQueryService for ProductQueryGrpcServiceImpl {
    async fn find_by_id(
        &self,
        request: Request<FindByIdProductRequest>,
    ) -> Result<Response<ApiResponseProduct>, Status> {
        let req = request.into_inner();

        let api_response = self
            .query
            .find_by_id(req.id)
            .await
            .map_err(AppErrorGrpc::from)?;

        let reply = ApiResponseProduct {
            status: api_response.status,
            message: api_response.message,
            data: Some(api_response.data.into()),
        };

        Ok(Response::new(reply))
    }

    async fn find_by_ids(
        &self,
        request: Request<FindByIdsProductRequest>,
    ) -> Result<Response<ApiResponseProducts>, Status> {
        let req = request.into_inner();

        info!("Looking up {} products", req.ids.len());

        let api_response = self
            .query
            .find_by_ids(&req.ids, req.include_farm, req.include_address)
            .await
            .map_err(AppErrorGrpc::from)?;

        let reply = ApiResponseProducts {
            status: api_response.status,
            message: api_response.message,
            data: api_response.data.into_iter().map(Into::into).collect(),
        };

        Ok(Response::new(reply))
    }
}

#[derive(Clone)]
pub struct ProductCommandGrpcServiceImpl {
    pub command: DynProductCommandService,
}

impl fmt::Debug for ProductCommandGrpcServiceImpl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProductCommandGrpcServiceImpl")
            .field("command", &"DynProductCommandService")
            .finish()
    }
}

impl ProductCommandGrpcServiceImpl {
    pub fn new(command: DynProductCommandService) -> Self {
        Self { command }
    }
}

#[tonic::async_trait]
impl ProductCommandService for ProductCommandGrpcServiceImpl {
    async fn update_quantities(
        &self,
        request: Request<UpdateQuantitiesRequest>,
    ) -> Result<Response<ApiResponseUpdateQuantities>, Status> {
        let req = request.into_inner();

        info!("Applying stock adjustment batch of {} items", req.items.len());

        let mut items = Vec::with_capacity(req.items.len());
        for item in &req.items {
            let operation = StockOperation::parse(&item.operation).ok_or_else(|| {
                Status::invalid_argument(format!("Unknown stock operation: {}", item.operation))
            })?;

            items.push(StockAdjustmentRequest {
                product_id: item.product_id,
                operation,
                request_quantity: item.request_quantity,
            });
        }

        let api_response = self
            .command
            .update_quantities(&items)
            .await
            .map_err(AppErrorGrpc::from)?;

        let reply = ApiResponseUpdateQuantities {
            status: api_response.status,
            message: api_response.message,
            success: api_response.data.success,
            results: api_response
                .data
                .results
                .into_iter()
                .map(Into::into)
                .collect(),
        };

        Ok(Response::new(reply))
    }
}
