use std::fmt;

use crate::{
    abstract_trait::sub_order::DynSubOrderQueryService,
    domain::requests::order::{FindSubOrdersByFarmRequest, FindSubOrdersByUserRequest},
    model::status::OrderStatus,
};
use genproto::sub_order::{
    ApiResponsePaginationSubOrder, ApiResponseSubOrder, FindByIdSubOrderRequest,
    FindSubOrdersByFarmRequest as FindSubOrdersByFarmRequestProto,
    FindSubOrdersByUserRequest as FindSubOrdersByUserRequestProto,
    sub_order_query_service_server::SubOrderQueryService,
};
use shared::errors::AppErrorGrpc;
use tonic::{Request, Response, Status};

fn status_filter_from_proto(status: Option<String>) -> Result<Option<OrderStatus>, Status> {
    match status {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => OrderStatus::parse(&s)
            .map(Some)
            .ok_or_else(|| Status::invalid_argument(format!("Unknown order status: {s}"))),
    }
}

#[derive(Clone)]
pub struct SubOrderQueryGrpcServiceImpl {
    pub sub_order_query_service: DynSubOrderQueryService,
}

impl fmt::Debug for SubOrderQueryGrpcServiceImpl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubOrderQueryGrpcServiceImpl")
            .field("sub_order_query_service", &"DynSubOrderQueryService")
            .finish()
    }
}

impl SubOrderQueryGrpcServiceImpl {
    pub fn new(sub_order_query_service: DynSubOrderQueryService) -> Self {
        Self {
            sub_order_query_service,
        }
    }
}

#[tonic::async_trait]
impl SubOrderQueryService for SubOrderQueryGrpcServiceImpl {
    async fn find_by_id(
        &self,
        request: Request<FindByIdSubOrderRequest>,
    ) -> Result<Response<ApiResponseSubOrder>, Status> {
        let req = request.into_inner();

        let api_response = self
            .sub_order_query_service
            .find_by_id(req.id)
            .await
            .map_err(AppErrorGrpc::from)?;

        let reply = ApiResponseSubOrder {
            status: api_response.status,
            message: api_response.message,
            data: Some(api_response.data.into()),
        };

        Ok(Response::new(reply))
    }

    async fn find_by_farm(
        &self,
        request: Request<FindSubOrdersByFarmRequestProto>,
    ) -> Result<Response<ApiResponsePaginationSubOrder>, Status> {
        let req = request.into_inner();

        let domain_req = FindSubOrdersByFarmRequest {
            farm_id: req.farm_id,
            status: status_filter_from_proto(req.status)?,
            page: req.page,
            limit: req.limit,
        };

        let api_response = self
            .sub_order_query_service
            .find_by_farm(&domain_req)
            .await
            .map_err(AppErrorGrpc::from)?;

        let reply = ApiResponsePaginationSubOrder {
            status: api_response.status,
            message: api_response.message,
            data: api_response.data.into_iter().map(Into::into).collect(),
            pagination: Some(api_response.pagination.into()),
        };

        Ok(Response::new(reply))
    }

    async fn find_by_user(
        &self,
        request: Request<FindSubOrdersByUserRequestProto>,
    ) -> Result<Response<ApiResponsePaginationSubOrder>, Status> {
        let req = request.into_inner();

        let domain_req = FindSubOrdersByUserRequest {
            user_id: req.user_id,
            status: status_filter_from_proto(req.status)?,
            page: req.page,
            limit: req.limit,
        };

        let api_response = self
            .sub_order_query_service
            .find_by_user(&domain_req)
            .await
            .map_err(AppErrorGrpc::from)?;

        let reply = ApiResponsePaginationSubOrder {
            status: api_response.status,
            message: api_response.message,
            data: api_response.data.into_iter().map(Into::into).collect(),
            pagination: Some(api_response.pagination.into()),
        };

        Ok(Response::new(reply))
    }
}
