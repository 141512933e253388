use std::fmt;

use crate::abstract_trait::farm::DynFarmQueryService;
use genproto::farm::{
    ApiResponseFarm, FindByIdFarmRequest, farm_query_service_server::FarmQueryService,
};
use shared::errors::AppErrorGrpc;
use tonic::{Request, Response, Status};

#[derive(Clone)]
pub struct FarmQueryGrpcServiceImpl {
    pub query: DynFarmQueryService,
}

impl fmt::Debug for FarmQueryGrpcServiceImpl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FarmQueryGrpcServiceImpl")
            .field("query", &"DynFarmQueryService")
            .finish()
    }
}

impl FarmQueryGrpcServiceImpl {
    pub fn new(query: DynFarmQueryService) -> Self {
        Self { query }
    }
}

#[tonic::async_trait]
impl FarmQueryService for FarmQueryGrpcServiceImpl {
    async fn find_by_id(
        &self,
        request: Request<FindByIdFarmRequest>,
    ) -> Result<Response<ApiResponseFarm>, Status> {
        let req = request.into_inner();

        let api_response = self
            .query
            .find_by_id(req.id)
            .await
            .map_err(AppErrorGrpc::from)?;

        let reply = ApiResponseFarm {
            status: api_response.status,
            message: api_response.message,
            data: Some(api_response.data.into()),
        };

        Ok(Response::new(reply))
    }
}
