use std::fmt;

use crate::{
    abstract_trait::payment::DynPaymentCallbackService,
    domain::requests::payment::PaymentCallbackRequest as DomainPaymentCallbackRequest,
};
use genproto::payment::{
    ApiResponsePaymentCallback, PaymentCallbackRequest,
    payment_callback_service_server::PaymentCallbackService,
};
use shared::errors::AppErrorGrpc;
use tonic::{Request, Response, Status};
use tracing::info;

#[derive(Clone)]
pub struct PaymentCallbackGrpcServiceImpl {
    pub callback_service: DynPaymentCallbackService,
}

impl fmt::Debug for PaymentCallbackGrpcServiceImpl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentCallbackGrpcServiceImpl")
            .field("callback_service", &"DynPaymentCallbackService")
            .finish()
    }
}

impl PaymentCallbackGrpcServiceImpl {
    pub fn new(callback_service: DynPaymentCallbackService) -> Self {
        Self { callback_service }
    }
}

#[tonic::async_trait]
impl PaymentCallbackService for PaymentCallbackGrpcServiceImpl {
    async fn handle_callback(
        &self,
        request: Request<PaymentCallbackRequest>,
    ) -> Result<Response<ApiResponsePaymentCallback>, Status> {
        info!("Handling payment gateway callback");

        let req = request.into_inner();

        let data = serde_json::from_str(&req.data_json)
            .map_err(|e| Status::invalid_argument(format!("data_json is not valid JSON: {e}")))?;

        let domain_req = DomainPaymentCallbackRequest {
            code: req.code,
            desc: req.desc,
            success: req.success,
            data,
            signature: req.signature,
        };

        let api_response = self
            .callback_service
            .handle_callback(&domain_req)
            .await
            .map_err(AppErrorGrpc::from)?;

        let reply = ApiResponsePaymentCallback {
            status: api_response.status,
            message: api_response.message,
        };

        Ok(Response::new(reply))
    }
}
