use std::fmt;

use crate::{
    abstract_trait::order::service::{
        DynOrderCommandService, DynOrderQueryService, DynShippingFeeService,
    },
    domain::{
        requests::order::{
            CartItem as DomainCartItem, CartSubOrder as DomainCartSubOrder,
            CreateOrderRequest as DomainCreateOrderRequest, FindUserOrdersRequest,
            OrderInfoRequest,
        },
        response::shipping::ShippingFeeResponse,
        validated::Validated,
    },
    model::status::OrderStatus,
};
use genproto::order::{
    ApiResponseCreateOrder, ApiResponseOrder, ApiResponsePaginationOrder, ApiResponseShippingFee,
    CalculateShippingFeeRequest, CartSubOrder, CreateOrderRequest, FindByIdOrderRequest,
    FindUserOrdersRequest as FindUserOrdersRequestProto, OrderInfo,
    order_command_service_server::OrderCommandService, order_query_service_server::OrderQueryService,
};
use shared::errors::AppErrorGrpc;
use tonic::{Request, Response, Status};
use tracing::info;

fn cart_from_proto(cart: CartSubOrder) -> DomainCartSubOrder {
    DomainCartSubOrder {
        farm_id: cart.farm_id,
        items: cart
            .items
            .into_iter()
            .map(|item| DomainCartItem {
                product_id: item.product_id,
                quantity: item.quantity,
            })
            .collect(),
    }
}

fn order_info_from_proto(info: Option<OrderInfo>) -> Result<OrderInfoRequest, Status> {
    let info = info.ok_or_else(|| Status::invalid_argument("order_info is required"))?;
    Ok(OrderInfoRequest {
        user_id: info.user_id,
        address_id: info.address_id,
    })
}

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
pub struct OrderCommandGrpcServiceImpl {
    pub order_command_service: DynOrderCommandService,
    pub shipping_fee_service: DynShippingFeeService,
}

impl fmt::Debug for OrderCommandGrpcServiceImpl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderCommandGrpcServiceImpl")
            .field("order_command_service", &"DynOrderCommandService")
            .field("shipping_fee_service", &"DynShippingFeeService")
            .finish()
    }
}

impl OrderCommandGrpcServiceImpl {
    pub fn new(
        order_command_service: DynOrderCommandService,
        shipping_fee_service: DynShippingFeeService,
    ) -> Self {
        Self {
            order_command_service,
            shipping_fee_service,
        }
    }
}

#[tonic::async_trait]
impl OrderCommandService for OrderCommandGrpcServiceImpl {
    async fn create_order(
        &self,
        request: Request<CreateOrderRequest>,
    ) -> Result<Response<ApiResponseCreateOrder>, Status> {
        info!("Creating new order");

        let req = request.into_inner();

        let domain_req = DomainCreateOrderRequest {
            suborders: req.suborders.into_iter().map(cart_from_proto).collect(),
            order_info: order_info_from_proto(req.order_info)?,
            payment_type: req.payment_type,
        };

        let outcome = self
            .order_command_service
            .create_order(&domain_req)
            .await
            .map_err(AppErrorGrpc::from)?;

        let reply = match outcome {
            Validated::Valid(order) => {
                info!("Order created successfully with ID: {}", order.id);
                ApiResponseCreateOrder {
                    status: "success".into(),
                    message: "Order created successfully".into(),
                    data: Some(order.into()),
                    issues: Vec::new(),
                }
            }
            Validated::Invalid(issues) => {
                info!("Order rejected with {} issue(s)", issues.len());
                ApiResponseCreateOrder {
                    status: "invalid".into(),
                    message: "Order request is invalid".into(),
                    data: None,
                    issues: issues.into_iter().map(Into::into).collect(),
                }
            }
        };

        Ok(Response::new(reply))
    }

    async fn calculate_shipping_fee(
        &self,
        request: Request<CalculateShippingFeeRequest>,
    ) -> Result<Response<ApiResponseShippingFee>, Status> {
        info!("Calculating shipping fee");

        let req = request.into_inner();

        let cart = req
            .suborder
            .map(cart_from_proto)
            .ok_or_else(|| Status::invalid_argument("suborder is required"))?;
        let info = order_info_from_proto(req.order_info)?;

        let outcome = self
            .shipping_fee_service
            .calculate_shipping_fee(&cart, &info)
            .await
            .map_err(AppErrorGrpc::from)?;

        let reply = match outcome {
            Validated::Valid(quote) => ApiResponseShippingFee {
                status: "success".into(),
                message: "OK".into(),
                data: Some(ShippingFeeResponse::from(quote).into()),
                issues: Vec::new(),
            },
            Validated::Invalid(issues) => ApiResponseShippingFee {
                status: "invalid".into(),
                message: "Shipping fee request is invalid".into(),
                data: None,
                issues: issues.into_iter().map(Into::into).collect(),
            },
        };

        Ok(Response::new(reply))
    }
}

#[derive(Clone)]
pub struct OrderQueryGrpcServiceImpl {
    pub order_query_service: DynOrderQueryService,
}

impl fmt::Debug for OrderQueryGrpcServiceImpl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderQueryGrpcServiceImpl")
            .field("order_query_service", &"DynOrderQueryService")
            .finish()
    }
}

impl OrderQueryGrpcServiceImpl {
    pub fn new(order_query_service: DynOrderQueryService) -> Self {
        Self {
            order_query_service,
        }
    }
}

#[tonic::async_trait]
impl OrderQueryService for OrderQueryGrpcServiceImpl {
    async fn find_by_id(
        &self,
        request: Request<FindByIdOrderRequest>,
    ) -> Result<Response<ApiResponseOrder>, Status> {
        let req = request.into_inner();

        let api_response = self
            .order_query_service
            .find_by_id(req.order_id, req.user_id)
            .await
            .map_err(AppErrorGrpc::from)?;

        let reply = ApiResponseOrder {
            status: api_response.status,
            message: api_response.message,
            data: Some(api_response.data.into()),
        };

        Ok(Response::new(reply))
    }

    async fn find_by_user(
        &self,
        request: Request<FindUserOrdersRequestProto>,
    ) -> Result<Response<ApiResponsePaginationOrder>, Status> {
        let req = request.into_inner();

        let domain_req = FindUserOrdersRequest {
            user_id: req.user_id,
            status: status_filter_from_proto(req.status)?,
            page: req.page,
            limit: req.limit,
        };

        let api_response = self
            .order_query_service
            .find_by_user(&domain_req)
            .await
            .map_err(AppErrorGrpc::from)?;

        let reply = ApiResponsePaginationOrder {
            status: api_response.status,
            message: api_response.message,
            data: api_response.data.into_iter().map(Into::into).collect(),
            pagination: Some(api_response.pagination.into()),
        };

        Ok(Response::new(reply))
    }
}
