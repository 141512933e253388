pub mod carrier;
pub mod gateway;
pub mod grpc_client;
pub mod order;
pub mod payment;
pub mod sub_order;
