pub mod catalog;
pub mod user;

use crate::config::grpc_config::GrpcClientConfig;
use anyhow::{Context, Result};
use genproto::{
    farm::farm_query_service_client::FarmQueryServiceClient,
    product::{
        product_command_service_client::ProductCommandServiceClient,
        product_query_service_client::ProductQueryServiceClient,
    },
    user::user_query_service_client::UserQueryServiceClient,
};
use std::time::Duration;
use tonic::transport::{Channel, Endpoint};

#[derive(Clone)]
pub struct GrpcClients {
    pub product_query_client: ProductQueryServiceClient<Channel>,
    pub product_command_client: ProductCommandServiceClient<Channel>,
    pub farm_query_client: FarmQueryServiceClient<Channel>,
    pub user_query_client: UserQueryServiceClient<Channel>,
}

impl GrpcClients {
    pub async fn init(config: GrpcClientConfig) -> Result<Self> {
        let product_channel = Self::connect(config.product, "products-service").await?;
        let user_channel = Self::connect(config.user, "user-service").await?;

        Ok(Self {
            product_query_client: ProductQueryServiceClient::new(product_channel.clone()),
            product_command_client: ProductCommandServiceClient::new(product_channel.clone()),
            farm_query_client: FarmQueryServiceClient::new(product_channel),
            user_query_client: UserQueryServiceClient::new(user_channel),
        })
    }

    async fn connect(addr: String, service: &str) -> Result<Channel> {
        let endpoint = Endpoint::from_shared(addr.clone())
            .with_context(|| format!("Invalid gRPC address for {service}: {addr}"))?;

        let configured_endpoint = endpoint
            .connect_timeout(Duration::from_secs(3))
            .timeout(Duration::from_secs(10))
            .http2_keep_alive_interval(Duration::from_secs(30))
            .initial_connection_window_size(1_048_576)
            .initial_stream_window_size(1_048_576);

        configured_endpoint
            .connect()
            .await
            .with_context(|| format!("Failed to connect to {service} at {addr}"))
    }
}
