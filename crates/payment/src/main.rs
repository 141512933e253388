use anyhow::{Context, Result};
use genproto::{
    order::{
        order_command_service_server::OrderCommandServiceServer,
        order_query_service_server::OrderQueryServiceServer,
    },
    payment::payment_callback_service_server::PaymentCallbackServiceServer,
    sub_order::sub_order_query_service_server::SubOrderQueryServiceServer,
};
use payment::{
    config::{myconfig::Config, server_config::ServerConfig},
    handler::{
        OrderCommandGrpcServiceImpl, OrderQueryGrpcServiceImpl, PaymentCallbackGrpcServiceImpl,
        SubOrderQueryGrpcServiceImpl,
    },
    state::AppState,
};
use shared::{
    config::ConnectionManager,
    utils::{Telemetry, init_logger},
};
use sqlx::{Pool, Postgres};
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let (server_config, state, telemetry) = setup().await.context("Failed to setup application")?;

    let (shutdown_tx, mut shutdown_rx) = broadcast::channel::<()>(1);

    let server_handle = run_servers(server_config, state, shutdown_tx.clone())
        .await
        .context("Failed to start servers")?;

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("🛑 Shutdown signal received (Ctrl+C).");
        }
        _ = shutdown_rx.recv() => {
            info!("🛑 Shutdown signal received from internal component.");
        }
    }

    shutdown(telemetry, server_handle).await;

    Ok(())
}

async fn setup() -> Result<(ServerConfig, Arc<AppState>, Telemetry)> {
    dotenv::dotenv().ok();

    let is_dev = std::env::var("DEV_MODE")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);
    let is_enable_file = std::env::var("ENABLE_FILE_LOG")
        .map(|v| v == "true")
        .unwrap_or(false);

    let config = Config::init().context("Failed to load configuration")?;
    let server_config = ServerConfig::from_config(&config)?;

    let otel_endpoint = std::env::var("OTEL_ENDPOINT")
        .unwrap_or_else(|_| "http://otel-collector:4317".to_string());

    let telemetry = Telemetry::new("payment-service", otel_endpoint);
    let logger_provider = telemetry.init_logger();
    let _meter_provider = telemetry.init_meter();
    let _tracer_provider = telemetry.init_tracer();

    init_logger(
        logger_provider.clone(),
        "payment-service",
        is_dev,
        is_enable_file,
    );

    let db_pool = ConnectionManager::new_pool(
        &server_config.database_url,
        config.db_min_conn,
        config.db_max_conn,
    )
    .await
    .context("Failed to initialize database pool")?;

    run_migrations(&db_pool)
        .await
        .context("failed to migrate database")?;

    let state = Arc::new(
        AppState::new(db_pool, config)
            .await
            .context("Failed to create AppState")?,
    );

    info!("✅ Application setup completed successfully.");
    Ok((server_config, state, telemetry))
}

async fn run_servers(
    server_config: ServerConfig,
    state: Arc<AppState>,
    shutdown_tx: broadcast::Sender<()>,
) -> Result<tokio::task::JoinHandle<()>> {
    let grpc_addr = server_config.grpc_addr;

    let shutdown_tx_for_server = shutdown_tx.clone();
    let shutdown_tx_for_ctrlc = shutdown_tx.clone();

    let server_handle = tokio::spawn(async move {
        loop {
            info!("Attempting to start gRPC server on {grpc_addr}");

            let shutdown_rx = shutdown_tx_for_server.subscribe();

            let order_command = OrderCommandGrpcServiceImpl::new(
                state.di_container.order_command.clone(),
                state.di_container.shipping_fee.clone(),
            );
            let order_query =
                OrderQueryGrpcServiceImpl::new(state.di_container.order_query.clone());
            let sub_order_query =
                SubOrderQueryGrpcServiceImpl::new(state.di_container.sub_order_query.clone());
            let payment_callback =
                PaymentCallbackGrpcServiceImpl::new(state.di_container.payment_callback.clone());

            match start_grpc_server(
                order_command,
                order_query,
                sub_order_query,
                payment_callback,
                grpc_addr,
                shutdown_rx,
            )
            .await
            {
                Ok(()) => {
                    info!("gRPC server stopped gracefully.");
                    break;
                }
                Err(e) => {
                    error!("gRPC server failed: {e}. Restarting in 5s...");
                    tokio::time::sleep(tokio::time::Duration::from_secs(5)).await;
                }
            }
        }
    });

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for shutdown signal: {}", e);
        } else {
            info!("Ctrl+C signal detected, broadcasting shutdown...");
            if let Err(e) = shutdown_tx_for_ctrlc.send(()) {
                warn!("Failed to send shutdown signal: {}", e);
            }
        }
    });

    Ok(server_handle)
}

async fn shutdown(telemetry: Telemetry, server_handle: tokio::task::JoinHandle<()>) {
    info!("🛑 Shutting down all servers...");

    let shutdown_timeout = tokio::time::Duration::from_secs(30);
    let shutdown_result = tokio::time::timeout(shutdown_timeout, server_handle).await;

    match shutdown_result {
        Ok(join_result) => {
            if let Err(e) = join_result {
                error!("Server task panicked: {}", e);
            }
            info!("✅ All servers shutdown gracefully.");
        }
        Err(_) => {
            warn!("⚠️  Shutdown timeout reached, forcing exit.");
        }
    }

    if let Err(e) = telemetry.shutdown().await {
        error!("Failed to shutdown telemetry: {}", e);
    }

    info!("✅ Payment service shutdown complete.");
}

async fn start_grpc_server(
    order_command_handler: OrderCommandGrpcServiceImpl,
    order_query_handler: OrderQueryGrpcServiceImpl,
    sub_order_query_handler: SubOrderQueryGrpcServiceImpl,
    payment_callback_handler: PaymentCallbackGrpcServiceImpl,
    addr: std::net::SocketAddr,
    mut shutdown_rx: broadcast::Receiver<()>,
) -> Result<()> {
    info!("Starting gRPC server on {addr}");

    let shutdown_future = async move {
        let _ = shutdown_rx.recv().await;
        info!("gRPC server received shutdown signal");
    };

    tonic::transport::Server::builder()
        .add_service(OrderCommandServiceServer::new(order_command_handler))
        .add_service(OrderQueryServiceServer::new(order_query_handler))
        .add_service(SubOrderQueryServiceServer::new(sub_order_query_handler))
        .add_service(PaymentCallbackServiceServer::new(payment_callback_handler))
        .serve_with_shutdown(addr, shutdown_future)
        .await
        .context("gRPC server failed to start or serve")
}

pub async fn run_migrations(pool: &Pool<Postgres>) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;

    Ok(())
}
