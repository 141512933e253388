use crate::{
    config::{grpc_config::GrpcClientConfig, myconfig::Config},
    di::{DependenciesInject, DependenciesInjectDeps},
    grpc_client::GrpcClients,
};
use anyhow::{Context, Result};
use prometheus_client::registry::Registry;
use shared::{
    cache::CacheStore,
    config::{ConnectionPool, RedisClient, RedisConfig},
    utils::{SystemMetrics, run_metrics_collector},
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Registry>,
    pub system_metrics: Arc<SystemMetrics>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("deps", &self.di_container)
            .field("system_metrics", &self.system_metrics)
            .finish()
    }
}

impl AppState {
    pub async fn new(pool: ConnectionPool, config: Config) -> Result<Self> {
        let mut registry = Registry::default();
        let system_metrics = Arc::new(SystemMetrics::new());

        let redis_config = RedisConfig::new(
            config.redis_host.clone(),
            config.redis_port,
            config.redis_db,
            config.redis_password.clone(),
        );

        let redis = RedisClient::new(&redis_config).context("Failed to create Redis client")?;

        redis.ping().await.context("Failed to ping Redis server")?;

        let cache = Arc::new(CacheStore::new(redis.pool.clone()));

        let grpc_config = GrpcClientConfig::init().context("failed to load grpc client config")?;

        let clients = GrpcClients::init(grpc_config)
            .await
            .context("failed to connect grpc clients")?;

        let deps = DependenciesInjectDeps {
            pool,
            cache,
            clients,
            config,
        };

        let di_container = DependenciesInject::new(deps, &mut registry)
            .context("Failed to initialize dependency injection container")?;

        system_metrics.register(&mut registry);

        tokio::spawn(run_metrics_collector(system_metrics.clone()));

        Ok(Self {
            di_container,
            registry: Arc::new(registry),
            system_metrics,
        })
    }
}
