use crate::di::DependenciesInject;
use anyhow::Result;
use prometheus_client::registry::Registry;
use shared::{
    config::ConnectionPool,
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
    pub async fn new(pool: ConnectionPool) -> Result<Self> {
        let mut registry = Registry::default();
        let system_metrics = Arc::new(SystemMetrics::new());

        let di_container = DependenciesInject::new(pool);

        system_metrics.register(&mut registry);

        tokio::spawn(run_metrics_collector(system_metrics.clone()));

        Ok(Self {
            di_container,
            registry: Arc::new(registry),
            system_metrics,
        })
    }
}
