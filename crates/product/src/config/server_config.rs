use crate::config::myconfig::Config;
use anyhow::Result;
use std::net::SocketAddr;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub grpc_addr: SocketAddr,
    pub database_url: String,
}

impl ServerConfig {
    pub fn from_config(config: &Config) -> Result<Self> {
        let grpc_addr: SocketAddr = format!("0.0.0.0:{}", config.grpc_port).parse()?;

        Ok(Self {
            grpc_addr,
            database_url: config.database_url.clone(),
        })
    }
}
