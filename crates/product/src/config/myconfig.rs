use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub grpc_port: u16,
    pub db_max_conn: u32,
    pub db_min_conn: u32,
}

impl Config {
    pub fn init() -> Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("Missing environment variable: DATABASE_URL")?;

        let grpc_port = std::env::var("PRODUCT_GRPC_PORT")
            .context("Missing environment variable: PRODUCT_GRPC_PORT")?
            .parse::<u16>()
            .context("PRODUCT_GRPC_PORT must be a valid u16 integer")?;

        let db_max_conn: u32 = std::env::var("DB_MAX_CONNECTION")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<u32>()
            .context("Unable to parse DB_MAX_CONNECTION as u32")?;

        let db_min_conn: u32 = std::env::var("DB_MIN_CONNECTION")
            .unwrap_or_else(|_| "1".to_string())
            .parse::<u32>()
            .context("Unable to parse DB_MIN_CONNECTION as u32")?;

        Ok(Self {
            database_url,
            grpc_port,
            db_max_conn,
            db_min_conn,
        })
    }
}
