use anyhow::{Context, Result};

/// Carrier credentials and endpoints. Every field is required; a missing one
/// fails startup.
#[derive(Debug, Clone)]
pub struct CarrierConfig {
    pub token: String,
    pub shop_id: String,
    pub master_data_url: String,
    pub fee_url: String,
    pub create_order_url: String,
    pub cancel_order_url: String,
}

impl CarrierConfig {
    fn init() -> Result<Self> {
        let token = std::env::var("GHN_TOKEN").context("Missing environment variable: GHN_TOKEN")?;
        let shop_id =
            std::env::var("GHN_SHOP_ID").context("Missing environment variable: GHN_SHOP_ID")?;
        let master_data_url = std::env::var("GHN_MASTER_DATA_URL")
            .context("Missing environment variable: GHN_MASTER_DATA_URL")?;
        let fee_url =
            std::env::var("GHN_FEE_URL").context("Missing environment variable: GHN_FEE_URL")?;
        let create_order_url = std::env::var("GHN_CREATE_ORDER_URL")
            .context("Missing environment variable: GHN_CREATE_ORDER_URL")?;
        let cancel_order_url = std::env::var("GHN_CANCEL_ORDER_URL")
            .context("Missing environment variable: GHN_CANCEL_ORDER_URL")?;

        Ok(Self {
            token,
            shop_id,
            master_data_url,
            fee_url,
            create_order_url,
            cancel_order_url,
        })
    }

    pub fn master_data_url_for(&self, scope: &str) -> String {
        format!("{}/{scope}", self.master_data_url.trim_end_matches('/'))
    }
}

/// Payment-gateway credentials and endpoints. Every field is required.
#[derive(Debug, Clone)]
pub struct PayosConfig {
    pub checksum_key: String,
    pub client_id: String,
    pub api_key: String,
    pub create_order_url: String,
    pub return_url: String,
    pub cancel_url: String,
}

impl PayosConfig {
    fn init() -> Result<Self> {
        let checksum_key = std::env::var("PAYOS_CHECKSUM_KEY")
            .context("Missing environment variable: PAYOS_CHECKSUM_KEY")?;
        let client_id = std::env::var("PAYOS_CLIENT_ID")
            .context("Missing environment variable: PAYOS_CLIENT_ID")?;
        let api_key = std::env::var("PAYOS_API_KEY")
            .context("Missing environment variable: PAYOS_API_KEY")?;
        let create_order_url = std::env::var("PAYOS_CREATE_ORDER_URL")
            .context("Missing environment variable: PAYOS_CREATE_ORDER_URL")?;
        let return_url = std::env::var("PAYOS_RETURN_URL")
            .context("Missing environment variable: PAYOS_RETURN_URL")?;
        let cancel_url = std::env::var("PAYOS_CANCEL_URL")
            .context("Missing environment variable: PAYOS_CANCEL_URL")?;

        Ok(Self {
            checksum_key,
            client_id,
            api_key,
            create_order_url,
            return_url,
            cancel_url,
        })
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub grpc_port: u16,
    pub db_max_conn: u32,
    pub db_min_conn: u32,
    pub redis_host: String,
    pub redis_port: u16,
    pub redis_db: u8,
    pub redis_password: Option<String>,
    pub carrier: CarrierConfig,
    pub payos: PayosConfig,
}

impl Config {
    pub fn init() -> Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("Missing environment variable: DATABASE_URL")?;

        let grpc_port = std::env::var("PAYMENT_GRPC_PORT")
            .context("Missing environment variable: PAYMENT_GRPC_PORT")?
            .parse::<u16>()
            .context("PAYMENT_GRPC_PORT must be a valid u16 integer")?;

        let db_max_conn: u32 = std::env::var("DB_MAX_CONNECTION")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<u32>()
            .context("Unable to parse DB_MAX_CONNECTION as u32")?;

        let db_min_conn: u32 = std::env::var("DB_MIN_CONNECTION")
            .unwrap_or_else(|_| "1".to_string())
            .parse::<u32>()
            .context("Unable to parse DB_MIN_CONNECTION as u32")?;

        let redis_host = std::env::var("REDIS_HOST").unwrap_or_else(|_| "redis".to_string());
        let redis_port = std::env::var("REDIS_PORT")
            .unwrap_or_else(|_| "6379".to_string())
            .parse::<u16>()
            .context("REDIS_PORT must be a valid u16 integer")?;
        let redis_db = std::env::var("REDIS_DB")
            .unwrap_or_else(|_| "1".to_string())
            .parse::<u8>()
            .context("REDIS_DB must be a valid u8 integer")?;
        let redis_password = std::env::var("REDIS_PASSWORD").ok();

        let carrier = CarrierConfig::init()?;
        let payos = PayosConfig::init()?;

        Ok(Self {
            database_url,
            grpc_port,
            db_max_conn,
            db_min_conn,
            redis_host,
            redis_port,
            redis_db,
            redis_password,
            carrier,
            payos,
        })
    }
}
