use crate::{
    abstract_trait::gateway::PaymentGatewayTrait,
    config::myconfig::PayosConfig,
    gateway::{GatewayError, signature::sign_payment_request},
};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{error, info};

#[derive(Debug, Clone)]
pub struct CreatePaymentLinkRequest {
    pub order_code: i64,
    pub amount: i64,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct PaymentLinkResult {
    pub transaction_id: String,
    pub checkout_url: String,
    pub qr_code: String,
    pub status: String,
    pub signature: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PayosCreateBody<'a> {
    order_code: i64,
    amount: i64,
    description: &'a str,
    cancel_url: &'a str,
    return_url: &'a str,
    signature: String,
}

#[derive(Debug, Deserialize)]
struct PayosEnvelope {
    code: String,
    #[serde(default)]
    desc: String,
    data: Option<PayosLinkData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PayosLinkData {
    payment_link_id: String,
    #[serde(default)]
    checkout_url: String,
    #[serde(default)]
    qr_code: String,
    #[serde(default)]
    status: String,
}

pub struct PayosGateway {
    http: reqwest::Client,
    config: PayosConfig,
}

impl PayosGateway {
    pub fn new(config: PayosConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(3))
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self { http, config })
    }
}

#[async_trait]
impl PaymentGatewayTrait for PayosGateway {
    async fn create_payment_link(
        &self,
        req: &CreatePaymentLinkRequest,
    ) -> Result<PaymentLinkResult, GatewayError> {
        info!("💳 Creating payment link for order code {}", req.order_code);

        let signature = sign_payment_request(
            req.amount,
            &self.config.cancel_url,
            &req.description,
            req.order_code,
            &self.config.return_url,
            &self.config.checksum_key,
        );

        let body = PayosCreateBody {
            order_code: req.order_code,
            amount: req.amount,
            description: &req.description,
            cancel_url: &self.config.cancel_url,
            return_url: &self.config.return_url,
            signature: signature.clone(),
        };

        let response = self
            .http
            .post(&self.config.create_order_url)
            .header("x-client-id", &self.config.client_id)
            .header("x-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!("❌ Payment gateway unreachable: {e}");
                GatewayError::Unavailable(e.to_string())
            })?;

        let status = response.status();

        if status == StatusCode::BAD_REQUEST {
            let body = response.text().await.unwrap_or_default();
            error!("❌ Payment gateway rejected the request: {body}");
            return Err(GatewayError::InvalidRequest(body));
        }

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            error!("❌ Payment gateway rejected credentials (HTTP {status})");
            return Err(GatewayError::Config(
                "payment gateway rejected credentials".into(),
            ));
        }

        if !status.is_success() {
            error!("❌ Payment gateway answered HTTP {status}");
            return Err(GatewayError::Upstream(format!("HTTP {status}")));
        }

        let envelope: PayosEnvelope = response.json().await.map_err(|e| {
            error!("❌ Payment gateway returned an undecodable body: {e}");
            GatewayError::Upstream(format!("undecodable body: {e}"))
        })?;

        if envelope.code != "00" {
            error!(
                "❌ Payment gateway answered code {}: {}",
                envelope.code, envelope.desc
            );
            return Err(GatewayError::Upstream(envelope.desc));
        }

        let data = envelope
            .data
            .ok_or_else(|| GatewayError::Upstream("missing payment link data".into()))?;

        info!("✅ Payment link created: {}", data.payment_link_id);

        Ok(PaymentLinkResult {
            transaction_id: data.payment_link_id,
            checkout_url: data.checkout_url,
            qr_code: data.qr_code,
            status: data.status,
            signature,
        })
    }
}
