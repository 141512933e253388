use crate::{
    abstract_trait::carrier::CarrierGatewayTrait,
    carrier::{
        CancelResult, CarrierError, CarrierFeeQuote, CarrierFeeRequest, CreateShipmentRequest,
        GhnDistrict, GhnProvince, GhnWard, ShipmentResult,
        location::{matches_reference, normalize_location_name},
    },
    config::myconfig::CarrierConfig,
};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::time::Duration;
use tracing::{error, info};

/// Every carrier payload arrives wrapped in this envelope.
#[derive(Debug, Deserialize)]
struct GhnEnvelope<T> {
    code: i32,
    #[serde(default)]
    message: String,
    data: Option<T>,
}

#[derive(Debug, Serialize)]
struct CancelShipmentsBody<'a> {
    order_codes: &'a [String],
}

pub struct GhnGateway {
    http: reqwest::Client,
    config: CarrierConfig,
}

impl GhnGateway {
    pub fn new(config: CarrierConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(3))
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self { http, config })
    }

    async fn get_data<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
        context: &str,
    ) -> Result<T, CarrierError> {
        let response = self
            .http
            .get(url)
            .header("Token", &self.config.token)
            .header("ShopId", &self.config.shop_id)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                error!("❌ Carrier unreachable during {context}: {e}");
                CarrierError::Unavailable(format!("{context}: {e}"))
            })?;

        Self::decode_response(response, context).await
    }

    async fn post_data<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
        context: &str,
    ) -> Result<T, CarrierError> {
        let response = self
            .http
            .post(url)
            .header("Token", &self.config.token)
            .header("ShopId", &self.config.shop_id)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                error!("❌ Carrier unreachable during {context}: {e}");
                CarrierError::Unavailable(format!("{context}: {e}"))
            })?;

        Self::decode_response(response, context).await
    }

    async fn decode_response<T: DeserializeOwned>(
        response: reqwest::Response,
        context: &str,
    ) -> Result<T, CarrierError> {
        let status = response.status();

        if status == StatusCode::BAD_REQUEST {
            let body = response.text().await.unwrap_or_default();
            error!("❌ Carrier rejected {context} request: {body}");
            return Err(CarrierError::InvalidRequest(format!("{context}: {body}")));
        }

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            error!("❌ Carrier rejected credentials during {context} (HTTP {status})");
            return Err(CarrierError::Config(format!(
                "carrier rejected credentials during {context}"
            )));
        }

        if !status.is_success() {
            error!("❌ Carrier {context} failed with HTTP {status}");
            return Err(CarrierError::Upstream(format!("{context}: HTTP {status}")));
        }

        let envelope: GhnEnvelope<T> = response.json().await.map_err(|e| {
            error!("❌ Carrier {context} returned an undecodable body: {e}");
            CarrierError::Upstream(format!("{context}: undecodable body: {e}"))
        })?;

        if envelope.code != 200 {
            error!(
                "❌ Carrier {context} answered code {}: {}",
                envelope.code, envelope.message
            );
            return Err(CarrierError::Upstream(format!(
                "{context}: {}",
                envelope.message
            )));
        }

        envelope.data.ok_or_else(|| {
            error!("❌ Carrier {context} answered without data");
            CarrierError::Upstream(format!("{context}: missing data"))
        })
    }
}

#[async_trait]
impl CarrierGatewayTrait for GhnGateway {
    async fn get_province_id(&self, name: &str) -> Result<Option<i32>, CarrierError> {
        let normalized = normalize_location_name(name);

        let provinces: Vec<GhnProvince> = self
            .get_data(&self.config.master_data_url_for("province"), &[], "province lookup")
            .await?;

        Ok(provinces
            .iter()
            .find(|p| matches_reference(&normalized, &p.name, &p.name_extension))
            .map(|p| p.province_id))
    }

    async fn get_district_id(
        &self,
        name: &str,
        province_id: i32,
    ) -> Result<Option<i32>, CarrierError> {
        let normalized = normalize_location_name(name);

        let districts: Vec<GhnDistrict> = self
            .get_data(
                &self.config.master_data_url_for("district"),
                &[("province_id", province_id.to_string())],
                "district lookup",
            )
            .await?;

        Ok(districts
            .iter()
            .find(|d| matches_reference(&normalized, &d.name, &d.name_extension))
            .map(|d| d.district_id))
    }

    async fn get_ward_code(
        &self,
        name: &str,
        district_id: i32,
    ) -> Result<Option<String>, CarrierError> {
        let normalized = normalize_location_name(name);

        let wards: Vec<GhnWard> = self
            .get_data(
                &self.config.master_data_url_for("ward"),
                &[("district_id", district_id.to_string())],
                "ward lookup",
            )
            .await?;

        Ok(wards
            .iter()
            .find(|w| matches_reference(&normalized, &w.name, &w.name_extension))
            .map(|w| w.ward_code.clone()))
    }

    async fn quote_fee(&self, req: &CarrierFeeRequest) -> Result<CarrierFeeQuote, CarrierError> {
        info!(
            "🚚 Quoting carrier fee: {} -> {}",
            req.from_district_id, req.to_district_id
        );

        self.post_data(&self.config.fee_url, req, "fee quote").await
    }

    async fn create_shipment(
        &self,
        req: &CreateShipmentRequest,
    ) -> Result<ShipmentResult, CarrierError> {
        info!("🚚 Creating carrier shipment to {}", req.to_district_id);

        let result: ShipmentResult = self
            .post_data(&self.config.create_order_url, req, "shipment creation")
            .await?;

        info!("✅ Carrier shipment created: {}", result.order_code);
        Ok(result)
    }

    async fn cancel_shipments(&self, codes: &[String]) -> Result<Vec<CancelResult>, CarrierError> {
        info!("🚚 Cancelling {} carrier shipment(s)", codes.len());

        self.post_data(
            &self.config.cancel_order_url,
            &CancelShipmentsBody { order_codes: codes },
            "shipment cancellation",
        )
        .await
    }
}
