use serde::{Deserialize, Serialize};

// Reference data as the carrier serves it; field names follow the carrier's
// JSON casing.

#[derive(Debug, Clone, Deserialize)]
pub struct GhnProvince {
    #[serde(rename = "ProvinceID")]
    pub province_id: i32,
    #[serde(rename = "ProvinceName")]
    pub name: String,
    #[serde(rename = "NameExtension", default)]
    pub name_extension: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GhnDistrict {
    #[serde(rename = "DistrictID")]
    pub district_id: i32,
    #[serde(rename = "DistrictName")]
    pub name: String,
    #[serde(rename = "NameExtension", default)]
    pub name_extension: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GhnWard {
    #[serde(rename = "WardCode")]
    pub ward_code: String,
    #[serde(rename = "WardName")]
    pub name: String,
    #[serde(rename = "NameExtension", default)]
    pub name_extension: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CarrierItem {
    pub name: String,
    pub quantity: i32,
    pub weight: i32,
    pub price: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CarrierFeeRequest {
    pub service_type_id: i32,
    pub from_district_id: i32,
    pub from_ward_code: String,
    pub to_district_id: i32,
    pub to_ward_code: String,
    pub length: i32,
    pub width: i32,
    pub height: i32,
    pub weight: i32,
    pub items: Vec<CarrierItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CarrierFeeQuote {
    pub total: i64,
    #[serde(default)]
    pub service_fee: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateShipmentRequest {
    pub payment_type_id: i32,
    pub required_note: String,
    pub from_name: String,
    pub from_phone: String,
    pub from_address: String,
    pub from_ward_code: String,
    pub from_district_id: i32,
    pub to_name: String,
    pub to_phone: String,
    pub to_address: String,
    pub to_ward_code: String,
    pub to_district_id: i32,
    pub cod_amount: i64,
    pub content: String,
    pub length: i32,
    pub width: i32,
    pub height: i32,
    pub weight: i32,
    pub service_type_id: i32,
    pub items: Vec<CarrierItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShipmentResult {
    pub order_code: String,
    pub total_fee: i64,
    #[serde(default)]
    pub expected_delivery_time: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CancelResult {
    pub order_code: String,
    pub result: bool,
    #[serde(default)]
    pub message: String,
}

/// Carrier service tiers. The ids are the carrier's own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceType {
    /// HANG_NHE
    Light,
    /// HANG_NANG
    Heavy,
}

impl ServiceType {
    pub fn id(self) -> i32 {
        match self {
            ServiceType::Light => 2,
            ServiceType::Heavy => 5,
        }
    }
}

const MAX_LIGHT_DIMENSION_CM: i32 = 150;
const MAX_LIGHT_WEIGHT_GRAM: i64 = 20_000;

/// Weight-class rule shared by fee quoting and shipment creation: heavy when
/// any dimension exceeds 150 cm, or the declared weight exceeds 20000 g, or
/// the summed item weight x quantity exceeds 20000 g.
pub fn classify_service_type(
    length_cm: i32,
    width_cm: i32,
    height_cm: i32,
    declared_weight_gram: i64,
    items: &[CarrierItem],
) -> ServiceType {
    if length_cm > MAX_LIGHT_DIMENSION_CM
        || width_cm > MAX_LIGHT_DIMENSION_CM
        || height_cm > MAX_LIGHT_DIMENSION_CM
    {
        return ServiceType::Heavy;
    }

    if declared_weight_gram > MAX_LIGHT_WEIGHT_GRAM {
        return ServiceType::Heavy;
    }

    let item_weight: i64 = items
        .iter()
        .map(|item| i64::from(item.weight) * i64::from(item.quantity))
        .sum();

    if item_weight > MAX_LIGHT_WEIGHT_GRAM {
        return ServiceType::Heavy;
    }

    ServiceType::Light
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(weight: i32, quantity: i32) -> CarrierItem {
        CarrierItem {
            name: "Gạo ST25".into(),
            quantity,
            weight,
            price: 30_000,
        }
    }

    #[test]
    fn exactly_twenty_kilograms_stays_light() {
        let class = classify_service_type(100, 50, 50, 20_000, &[item(10_000, 2)]);
        assert_eq!(class, ServiceType::Light);
    }

    #[test]
    fn one_gram_over_twenty_kilograms_is_heavy() {
        assert_eq!(
            classify_service_type(100, 50, 50, 20_001, &[]),
            ServiceType::Heavy
        );
        assert_eq!(
            classify_service_type(100, 50, 50, 0, &[item(20_001, 1)]),
            ServiceType::Heavy
        );
    }

    #[test]
    fn item_weight_multiplies_by_quantity() {
        assert_eq!(
            classify_service_type(10, 10, 10, 0, &[item(5_000, 4)]),
            ServiceType::Light
        );
        assert_eq!(
            classify_service_type(10, 10, 10, 0, &[item(5_001, 4)]),
            ServiceType::Heavy
        );
    }

    #[test]
    fn oversize_dimension_is_heavy_regardless_of_weight() {
        assert_eq!(
            classify_service_type(151, 10, 10, 100, &[]),
            ServiceType::Heavy
        );
        assert_eq!(
            classify_service_type(150, 150, 150, 100, &[]),
            ServiceType::Light
        );
    }

    #[test]
    fn service_type_ids_match_carrier_tiers() {
        assert_eq!(ServiceType::Light.id(), 2);
        assert_eq!(ServiceType::Heavy.id(), 5);
    }
}
