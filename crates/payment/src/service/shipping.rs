use crate::{
    abstract_trait::{
        carrier::DynCarrierGateway,
        order::service::{DynOrderValidationService, ShippingFeeServiceTrait},
    },
    carrier::{CarrierFeeRequest, CarrierItem, classify_service_type},
    domain::{
        requests::order::{CartSubOrder, OrderInfoRequest},
        validated::{ShippingFeeDetails, ShippingFeeQuote, Validated, ValidatedOrderInfo},
    },
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use tracing::info;

#[derive(Clone)]
pub struct ShippingFeeService {
    validator: DynOrderValidationService,
    carrier: DynCarrierGateway,
}

impl ShippingFeeService {
    pub fn new(validator: DynOrderValidationService, carrier: DynCarrierGateway) -> Self {
        Self { validator, carrier }
    }
}

/// One carrier fee request for a validated sub-order: farm origin codes,
/// buyer destination codes and the flattened weighted line items. Package
/// dimensions are not collected at checkout, so classification rides on the
/// item weights alone.
pub fn build_fee_request(
    details: &ShippingFeeDetails,
    buyer: &ValidatedOrderInfo,
) -> CarrierFeeRequest {
    let items: Vec<CarrierItem> = details
        .items
        .iter()
        .map(|item| CarrierItem {
            name: item.product_name.clone(),
            quantity: item.requested_quantity,
            weight: item.weight_gram,
            price: item.price_per_unit,
        })
        .collect();

    let total_weight = details.total_weight_gram();
    let service_type = classify_service_type(0, 0, 0, total_weight, &items);

    CarrierFeeRequest {
        service_type_id: service_type.id(),
        from_district_id: details.from_district_id,
        from_ward_code: details.from_ward_code.clone(),
        to_district_id: buyer.to_district_id,
        to_ward_code: buyer.to_ward_code.clone(),
        length: 0,
        width: 0,
        height: 0,
        weight: total_weight.min(i64::from(i32::MAX)) as i32,
        items,
    }
}

#[async_trait]
impl ShippingFeeServiceTrait for ShippingFeeService {
    async fn calculate_shipping_fee(
        &self,
        cart: &CartSubOrder,
        info: &OrderInfoRequest,
    ) -> Result<Validated<ShippingFeeQuote>, ServiceError> {
        // Both validators run to completion; a failure on one side never
        // cancels the other, and their issues are merged.
        let (sub_order_result, buyer_result) = futures::future::join(
            self.validator.validate_sub_order(cart),
            self.validator.validate_order_info(info),
        )
        .await;

        let mut issues = Vec::new();
        let details = sub_order_result?.collect_into(&mut issues);
        let buyer = buyer_result?.collect_into(&mut issues);

        if !issues.is_empty() {
            return Ok(Validated::Invalid(issues));
        }

        let (Some(details), Some(buyer)) = (details, buyer) else {
            return Err(ServiceError::Internal(
                "validation yielded neither issues nor a payload".into(),
            ));
        };

        let fee_request = build_fee_request(&details, &buyer);
        let quote = self
            .carrier
            .quote_fee(&fee_request)
            .await
            .map_err(ServiceError::from)?;

        let final_fee = details.declared_shipping_fee + quote.total;

        info!(
            "🚚 Shipping fee for farm {}: declared {} + carrier {} = {}",
            details.farm_id, details.declared_shipping_fee, quote.total, final_fee
        );

        Ok(Validated::Valid(ShippingFeeQuote {
            farm_id: details.farm_id,
            declared_shipping_fee: details.declared_shipping_fee,
            carrier_fee: quote.total,
            final_fee,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::requests::order::CartItem;
    use crate::domain::validated::ValidatedItem;
    use crate::service::testing::{MockCarrierGateway, MockCatalogClient, MockUserClient};
    use crate::service::validation::OrderValidationService;
    use std::sync::Arc;

    fn shipping_service(
        catalog: MockCatalogClient,
        user: MockUserClient,
        carrier: MockCarrierGateway,
    ) -> ShippingFeeService {
        let carrier = Arc::new(carrier);
        let validator = Arc::new(OrderValidationService::new(
            Arc::new(catalog),
            Arc::new(user),
            carrier.clone(),
        ));
        ShippingFeeService::new(validator, carrier)
    }

    fn cart() -> CartSubOrder {
        CartSubOrder {
            farm_id: 1,
            items: vec![CartItem {
                product_id: 10,
                quantity: 2,
            }],
        }
    }

    fn info() -> OrderInfoRequest {
        OrderInfoRequest {
            user_id: 7,
            address_id: 70,
        }
    }

    #[tokio::test]
    async fn final_fee_is_declared_plus_carrier_fee_exactly() {
        let mut carrier = MockCarrierGateway::with_defaults();
        carrier.fee_total = 31_000;

        let service = shipping_service(
            MockCatalogClient::with_defaults(),
            MockUserClient::with_defaults(),
            carrier,
        );

        let result = service.calculate_shipping_fee(&cart(), &info()).await.unwrap();
        let Validated::Valid(quote) = result else {
            panic!("expected a quote");
        };

        // Mock farm declares 5 000.
        assert_eq!(quote.declared_shipping_fee, 5_000);
        assert_eq!(quote.carrier_fee, 31_000);
        assert_eq!(quote.final_fee, quote.declared_shipping_fee + quote.carrier_fee);
    }

    #[tokio::test]
    async fn issues_from_both_validators_are_merged() {
        let mut catalog = MockCatalogClient::with_defaults();
        catalog.farm_status = "PENDING".into();
        let mut user = MockUserClient::with_defaults();
        user.user_status = "SUSPENDED".into();

        let service = shipping_service(catalog, user, MockCarrierGateway::with_defaults());

        let result = service.calculate_shipping_fee(&cart(), &info()).await.unwrap();
        let Validated::Invalid(issues) = result else {
            panic!("expected merged issues");
        };
        // One farm-side and one buyer-side issue.
        assert_eq!(issues.len(), 2);
    }

    #[test]
    fn fee_request_flattens_weighted_items() {
        let details = ShippingFeeDetails {
            farm_id: 1,
            farm_name: "Nông trại".into(),
            from_province_id: 203,
            from_district_id: 1583,
            from_ward_code: "40701".into(),
            from_address: "12 Trại Mát".into(),
            from_phone: "0900000001".into(),
            declared_shipping_fee: 0,
            items: vec![
                ValidatedItem {
                    product_id: 10,
                    product_name: "Cà chua bi".into(),
                    unit: "kg".into(),
                    requested_quantity: 3,
                    price_per_unit: 50_000,
                    weight_gram: 500,
                },
                ValidatedItem {
                    product_id: 11,
                    product_name: "Xà lách".into(),
                    unit: "kg".into(),
                    requested_quantity: 1,
                    price_per_unit: 20_000,
                    weight_gram: 300,
                },
            ],
        };

        let buyer = ValidatedOrderInfo {
            user_id: 7,
            address_id: 70,
            addressee_name: "Nguyễn Văn A".into(),
            addressee_phone: "0911222333".into(),
            street: "35 Nguyễn Huệ".into(),
            city: "Thành phố Hồ Chí Minh".into(),
            district: "Quận 1".into(),
            ward: "Phường Bến Nghé".into(),
            to_province_id: 202,
            to_district_id: 1442,
            to_ward_code: "21211".into(),
        };

        let req = build_fee_request(&details, &buyer);

        assert_eq!(req.items.len(), 2);
        assert_eq!(req.weight, 1_800);
        assert_eq!(req.from_district_id, 1583);
        assert_eq!(req.to_ward_code, "21211");
        // 1.8 kg of produce is light service.
        assert_eq!(req.service_type_id, 2);
    }
}
