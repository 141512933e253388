use crate::{
    abstract_trait::{
        carrier::DynCarrierGateway,
        grpc_client::{DynCatalogGrpcClient, DynUserGrpcClient},
        order::service::OrderValidationServiceTrait,
    },
    domain::{
        issue::{Issue, IssueReason},
        requests::order::{CartSubOrder, OrderInfoRequest},
        validated::{ShippingFeeDetails, Validated, ValidatedItem, ValidatedOrderInfo},
    },
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::collections::HashMap;
use tracing::info;

#[derive(Clone)]
pub struct OrderValidationService {
    catalog: DynCatalogGrpcClient,
    user: DynUserGrpcClient,
    carrier: DynCarrierGateway,
}

impl OrderValidationService {
    pub fn new(
        catalog: DynCatalogGrpcClient,
        user: DynUserGrpcClient,
        carrier: DynCarrierGateway,
    ) -> Self {
        Self {
            catalog,
            user,
            carrier,
        }
    }
}

#[async_trait]
impl OrderValidationServiceTrait for OrderValidationService {
    async fn validate_sub_order(
        &self,
        cart: &CartSubOrder,
    ) -> Result<Validated<ShippingFeeDetails>, ServiceError> {
        let mut issues = Vec::new();

        if cart.farm_id <= 0 {
            return Ok(Validated::Invalid(vec![Issue::new(
                IssueReason::FarmIdRequired,
                "Cart portion has no farm id",
            )]));
        }

        if cart.items.is_empty() {
            return Ok(Validated::Invalid(vec![
                Issue::new(IssueReason::EmptyCart, "Cart portion has no items")
                    .with_farm(cart.farm_id),
            ]));
        }

        // Structurally broken items are dropped with an Issue; their valid
        // siblings still go through the full business checks so the caller
        // gets one complete diagnosis.
        let mut requested = Vec::new();
        for item in &cart.items {
            if item.product_id <= 0 || item.quantity <= 0 {
                issues.push(
                    Issue::new(
                        IssueReason::InvalidItem,
                        format!(
                            "Item must have a positive product id and quantity (got id={}, quantity={})",
                            item.product_id, item.quantity
                        ),
                    )
                    .with_farm(cart.farm_id),
                );
            } else {
                requested.push(item.clone());
            }
        }

        if requested.is_empty() {
            return Ok(Validated::Invalid(issues));
        }

        let product_ids: Vec<i32> = requested.iter().map(|i| i.product_id).collect();

        let (farm_result, products_result) = futures::future::join(
            self.catalog.find_farm_by_id(cart.farm_id),
            self.catalog.find_products_by_ids(&product_ids, false),
        )
        .await;

        let farm = farm_result?;
        let products = products_result?;

        // Farm problems make every product check moot.
        let Some(farm) = farm else {
            issues.push(
                Issue::new(IssueReason::FarmNotFound, format!("Farm {} not found", cart.farm_id))
                    .with_farm(cart.farm_id),
            );
            return Ok(Validated::Invalid(issues));
        };

        let mut farm_invalid = false;

        if !farm.is_approved() {
            farm_invalid = true;
            issues.push(
                Issue::new(
                    IssueReason::FarmNotApproved,
                    format!("Farm {} has status {}", farm.id, farm.status),
                )
                .with_farm(farm.id),
            );
        }

        if !farm.has_complete_address() {
            farm_invalid = true;
            issues.push(
                Issue::new(
                    IssueReason::FarmAddressIncomplete,
                    format!("Farm {} has no complete pickup address", farm.id),
                )
                .with_farm(farm.id),
            );
        }

        if !farm.has_carrier_codes() {
            farm_invalid = true;
            issues.push(
                Issue::new(
                    IssueReason::FarmCarrierConfigIncomplete,
                    format!("Farm {} has no carrier routing codes", farm.id),
                )
                .with_farm(farm.id),
            );
        }

        if farm_invalid {
            return Ok(Validated::Invalid(issues));
        }

        let products_by_id: HashMap<i32, _> =
            products.into_iter().map(|p| (p.id, p)).collect();

        let mut items = Vec::with_capacity(requested.len());

        for item in &requested {
            let Some(product) = products_by_id.get(&item.product_id) else {
                issues.push(
                    Issue::new(
                        IssueReason::ProductNotFound,
                        format!("Product {} not found", item.product_id),
                    )
                    .with_product(item.product_id)
                    .with_farm(farm.id),
                );
                continue;
            };

            if product.farm_id != farm.id {
                issues.push(
                    Issue::new(
                        IssueReason::ProductNotInFarm,
                        format!("Product {} does not belong to farm {}", product.id, farm.id),
                    )
                    .with_product(product.id)
                    .with_farm(farm.id),
                );
                continue;
            }

            if !product.is_sellable() {
                issues.push(
                    Issue::new(
                        IssueReason::ProductNotForSale,
                        format!("Product {} has status {}", product.id, product.status),
                    )
                    .with_product(product.id)
                    .with_farm(farm.id),
                );
                continue;
            }

            if product.stock_quantity < item.quantity {
                issues.push(
                    Issue::new(
                        IssueReason::InsufficientStock,
                        format!(
                            "Product {}: requested {}, available {}",
                            product.id, item.quantity, product.stock_quantity
                        ),
                    )
                    .with_product(product.id)
                    .with_farm(farm.id),
                );
                continue;
            }

            // Priced from the catalog, never from client input.
            items.push(ValidatedItem {
                product_id: product.id,
                product_name: product.name.clone(),
                unit: product.unit.clone(),
                requested_quantity: item.quantity,
                price_per_unit: product.price_per_unit,
                weight_gram: product.weight_gram,
            });
        }

        if !issues.is_empty() {
            return Ok(Validated::Invalid(issues));
        }

        info!(
            "✅ Sub-order for farm {} validated ({} items)",
            farm.id,
            items.len()
        );

        let from_address = farm
            .address
            .as_ref()
            .map(|a| format!("{}, {}, {}, {}", a.street, a.ward, a.district, a.city))
            .unwrap_or_default();

        Ok(Validated::Valid(ShippingFeeDetails {
            farm_id: farm.id,
            farm_name: farm.name,
            from_province_id: farm.province_id,
            from_district_id: farm.district_id,
            from_ward_code: farm.ward_code,
            from_address,
            from_phone: farm.phone,
            declared_shipping_fee: farm.shipping_fee,
            items,
        }))
    }

    async fn validate_order_info(
        &self,
        info: &OrderInfoRequest,
    ) -> Result<Validated<ValidatedOrderInfo>, ServiceError> {
        let Some(user) = self.user.find_by_id(info.user_id, true).await? else {
            return Ok(Validated::Invalid(vec![
                Issue::new(IssueReason::UserNotFound, format!("User {} not found", info.user_id))
                    .with_user(info.user_id),
            ]));
        };

        if !user.is_active() {
            return Ok(Validated::Invalid(vec![
                Issue::new(
                    IssueReason::UserInactive,
                    format!("User {} has status {}", user.id, user.status),
                )
                .with_user(user.id),
            ]));
        }

        if !user.owns_location(info.address_id) {
            return Ok(Validated::Invalid(vec![
                Issue::new(
                    IssueReason::AddressNotOwned,
                    format!("Address {} does not belong to user {}", info.address_id, user.id),
                )
                .with_user(user.id),
            ]));
        }

        let Some(address) = self.user.find_location_by_id(info.address_id).await? else {
            return Ok(Validated::Invalid(vec![
                Issue::new(
                    IssueReason::AddressNotFound,
                    format!("Address {} not found", info.address_id),
                )
                .with_user(user.id),
            ]));
        };

        if address.city.is_empty() || address.district.is_empty() || address.ward.is_empty() {
            return Ok(Validated::Invalid(vec![
                Issue::new(
                    IssueReason::AddressIncomplete,
                    format!("Address {} is missing city, district or ward", address.id),
                )
                .with_user(user.id),
            ]));
        }

        // Resolution is sequential: each lookup scopes the next. The first
        // failure aborts the rest.
        let Some(province_id) = self
            .carrier
            .get_province_id(&address.city)
            .await
            .map_err(ServiceError::from)?
        else {
            return Ok(Validated::Invalid(vec![
                Issue::new(
                    IssueReason::ProvinceNotResolved,
                    format!("Province not found for '{}'", address.city),
                )
                .with_user(user.id),
            ]));
        };

        let Some(district_id) = self
            .carrier
            .get_district_id(&address.district, province_id)
            .await
            .map_err(ServiceError::from)?
        else {
            return Ok(Validated::Invalid(vec![
                Issue::new(
                    IssueReason::DistrictNotResolved,
                    format!("District not found for '{}'", address.district),
                )
                .with_user(user.id),
            ]));
        };

        let Some(ward_code) = self
            .carrier
            .get_ward_code(&address.ward, district_id)
            .await
            .map_err(ServiceError::from)?
        else {
            return Ok(Validated::Invalid(vec![
                Issue::new(
                    IssueReason::WardNotResolved,
                    format!("Ward not found for '{}'", address.ward),
                )
                .with_user(user.id),
            ]));
        };

        info!(
            "✅ Buyer {} validated, destination codes {}/{}/{}",
            user.id, province_id, district_id, ward_code
        );

        Ok(Validated::Valid(ValidatedOrderInfo {
            user_id: user.id,
            address_id: address.id,
            addressee_name: address.name,
            addressee_phone: address.phone,
            street: address.address,
            city: address.city,
            district: address.district,
            ward: address.ward,
            to_province_id: province_id,
            to_district_id: district_id,
            to_ward_code: ward_code,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::requests::order::CartItem;
    use crate::service::testing::{MockCarrierGateway, MockCatalogClient, MockUserClient};
    use std::sync::Arc;

    fn service(
        catalog: MockCatalogClient,
        user: MockUserClient,
        carrier: MockCarrierGateway,
    ) -> OrderValidationService {
        OrderValidationService::new(Arc::new(catalog), Arc::new(user), Arc::new(carrier))
    }

    fn cart(farm_id: i32, items: Vec<(i32, i32)>) -> CartSubOrder {
        CartSubOrder {
            farm_id,
            items: items
                .into_iter()
                .map(|(product_id, quantity)| CartItem {
                    product_id,
                    quantity,
                })
                .collect(),
        }
    }

    fn reasons(validated: Validated<ShippingFeeDetails>) -> Vec<IssueReason> {
        match validated {
            Validated::Invalid(issues) => issues.into_iter().map(|i| i.reason).collect(),
            Validated::Valid(_) => panic!("expected issues"),
        }
    }

    #[tokio::test]
    async fn happy_path_prices_items_from_the_catalog() {
        let catalog = MockCatalogClient::with_defaults();
        let service = service(catalog, MockUserClient::with_defaults(), MockCarrierGateway::with_defaults());

        let result = service.validate_sub_order(&cart(1, vec![(10, 2)])).await.unwrap();

        let Validated::Valid(details) = result else {
            panic!("expected a valid sub-order");
        };
        assert_eq!(details.farm_id, 1);
        assert_eq!(details.items.len(), 1);
        // Catalog price (50 000), not anything the client sent.
        assert_eq!(details.items[0].price_per_unit, 50_000);
        assert_eq!(details.subtotal(), 100_000);
    }

    #[tokio::test]
    async fn broken_items_are_dropped_without_discarding_siblings() {
        let service = service(
            MockCatalogClient::with_defaults(),
            MockUserClient::with_defaults(),
            MockCarrierGateway::with_defaults(),
        );

        // One structurally broken line, one fine line.
        let result = service
            .validate_sub_order(&cart(1, vec![(10, 2), (-5, 1)]))
            .await
            .unwrap();

        let Validated::Invalid(issues) = result else {
            panic!("a request with any issue is wholly invalid");
        };
        // Only the broken item is reported; the sibling produced no issue.
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].reason, IssueReason::InvalidItem);
    }

    #[tokio::test]
    async fn unapproved_farm_fails_fast_without_product_checks() {
        let mut catalog = MockCatalogClient::with_defaults();
        catalog.farm_status = "PENDING".into();
        // Product checks would also fail, but must be skipped entirely.
        catalog.stock_quantity = 0;

        let service = service(catalog, MockUserClient::with_defaults(), MockCarrierGateway::with_defaults());

        let result = service.validate_sub_order(&cart(1, vec![(10, 5)])).await.unwrap();
        let found = reasons(result);

        assert!(found.contains(&IssueReason::FarmNotApproved));
        assert!(!found.contains(&IssueReason::InsufficientStock));
    }

    #[tokio::test]
    async fn insufficient_stock_is_an_issue_not_an_error() {
        let mut catalog = MockCatalogClient::with_defaults();
        catalog.stock_quantity = 10;

        let service = service(catalog, MockUserClient::with_defaults(), MockCarrierGateway::with_defaults());

        let result = service.validate_sub_order(&cart(1, vec![(10, 11)])).await.unwrap();
        assert_eq!(reasons(result), vec![IssueReason::InsufficientStock]);
    }

    #[tokio::test]
    async fn foreign_product_is_rejected() {
        let service = service(
            MockCatalogClient::with_defaults(),
            MockUserClient::with_defaults(),
            MockCarrierGateway::with_defaults(),
        );

        // Product 99 exists in the mock catalog but belongs to farm 2.
        let result = service.validate_sub_order(&cart(1, vec![(99, 1)])).await.unwrap();
        assert_eq!(reasons(result), vec![IssueReason::ProductNotInFarm]);
    }

    #[tokio::test]
    async fn buyer_validation_resolves_carrier_codes_sequentially() {
        let service = service(
            MockCatalogClient::with_defaults(),
            MockUserClient::with_defaults(),
            MockCarrierGateway::with_defaults(),
        );

        let info = OrderInfoRequest {
            user_id: 7,
            address_id: 70,
        };

        let result = service.validate_order_info(&info).await.unwrap();
        let Validated::Valid(buyer) = result else {
            panic!("expected a valid buyer");
        };
        assert_eq!(buyer.to_province_id, 202);
        assert_eq!(buyer.to_district_id, 1442);
        assert_eq!(buyer.to_ward_code, "21211");
    }

    #[tokio::test]
    async fn unresolvable_district_aborts_before_ward_lookup() {
        let mut carrier = MockCarrierGateway::with_defaults();
        carrier.district_id = None;

        let service = service(
            MockCatalogClient::with_defaults(),
            MockUserClient::with_defaults(),
            carrier,
        );

        let info = OrderInfoRequest {
            user_id: 7,
            address_id: 70,
        };

        let result = service.validate_order_info(&info).await.unwrap();
        let Validated::Invalid(issues) = result else {
            panic!("expected issues");
        };
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].reason, IssueReason::DistrictNotResolved);
    }

    #[tokio::test]
    async fn foreign_address_is_not_owned() {
        let service = service(
            MockCatalogClient::with_defaults(),
            MockUserClient::with_defaults(),
            MockCarrierGateway::with_defaults(),
        );

        let info = OrderInfoRequest {
            user_id: 7,
            address_id: 9999,
        };

        let result = service.validate_order_info(&info).await.unwrap();
        let Validated::Invalid(issues) = result else {
            panic!("expected issues");
        };
        assert_eq!(issues[0].reason, IssueReason::AddressNotOwned);
    }
}
