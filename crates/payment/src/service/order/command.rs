use crate::{
    abstract_trait::{
        carrier::DynCarrierGateway,
        grpc_client::DynCatalogGrpcClient,
        order::{
            delivery::DynDeliveryCommandRepository,
            order_detail::DynOrderDetailCommandRepository,
            repository::{DynOrderCommandRepository, DynOrderQueryRepository},
            service::{DynOrderValidationService, OrderCommandServiceTrait},
        },
        payment::{DynPaymentCommandRepository, DynPaymentMethodStrategy},
        sub_order::DynSubOrderCommandRepository,
    },
    carrier::{CarrierItem, CreateShipmentRequest, ShipmentResult, classify_service_type},
    domain::{
        catalog::{StockAdjustment, StockOperation},
        issue::{Issue, IssueReason},
        requests::order::{
            CreateDeliveryRecordRequest, CreateOrderDetailRecordRequest, CreateOrderRecordRequest,
            CreateOrderRequest, CreateSubOrderRecordRequest,
        },
        response::order::OrderResponse,
        validated::{ShippingFeeDetails, Validated, ValidatedOrderInfo},
    },
    model::{
        order::{OrderGraph, SubOrderGraph},
        status::PaymentMethod,
    },
};
use async_trait::async_trait;
use opentelemetry::{
    Context, KeyValue,
    global::{self, BoxedTracer},
    trace::{Span, SpanKind, TraceContextExt, Tracer},
};
use prometheus_client::registry::Registry;
use shared::{
    config::ConnectionPool,
    errors::{RepositoryError, ServiceError},
    utils::{Method, Metrics, Status as StatusUtils, TracingContext},
};
use sqlx::{Postgres, Transaction};
use std::fmt;
use tokio::time::Instant;
use tracing::{error, info, warn};
use uuid::Uuid;

/// Phases of one checkout. Reservation strictly precedes carrier booking,
/// which strictly precedes persistence: compensation only exists after the
/// stock debit, and a booking failure must never leave stock decremented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OrderPhase {
    Validating,
    Reserving,
    CarrierBooking,
    Persisting,
    Committed,
}

impl fmt::Display for OrderPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OrderPhase::Validating => "VALIDATING",
            OrderPhase::Reserving => "RESERVING",
            OrderPhase::CarrierBooking => "CARRIER_BOOKING",
            OrderPhase::Persisting => "PERSISTING",
            OrderPhase::Committed => "COMMITTED",
        };
        f.write_str(s)
    }
}

#[derive(Clone)]
pub struct OrderCommandService {
    validator: DynOrderValidationService,
    catalog: DynCatalogGrpcClient,
    carrier: DynCarrierGateway,
    cod_strategy: DynPaymentMethodStrategy,
    payos_strategy: DynPaymentMethodStrategy,
    order_command: DynOrderCommandRepository,
    order_query: DynOrderQueryRepository,
    sub_order_command: DynSubOrderCommandRepository,
    order_detail_command: DynOrderDetailCommandRepository,
    delivery_command: DynDeliveryCommandRepository,
    payment_command: DynPaymentCommandRepository,
    pool: ConnectionPool,
    metrics: Metrics,
}

pub struct OrderCommandServiceDeps {
    pub validator: DynOrderValidationService,
    pub catalog: DynCatalogGrpcClient,
    pub carrier: DynCarrierGateway,
    pub cod_strategy: DynPaymentMethodStrategy,
    pub payos_strategy: DynPaymentMethodStrategy,
    pub order_command: DynOrderCommandRepository,
    pub order_query: DynOrderQueryRepository,
    pub sub_order_command: DynSubOrderCommandRepository,
    pub order_detail_command: DynOrderDetailCommandRepository,
    pub delivery_command: DynDeliveryCommandRepository,
    pub payment_command: DynPaymentCommandRepository,
    pub pool: ConnectionPool,
}

impl OrderCommandService {
    pub fn new(deps: OrderCommandServiceDeps, registry: &mut Registry) -> Self {
        let OrderCommandServiceDeps {
            validator,
            catalog,
            carrier,
            cod_strategy,
            payos_strategy,
            order_command,
            order_query,
            sub_order_command,
            order_detail_command,
            delivery_command,
            payment_command,
            pool,
        } = deps;

        let metrics = Metrics::new();
        metrics.register(registry, "order_command_service");

        Self {
            validator,
            catalog,
            carrier,
            cod_strategy,
            payos_strategy,
            order_command,
            order_query,
            sub_order_command,
            order_detail_command,
            delivery_command,
            payment_command,
            pool,
            metrics,
        }
    }

    fn get_tracer(&self) -> BoxedTracer {
        global::tracer("order-command-service")
    }

    fn start_tracing(&self, operation_name: &str, attributes: Vec<KeyValue>) -> TracingContext {
        let start_time = Instant::now();
        let tracer = self.get_tracer();
        let mut span = tracer
            .span_builder(operation_name.to_string())
            .with_kind(SpanKind::Server)
            .with_attributes(attributes)
            .start(&tracer);

        info!("Starting operation: {operation_name}");

        span.add_event(
            "Operation started",
            vec![KeyValue::new("operation", operation_name.to_string())],
        );

        let cx = Context::current_with_span(span);
        TracingContext { cx, start_time }
    }

    fn complete_tracing(
        &self,
        tracing_ctx: &TracingContext,
        method: Method,
        is_success: bool,
        message: &str,
    ) {
        let status = if is_success {
            StatusUtils::Success
        } else {
            StatusUtils::Error
        };
        let elapsed = tracing_ctx.start_time.elapsed().as_secs_f64();

        tracing_ctx.cx.span().add_event(
            "Operation completed",
            vec![
                KeyValue::new("status", if is_success { "SUCCESS" } else { "ERROR" }),
                KeyValue::new("duration_secs", elapsed.to_string()),
                KeyValue::new("message", message.to_string()),
            ],
        );

        if is_success {
            info!("✅ Operation completed successfully: {message}");
        } else {
            error!("❌ Operation failed: {message}");
        }

        self.metrics.record(method, status, elapsed);

        tracing_ctx.cx.span().end();
    }

    /// Books one carrier shipment per validated sub-order, concurrently. On
    /// any failure, returns the codes that DID get booked so the caller can
    /// cancel them.
    async fn book_shipments(
        &self,
        validated: &[ShippingFeeDetails],
        buyer: &ValidatedOrderInfo,
        method: PaymentMethod,
    ) -> Result<Vec<ShipmentResult>, (ServiceError, Vec<String>)> {
        let bookings = validated.iter().map(|details| {
            let request = build_shipment_request(details, buyer, method);
            async move { self.carrier.create_shipment(&request).await }
        });

        let results = futures::future::join_all(bookings).await;

        let mut shipments = Vec::with_capacity(results.len());
        let mut first_error = None;

        for result in results {
            match result {
                Ok(shipment) => shipments.push(shipment),
                Err(err) => {
                    error!("❌ Carrier booking failed: {err}");
                    if first_error.is_none() {
                        first_error = Some(err);
                    }
                }
            }
        }

        match first_error {
            None => Ok(shipments),
            Some(err) => {
                let booked = shipments.into_iter().map(|s| s.order_code).collect();
                Err((ServiceError::from(err), booked))
            }
        }
    }

    /// Best-effort cancellation of shipments booked for an order that will
    /// never exist.
    async fn cancel_bookings(&self, codes: &[String]) {
        if codes.is_empty() {
            return;
        }

        if let Err(err) = self.carrier.cancel_shipments(codes).await {
            error!(
                "⚠️ Failed to cancel {} carrier shipment(s) {:?}: {err}",
                codes.len(),
                codes
            );
        }
    }

    /// Best-effort inventory restoration after a failure that follows the
    /// stock debit. A failure here is only logged and leaves a permanent
    /// stock discrepancy.
    async fn compensate(&self, adjustments: &[StockAdjustment]) {
        let credits: Vec<StockAdjustment> =
            adjustments.iter().map(StockAdjustment::inverse).collect();

        match self.catalog.update_quantities(&credits).await {
            Ok(outcome) if outcome.success => {
                info!("↩️ Inventory restored for {} item(s)", credits.len());
            }
            Ok(outcome) => {
                error!(
                    "⚠️ Inventory restoration rejected by catalog, stock is now inconsistent: {:?}",
                    outcome.results
                );
            }
            Err(err) => {
                error!("⚠️ Inventory restoration failed, stock is now inconsistent: {err}");
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    async fn persist_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        buyer: &ValidatedOrderInfo,
        validated: &[ShippingFeeDetails],
        shipments: &[ShipmentResult],
        method: PaymentMethod,
        total_amount: i64,
        shipping_amount: i64,
    ) -> Result<OrderGraph, ServiceError> {
        let discount_amount = 0;
        let final_amount = total_amount + shipping_amount - discount_amount;

        let order = self
            .order_command
            .create(
                tx,
                &CreateOrderRecordRequest {
                    customer_id: buyer.user_id,
                    address_id: buyer.address_id,
                    total_amount,
                    discount_amount,
                    shipping_amount,
                    final_amount,
                    currency: "VND".into(),
                },
            )
            .await
            .map_err(ServiceError::Repo)?;

        let mut sub_graphs = Vec::with_capacity(validated.len());

        for (details, shipment) in validated.iter().zip(shipments) {
            let sub_total = details.subtotal();
            let sub_shipping = shipment.total_fee;

            let sub_order = self
                .sub_order_command
                .create(
                    tx,
                    &CreateSubOrderRecordRequest {
                        order_id: order.order_id,
                        farm_id: details.farm_id,
                        total_amount: sub_total,
                        discount_amount: 0,
                        shipping_amount: sub_shipping,
                        final_amount: sub_total + sub_shipping,
                    },
                )
                .await
                .map_err(ServiceError::Repo)?;

            let detail_requests: Vec<CreateOrderDetailRecordRequest> = details
                .items
                .iter()
                .map(|item| CreateOrderDetailRecordRequest {
                    sub_order_id: sub_order.sub_order_id,
                    product_id: item.product_id,
                    product_name: item.product_name.clone(),
                    quantity: item.requested_quantity,
                    price_per_unit: item.price_per_unit,
                    unit: item.unit.clone(),
                    total_price: item.line_total(),
                })
                .collect();

            let order_details = self
                .order_detail_command
                .create_many(tx, &detail_requests)
                .await
                .map_err(ServiceError::Repo)?;

            let cod_amount = match method {
                PaymentMethod::Cod => sub_total + details.declared_shipping_fee,
                PaymentMethod::Payos => 0,
            };

            let delivery = self
                .delivery_command
                .create(
                    tx,
                    &CreateDeliveryRecordRequest {
                        sub_order_id: sub_order.sub_order_id,
                        cod_amount,
                        shipping_amount: sub_shipping,
                        tracking_code: Some(shipment.order_code.clone()),
                        addressee_name: buyer.addressee_name.clone(),
                        addressee_phone: buyer.addressee_phone.clone(),
                        address: buyer.full_address(),
                        delivery_method: "GHN".into(),
                    },
                )
                .await
                .map_err(ServiceError::Repo)?;

            sub_graphs.push(SubOrderGraph {
                sub_order,
                delivery: Some(delivery),
                order_details,
            });
        }

        let strategy = match method {
            PaymentMethod::Cod => &self.cod_strategy,
            PaymentMethod::Payos => &self.payos_strategy,
        };

        let payment_request = strategy.build_payment(order.order_id, final_amount).await?;

        let payment = self
            .payment_command
            .create(tx, &payment_request)
            .await
            .map_err(ServiceError::Repo)?;

        Ok(OrderGraph {
            order,
            payment: Some(payment),
            sub_orders: sub_graphs,
        })
    }
}

/// One carrier shipment-creation request per sub-order, using the same
/// weight-class rule as fee quoting. For COD the carrier collects the goods
/// value plus the farm's declared fee; a gateway-paid order ships with zero
/// collection.
fn build_shipment_request(
    details: &ShippingFeeDetails,
    buyer: &ValidatedOrderInfo,
    method: PaymentMethod,
) -> CreateShipmentRequest {
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

    let cod_amount = match method {
        PaymentMethod::Cod => details.subtotal() + details.declared_shipping_fee,
        PaymentMethod::Payos => 0,
    };

    CreateShipmentRequest {
        // 2: the receiver pays the shipping fee on delivery.
        payment_type_id: 2,
        required_note: "CHOXEMHANGKHONGTHU".into(),
        from_name: details.farm_name.clone(),
        from_phone: details.from_phone.clone(),
        from_address: details.from_address.clone(),
        from_ward_code: details.from_ward_code.clone(),
        from_district_id: details.from_district_id,
        to_name: buyer.addressee_name.clone(),
        to_phone: buyer.addressee_phone.clone(),
        to_address: buyer.full_address(),
        to_ward_code: buyer.to_ward_code.clone(),
        to_district_id: buyer.to_district_id,
        cod_amount,
        content: format!("Đơn hàng từ {}", details.farm_name),
        length: 0,
        width: 0,
        height: 0,
        weight: total_weight.min(i64::from(i32::MAX)) as i32,
        service_type_id: service_type.id(),
        items,
    }
}

#[async_trait]
impl OrderCommandServiceTrait for OrderCommandService {
    async fn create_order(
        &self,
        req: &CreateOrderRequest,
    ) -> Result<Validated<OrderResponse>, ServiceError> {
        let method = Method::Post;
        let request_id = Uuid::new_v4();

        info!(
            "🏗️ [{request_id}] Creating order for user {} ({} sub-order(s))",
            req.order_info.user_id,
            req.suborders.len()
        );

        let tracing_ctx = self.start_tracing(
            "create_order",
            vec![
                KeyValue::new("component", "order"),
                KeyValue::new("operation", "create"),
                KeyValue::new("order.request_id", request_id.to_string()),
                KeyValue::new("order.user_id", req.order_info.user_id.to_string()),
            ],
        );

        if req.suborders.is_empty() {
            self.complete_tracing(&tracing_ctx, method, false, "Empty cart");
            return Err(ServiceError::Validation(vec!["Cart cannot be empty".into()]));
        }

        // VALIDATING: buyer and every farm portion are checked jointly; no
        // side effects exist yet, so any issue simply rejects the request.
        info!("🧾 [{request_id}] phase {}", OrderPhase::Validating);

        let (buyer_result, cart_results) = futures::future::join(
            self.validator.validate_order_info(&req.order_info),
            futures::future::join_all(
                req.suborders
                    .iter()
                    .map(|cart| self.validator.validate_sub_order(cart)),
            ),
        )
        .await;

        let mut issues = Vec::new();
        let buyer = buyer_result?.collect_into(&mut issues);

        let mut validated = Vec::with_capacity(req.suborders.len());
        for result in cart_results {
            if let Some(details) = result?.collect_into(&mut issues) {
                validated.push(details);
            }
        }

        if !issues.is_empty() {
            self.complete_tracing(&tracing_ctx, method, false, "Order rejected by validation");
            return Ok(Validated::Invalid(issues));
        }

        let buyer = buyer.ok_or_else(|| {
            ServiceError::Internal("buyer validation yielded neither issues nor a payload".into())
        })?;

        let Some(payment_method) = PaymentMethod::parse(&req.payment_type) else {
            self.complete_tracing(&tracing_ctx, method, false, "Unsupported payment type");
            return Ok(Validated::Invalid(vec![
                Issue::new(
                    IssueReason::PaymentUnsupported,
                    format!("Unsupported payment type: {}", req.payment_type),
                )
                .with_user(buyer.user_id),
            ]));
        };

        // RESERVING: debit stock before anything else has side effects. A
        // rejected batch means a stock conflict, nothing to compensate.
        info!("🧾 [{request_id}] phase {}", OrderPhase::Reserving);

        let adjustments: Vec<StockAdjustment> = validated
            .iter()
            .flat_map(|details| {
                details.items.iter().map(|item| StockAdjustment {
                    product_id: item.product_id,
                    operation: StockOperation::Decrease,
                    request_quantity: item.requested_quantity,
                })
            })
            .collect();

        let reservation = self.catalog.update_quantities(&adjustments).await?;

        if !reservation.success {
            self.complete_tracing(&tracing_ctx, method, false, "Stock reservation rejected");
            let issues = reservation
                .results
                .into_iter()
                .filter(|r| !r.success)
                .map(|r| {
                    Issue::new(IssueReason::InsufficientStock, r.message).with_product(r.product_id)
                })
                .collect();
            return Ok(Validated::Invalid(issues));
        }

        // CARRIER_BOOKING: stock is debited now, so every exit below here
        // must restore it.
        info!("🧾 [{request_id}] phase {}", OrderPhase::CarrierBooking);

        let shipments = match self
            .book_shipments(&validated, &buyer, payment_method)
            .await
        {
            Ok(shipments) => shipments,
            Err((err, booked)) => {
                self.cancel_bookings(&booked).await;
                self.compensate(&adjustments).await;
                self.complete_tracing(&tracing_ctx, method, false, "Carrier booking failed");
                return Err(err);
            }
        };

        let booked_codes: Vec<String> =
            shipments.iter().map(|s| s.order_code.clone()).collect();

        let total_amount: i64 = validated.iter().map(ShippingFeeDetails::subtotal).sum();
        let shipping_amount: i64 = shipments.iter().map(|s| s.total_fee).sum();

        // PERSISTING: one transaction for order, sub-orders, details,
        // deliveries and the payment row.
        info!("🧾 [{request_id}] phase {}", OrderPhase::Persisting);

        let mut tx = match self.pool.begin().await {
            Ok(tx) => tx,
            Err(err) => {
                self.cancel_bookings(&booked_codes).await;
                self.compensate(&adjustments).await;
                self.complete_tracing(&tracing_ctx, method, false, "Failed to open transaction");
                return Err(ServiceError::Repo(RepositoryError::from(err)));
            }
        };

        let graph = match self
            .persist_order(
                &mut tx,
                &buyer,
                &validated,
                &shipments,
                payment_method,
                total_amount,
                shipping_amount,
            )
            .await
        {
            Ok(graph) => graph,
            Err(err) => {
                if let Err(rollback_err) = tx.rollback().await {
                    error!("⚠️ Rollback failed: {rollback_err}");
                }
                self.cancel_bookings(&booked_codes).await;
                self.compensate(&adjustments).await;
                self.complete_tracing(&tracing_ctx, method, false, "Order persistence failed");
                return Err(err);
            }
        };

        if let Err(err) = tx.commit().await {
            self.cancel_bookings(&booked_codes).await;
            self.compensate(&adjustments).await;
            self.complete_tracing(&tracing_ctx, method, false, "Commit failed");
            return Err(ServiceError::Repo(RepositoryError::from(err)));
        }

        // COMMITTED: answer from a fresh read; fall back to the in-memory
        // graph if the re-query comes up empty.
        info!(
            "🧾 [{request_id}] phase {}, order ID {}",
            OrderPhase::Committed,
            graph.order.order_id
        );

        let response = match self.order_query.find_with_relations(graph.order.order_id).await {
            Ok(Some(fresh)) => OrderResponse::from(fresh),
            Ok(None) => {
                warn!(
                    "⚠️ Re-query of order {} returned nothing, composing response in memory",
                    graph.order.order_id
                );
                OrderResponse::from(graph)
            }
            Err(err) => {
                warn!(
                    "⚠️ Re-query of order {} failed ({err}), composing response in memory",
                    graph.order.order_id
                );
                OrderResponse::from(graph)
            }
        };

        self.complete_tracing(&tracing_ctx, method, true, "Order created");

        Ok(Validated::Valid(response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::requests::order::{CartItem, CartSubOrder, OrderInfoRequest};
    use crate::service::payment::{CodPaymentStrategy, PayosPaymentStrategy};
    use crate::service::testing::{
        MockCarrierGateway, MockCatalogClient, MockPaymentGateway, MockUserClient,
        NoopDeliveryCommandRepo, NoopOrderCommandRepo, NoopOrderDetailCommandRepo,
        NoopOrderQueryRepo, NoopPaymentCommandRepo, NoopSubOrderCommandRepo, lazy_test_pool,
    };
    use crate::service::validation::OrderValidationService;
    use std::sync::Arc;

    struct Fixture {
        catalog: Arc<MockCatalogClient>,
        carrier: Arc<MockCarrierGateway>,
        service: OrderCommandService,
    }

    fn fixture(catalog: MockCatalogClient, carrier: MockCarrierGateway) -> Fixture {
        let catalog = Arc::new(catalog);
        let carrier = Arc::new(carrier);
        let user = Arc::new(MockUserClient::with_defaults());

        let validator = Arc::new(OrderValidationService::new(
            catalog.clone(),
            user,
            carrier.clone(),
        ));

        let deps = OrderCommandServiceDeps {
            validator,
            catalog: catalog.clone(),
            carrier: carrier.clone(),
            cod_strategy: Arc::new(CodPaymentStrategy::new()),
            payos_strategy: Arc::new(PayosPaymentStrategy::new(Arc::new(MockPaymentGateway {
                fail: false,
            }))),
            order_command: Arc::new(NoopOrderCommandRepo),
            order_query: Arc::new(NoopOrderQueryRepo),
            sub_order_command: Arc::new(NoopSubOrderCommandRepo),
            order_detail_command: Arc::new(NoopOrderDetailCommandRepo),
            delivery_command: Arc::new(NoopDeliveryCommandRepo),
            payment_command: Arc::new(NoopPaymentCommandRepo),
            pool: lazy_test_pool(),
        };

        let mut registry = prometheus_client::registry::Registry::default();
        let service = OrderCommandService::new(deps, &mut registry);

        Fixture {
            catalog,
            carrier,
            service,
        }
    }

    fn request(farm_ids: &[i32], payment_type: &str) -> CreateOrderRequest {
        CreateOrderRequest {
            suborders: farm_ids
                .iter()
                .map(|&farm_id| CartSubOrder {
                    farm_id,
                    items: vec![CartItem {
                        product_id: 10,
                        quantity: 2,
                    }],
                })
                .collect(),
            order_info: OrderInfoRequest {
                user_id: 7,
                address_id: 70,
            },
            payment_type: payment_type.into(),
        }
    }

    #[tokio::test]
    async fn validation_issues_reject_without_any_side_effect() {
        // Farm 2 does not exist in the mock catalog.
        let f = fixture(
            MockCatalogClient::with_defaults(),
            MockCarrierGateway::with_defaults(),
        );

        let result = f.service.create_order(&request(&[2], "COD")).await.unwrap();

        let Validated::Invalid(issues) = result else {
            panic!("expected rejection");
        };
        assert!(issues.iter().any(|i| i.reason == IssueReason::FarmNotFound));
        // Nothing was reserved, nothing was booked.
        assert!(f.catalog.recorded().is_empty());
        assert_eq!(f.carrier.created(), 0);
    }

    #[tokio::test]
    async fn unsupported_payment_type_rejects_before_reservation() {
        let f = fixture(
            MockCatalogClient::with_defaults(),
            MockCarrierGateway::with_defaults(),
        );

        let result = f.service.create_order(&request(&[1], "MOMO")).await.unwrap();

        let Validated::Invalid(issues) = result else {
            panic!("expected rejection");
        };
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].reason, IssueReason::PaymentUnsupported);
        assert!(f.catalog.recorded().is_empty());
    }

    #[tokio::test]
    async fn stock_conflict_rejects_with_no_compensation_and_no_booking() {
        let mut catalog = MockCatalogClient::with_defaults();
        catalog.reject_reservation = true;

        let f = fixture(catalog, MockCarrierGateway::with_defaults());

        let result = f.service.create_order(&request(&[1], "COD")).await.unwrap();

        let Validated::Invalid(issues) = result else {
            panic!("expected rejection");
        };
        assert!(issues.iter().all(|i| i.reason == IssueReason::InsufficientStock));

        // Exactly one batch was sent (the failed DECREASE); no INCREASE
        // followed because nothing was applied.
        let recorded = f.catalog.recorded();
        assert_eq!(recorded.len(), 1);
        assert!(recorded[0]
            .iter()
            .all(|a| a.operation == StockOperation::Decrease));
        assert_eq!(f.carrier.created(), 0);
    }

    #[tokio::test]
    async fn carrier_booking_failure_restores_stock_and_cancels_bookings() {
        let mut carrier = MockCarrierGateway::with_defaults();
        // First booking succeeds, second fails.
        carrier.fail_shipments_from = Some(1);

        let f = fixture(MockCatalogClient::with_defaults(), carrier);

        let err = f
            .service
            .create_order(&request(&[1, 1], "COD"))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Upstream(_)));

        // The DECREASE batch, then the compensating INCREASE of the same
        // quantities.
        let recorded = f.catalog.recorded();
        assert_eq!(recorded.len(), 2);
        assert!(recorded[0]
            .iter()
            .all(|a| a.operation == StockOperation::Decrease));
        assert!(recorded[1]
            .iter()
            .all(|a| a.operation == StockOperation::Increase));
        assert_eq!(recorded[0].len(), recorded[1].len());
        assert!(
            recorded[0]
                .iter()
                .zip(recorded[1].iter())
                .all(|(d, c)| d.product_id == c.product_id
                    && d.request_quantity == c.request_quantity)
        );

        // The shipment that did get booked was cancelled.
        assert_eq!(f.carrier.canceled(), vec!["GHN0".to_string()]);
    }

    #[tokio::test]
    async fn cod_shipments_collect_goods_value_plus_declared_fee() {
        let f = fixture(
            MockCatalogClient::with_defaults(),
            MockCarrierGateway::with_defaults(),
        );

        // Persistence fails against the lazy pool, but the bookings have
        // already been made by then.
        let _ = f.service.create_order(&request(&[1], "COD")).await;

        let shipments = f.carrier.created_shipments.lock().expect("mutex poisoned");
        assert_eq!(shipments.len(), 1);
        // 2 x 50 000 goods + 5 000 declared farm fee.
        assert_eq!(shipments[0].cod_amount, 105_000);
        assert_eq!(shipments[0].service_type_id, 2);
    }
}
