use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical order/sub-order status. Wire strings exist only at the proto
/// boundary; everything inside the service speaks this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "order_status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Canceled,
    Returned,
    Failed,
    Paid,
}

impl OrderStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "PENDING" => Some(OrderStatus::Pending),
            "PROCESSING" => Some(OrderStatus::Processing),
            "SHIPPED" => Some(OrderStatus::Shipped),
            "DELIVERED" => Some(OrderStatus::Delivered),
            "CANCELED" => Some(OrderStatus::Canceled),
            "RETURNED" => Some(OrderStatus::Returned),
            "FAILED" => Some(OrderStatus::Failed),
            "PAID" => Some(OrderStatus::Paid),
            _ => None,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Processing => "PROCESSING",
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Canceled => "CANCELED",
            OrderStatus::Returned => "RETURNED",
            OrderStatus::Failed => "FAILED",
            OrderStatus::Paid => "PAID",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "payment_method", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Cod,
    Payos,
}

impl PaymentMethod {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "COD" => Some(PaymentMethod::Cod),
            "PAYOS" => Some(PaymentMethod::Payos),
            _ => None,
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMethod::Cod => f.write_str("COD"),
            PaymentMethod::Payos => f.write_str("PAYOS"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "payment_status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
    Canceled,
    Processing,
}

impl PaymentStatus {
    /// Gateway status strings map onto the canonical enum; anything
    /// unrecognized falls back to PENDING.
    pub fn from_gateway(value: &str) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            "COMPLETED" | "PAID" => PaymentStatus::Completed,
            "FAILED" | "EXPIRED" => PaymentStatus::Failed,
            "CANCELED" | "CANCELLED" => PaymentStatus::Canceled,
            "PROCESSING" => PaymentStatus::Processing,
            _ => PaymentStatus::Pending,
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PaymentStatus::Pending => "PENDING",
            PaymentStatus::Completed => "COMPLETED",
            PaymentStatus::Failed => "FAILED",
            PaymentStatus::Canceled => "CANCELED",
            PaymentStatus::Processing => "PROCESSING",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "delivery_status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryStatus {
    Pending,
    Processing,
    Delivering,
    Delivered,
    Canceled,
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DeliveryStatus::Pending => "PENDING",
            DeliveryStatus::Processing => "PROCESSING",
            DeliveryStatus::Delivering => "DELIVERING",
            DeliveryStatus::Delivered => "DELIVERED",
            DeliveryStatus::Canceled => "CANCELED",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_method_parse_is_case_insensitive() {
        assert_eq!(PaymentMethod::parse("cod"), Some(PaymentMethod::Cod));
        assert_eq!(PaymentMethod::parse(" PAYOS "), Some(PaymentMethod::Payos));
        assert_eq!(PaymentMethod::parse("STRIPE"), None);
    }

    #[test]
    fn gateway_status_defaults_to_pending() {
        assert_eq!(PaymentStatus::from_gateway("PAID"), PaymentStatus::Completed);
        assert_eq!(PaymentStatus::from_gateway("CANCELLED"), PaymentStatus::Canceled);
        assert_eq!(PaymentStatus::from_gateway("??"), PaymentStatus::Pending);
        assert_eq!(PaymentStatus::from_gateway(""), PaymentStatus::Pending);
    }

    #[test]
    fn order_status_round_trips_through_display() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Shipped,
            OrderStatus::Paid,
        ] {
            assert_eq!(OrderStatus::parse(&status.to_string()), Some(status));
        }
    }
}
