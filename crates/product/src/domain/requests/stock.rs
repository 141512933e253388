use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockOperation {
    Increase,
    Decrease,
}

impl StockOperation {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "INCREASE" => Some(StockOperation::Increase),
            "DECREASE" => Some(StockOperation::Decrease),
            _ => None,
        }
    }
}

impl fmt::Display for StockOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockOperation::Increase => f.write_str("INCREASE"),
            StockOperation::Decrease => f.write_str("DECREASE"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct StockAdjustmentRequest {
    #[validate(range(min = 1))]
    #[serde(rename = "product_id")]
    pub product_id: i32,

    pub operation: StockOperation,

    #[validate(range(min = 1))]
    #[serde(rename = "request_quantity")]
    pub request_quantity: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_operations_case_insensitively() {
        assert_eq!(
            StockOperation::parse("decrease"),
            Some(StockOperation::Decrease)
        );
        assert_eq!(
            StockOperation::parse(" INCREASE "),
            Some(StockOperation::Increase)
        );
        assert_eq!(StockOperation::parse("UPSERT"), None);
    }
}
