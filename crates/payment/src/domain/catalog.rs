use serde::{Deserialize, Serialize};
use std::fmt;

/// Products-service data as seen from this side of the wire.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogProduct {
    pub id: i32,
    pub farm_id: i32,
    pub name: String,
    pub status: String,
    pub price_per_unit: i64,
    pub unit: String,
    pub stock_quantity: i32,
    pub weight_gram: i32,
}

impl CatalogProduct {
    pub fn is_sellable(&self) -> bool {
        matches!(self.status.as_str(), "PRE_ORDER" | "OPEN_FOR_SALE")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFarmAddress {
    pub street: String,
    pub city: String,
    pub district: String,
    pub ward: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFarm {
    pub id: i32,
    pub name: String,
    pub status: String,
    pub phone: String,
    pub address: Option<CatalogFarmAddress>,
    pub province_id: i32,
    pub district_id: i32,
    pub ward_code: String,
    pub shipping_fee: i64,
}

impl CatalogFarm {
    pub fn is_approved(&self) -> bool {
        self.status == "APPROVED"
    }

    pub fn has_complete_address(&self) -> bool {
        self.address.as_ref().is_some_and(|a| {
            !a.street.is_empty() && !a.city.is_empty() && !a.district.is_empty() && !a.ward.is_empty()
        })
    }

    pub fn has_carrier_codes(&self) -> bool {
        self.province_id > 0 && self.district_id > 0 && !self.ward_code.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockOperation {
    Increase,
    Decrease,
}

impl fmt::Display for StockOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockOperation::Increase => f.write_str("INCREASE"),
            StockOperation::Decrease => f.write_str("DECREASE"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockAdjustment {
    pub product_id: i32,
    pub operation: StockOperation,
    pub request_quantity: i32,
}

impl StockAdjustment {
    /// The compensating adjustment: same quantity, inverse operation.
    pub fn inverse(&self) -> Self {
        Self {
            product_id: self.product_id,
            operation: match self.operation {
                StockOperation::Increase => StockOperation::Decrease,
                StockOperation::Decrease => StockOperation::Increase,
            },
            request_quantity: self.request_quantity,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockItemOutcome {
    pub product_id: i32,
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockUpdateOutcome {
    pub success: bool,
    pub results: Vec<StockItemOutcome>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverse_flips_the_operation_only() {
        let debit = StockAdjustment {
            product_id: 9,
            operation: StockOperation::Decrease,
            request_quantity: 4,
        };
        let credit = debit.inverse();
        assert_eq!(credit.operation, StockOperation::Increase);
        assert_eq!(credit.product_id, 9);
        assert_eq!(credit.request_quantity, 4);
    }
}
