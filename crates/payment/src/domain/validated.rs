use crate::domain::issue::Issue;
use serde::{Deserialize, Serialize};

/// Two-armed result of a business validation: either the validated payload
/// or the full list of issues. System faults stay on the `Err` channel of
/// the surrounding `Result`; this type never carries them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Validated<T> {
    Valid(T),
    Invalid(Vec<Issue>),
}

impl<T> Validated<T> {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validated::Valid(_))
    }

    /// Moves a valid payload out, appending issues to `issues` otherwise.
    pub fn collect_into(self, issues: &mut Vec<Issue>) -> Option<T> {
        match self {
            Validated::Valid(value) => Some(value),
            Validated::Invalid(mut found) => {
                issues.append(&mut found);
                None
            }
        }
    }
}

/// One priced, stock-checked line inside a validated sub-order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatedItem {
    pub product_id: i32,
    pub product_name: String,
    pub unit: String,
    pub requested_quantity: i32,
    pub price_per_unit: i64,
    pub weight_gram: i32,
}

impl ValidatedItem {
    pub fn line_total(&self) -> i64 {
        self.price_per_unit * i64::from(self.requested_quantity)
    }

    pub fn total_weight_gram(&self) -> i64 {
        i64::from(self.weight_gram) * i64::from(self.requested_quantity)
    }
}

/// A farm's validated portion of the cart plus everything needed to quote
/// and book its shipment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingFeeDetails {
    pub farm_id: i32,
    pub farm_name: String,
    pub from_province_id: i32,
    pub from_district_id: i32,
    pub from_ward_code: String,
    pub from_address: String,
    pub from_phone: String,
    pub declared_shipping_fee: i64,
    pub items: Vec<ValidatedItem>,
}

impl ShippingFeeDetails {
    pub fn subtotal(&self) -> i64 {
        self.items.iter().map(ValidatedItem::line_total).sum()
    }

    pub fn total_weight_gram(&self) -> i64 {
        self.items.iter().map(ValidatedItem::total_weight_gram).sum()
    }
}

/// Buyer side of a validated order: the owner-checked address resolved to
/// carrier destination codes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatedOrderInfo {
    pub user_id: i32,
    pub address_id: i32,
    pub addressee_name: String,
    pub addressee_phone: String,
    pub street: String,
    pub city: String,
    pub district: String,
    pub ward: String,
    pub to_province_id: i32,
    pub to_district_id: i32,
    pub to_ward_code: String,
}

impl ValidatedOrderInfo {
    pub fn full_address(&self) -> String {
        format!("{}, {}, {}, {}", self.street, self.ward, self.district, self.city)
    }
}

/// Final quote for one sub-order: farm-declared fee plus the carrier quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingFeeQuote {
    pub farm_id: i32,
    pub declared_shipping_fee: i64,
    pub carrier_fee: i64,
    pub final_fee: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::issue::IssueReason;

    fn item(price: i64, qty: i32, weight: i32) -> ValidatedItem {
        ValidatedItem {
            product_id: 1,
            product_name: "Rau muống".into(),
            unit: "kg".into(),
            requested_quantity: qty,
            price_per_unit: price,
            weight_gram: weight,
        }
    }

    #[test]
    fn line_totals_multiply_price_and_quantity() {
        assert_eq!(item(50_000, 3, 500).line_total(), 150_000);
        assert_eq!(item(50_000, 3, 500).total_weight_gram(), 1_500);
    }

    #[test]
    fn collect_into_merges_issue_lists() {
        let mut issues = Vec::new();

        let valid: Validated<i32> = Validated::Valid(7);
        assert_eq!(valid.collect_into(&mut issues), Some(7));
        assert!(issues.is_empty());

        let invalid: Validated<i32> = Validated::Invalid(vec![
            Issue::new(IssueReason::EmptyCart, "no items"),
            Issue::new(IssueReason::FarmNotFound, "farm 3").with_farm(3),
        ]);
        assert_eq!(invalid.collect_into(&mut issues), None);
        assert_eq!(issues.len(), 2);
    }
}
