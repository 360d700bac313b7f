// src/dtos/sale.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::sale::Sale;
use crate::validation::{Checker, FieldError, Validate};

/// Body of `POST /v1/products/{id}/sales`. The product reference always
/// comes from the path, so any `product_id` in the body is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct NewSale {
    pub quantity: i32,
    #[serde(default)]
    pub paid: i32,
}

impl Validate for NewSale {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        Checker::new()
            .at_least("quantity", self.quantity, 1)
            .at_least("paid", self.paid, 0)
            .finish()
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SaleResponse {
    pub id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    pub paid: i32,
    pub date_created: DateTime<Utc>,
}

impl From<Sale> for SaleResponse {
    fn from(sale: Sale) -> Self {
        Self {
            id: sale.id,
            product_id: sale.product_id,
            quantity: sale.quantity,
            paid: sale.paid,
            date_created: sale.date_created,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paid_defaults_to_zero() {
        let sale: NewSale = serde_json::from_str(r#"{"quantity":2}"#).unwrap();
        assert_eq!(sale.paid, 0);
        assert!(sale.validate().is_ok());
    }

    #[test]
    fn body_product_id_is_ignored() {
        let sale: NewSale =
            serde_json::from_str(r#"{"quantity":1,"paid":5,"product_id":"not-a-uuid"}"#).unwrap();
        assert_eq!(sale.quantity, 1);
        assert_eq!(sale.paid, 5);
    }

    #[test]
    fn rejects_negative_payment() {
        let sale = NewSale { quantity: 1, paid: -3 };
        let errors = sale.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "paid");
    }
}
