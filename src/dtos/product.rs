// src/dtos/product.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::product::Product;
use crate::validation::{Checker, FieldError, Validate};

#[derive(Debug, Clone, Deserialize)]
pub struct NewProduct {
    #[serde(default)]
    pub name: String,
    pub cost: i32,
    pub quantity: i32,
}

impl Validate for NewProduct {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        Checker::new()
            .required("name", &self.name)
            .at_least("cost", self.cost, 0)
            .at_least("quantity", self.quantity, 1)
            .finish()
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    pub cost: i32,
    pub quantity: i32,
    pub sold: i64,
    pub revenue: i64,
    pub date_created: DateTime<Utc>,
    pub date_updated: DateTime<Utc>,
}

// Convert from Model to Response DTO
impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            cost: product.cost,
            quantity: product.quantity,
            sold: product.sold,
            revenue: product.revenue,
            date_created: product.date_created,
            date_updated: product.date_updated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_name_and_empty_stock() {
        let product = NewProduct { name: String::new(), cost: 10, quantity: 0 };
        let fields: Vec<_> = product.validate().unwrap_err().into_iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "quantity"]);
    }

    #[test]
    fn accepts_free_products() {
        let product = NewProduct { name: "widget".into(), cost: 0, quantity: 5 };
        assert!(product.validate().is_ok());
    }
}
