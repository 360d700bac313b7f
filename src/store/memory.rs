// src/store/memory.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{ProductStore, StoreError};
use crate::dtos::product::NewProduct;
use crate::dtos::sale::NewSale;
use crate::models::product::Product;
use crate::models::sale::Sale;

#[derive(Debug, Clone)]
struct ProductRow {
    id: Uuid,
    name: String,
    cost: i32,
    quantity: i32,
    date_created: DateTime<Utc>,
    date_updated: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct Tables {
    products: Vec<ProductRow>,
    sales: Vec<Sale>,
}

impl Tables {
    fn find(&self, id: Uuid) -> Option<&ProductRow> {
        self.products.iter().find(|row| row.id == id)
    }

    fn with_totals(&self, row: &ProductRow) -> Product {
        let (sold, revenue) = self
            .sales
            .iter()
            .filter(|sale| sale.product_id == row.id)
            .fold((0i64, 0i64), |(sold, revenue), sale| {
                (sold + i64::from(sale.quantity), revenue + i64::from(sale.paid))
            });

        Product {
            id: row.id,
            name: row.name.clone(),
            cost: row.cost,
            quantity: row.quantity,
            sold,
            revenue,
            date_created: row.date_created,
            date_updated: row.date_updated,
        }
    }
}

/// Process-local store with the same semantics as the Postgres one.
/// Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryProductStore {
    tables: RwLock<Tables>,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn create(&self, new: &NewProduct) -> Result<Product, StoreError> {
        let now = Utc::now();
        let row = ProductRow {
            id: Uuid::new_v4(),
            name: new.name.clone(),
            cost: new.cost,
            quantity: new.quantity,
            date_created: now,
            date_updated: now,
        };

        let mut tables = self.tables.write().await;
        let product = tables.with_totals(&row);
        tables.products.push(row);
        Ok(product)
    }

    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.products.iter().map(|row| tables.with_totals(row)).collect())
    }

    async fn get(&self, id: Uuid) -> Result<Product, StoreError> {
        let tables = self.tables.read().await;
        tables
            .find(id)
            .map(|row| tables.with_totals(row))
            .ok_or(StoreError::NotFound)
    }

    async fn add_sale(&self, product_id: Uuid, new: &NewSale) -> Result<Sale, StoreError> {
        let mut tables = self.tables.write().await;
        if tables.find(product_id).is_none() {
            return Err(StoreError::ProductMissing(product_id));
        }

        let sale = Sale {
            id: Uuid::new_v4(),
            product_id,
            quantity: new.quantity,
            paid: new.paid,
            date_created: Utc::now(),
        };
        tables.sales.push(sale.clone());
        Ok(sale)
    }

    async fn list_sales(&self, product_id: Uuid) -> Result<Vec<Sale>, StoreError> {
        let tables = self.tables.read().await;
        if tables.find(product_id).is_none() {
            return Err(StoreError::NotFound);
        }

        Ok(tables
            .sales
            .iter()
            .filter(|sale| sale.product_id == product_id)
            .cloned()
            .collect())
    }

    async fn status_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> NewProduct {
        NewProduct { name: "widget".into(), cost: 10, quantity: 5 }
    }

    #[tokio::test]
    async fn created_product_round_trips_through_get() {
        let store = MemoryProductStore::new();
        let created = store.create(&widget()).await.unwrap();

        assert_eq!(created.name, "widget");
        assert_eq!(created.sold, 0);
        assert_eq!(store.get(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn get_unknown_product_is_not_found() {
        let store = MemoryProductStore::new();
        assert!(matches!(store.get(Uuid::new_v4()).await, Err(StoreError::NotFound)));
    }

    #[tokio::test]
    async fn sales_roll_up_into_product_totals() {
        let store = MemoryProductStore::new();
        let product = store.create(&widget()).await.unwrap();

        store.add_sale(product.id, &NewSale { quantity: 2, paid: 20 }).await.unwrap();
        store.add_sale(product.id, &NewSale { quantity: 1, paid: 7 }).await.unwrap();

        let product = store.get(product.id).await.unwrap();
        assert_eq!(product.sold, 3);
        assert_eq!(product.revenue, 27);
        assert_eq!(store.list_sales(product.id).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn sale_for_missing_product_is_rejected_and_not_stored() {
        let store = MemoryProductStore::new();
        let missing = Uuid::new_v4();

        let err = store.add_sale(missing, &NewSale { quantity: 1, paid: 0 }).await.unwrap_err();
        assert!(matches!(err, StoreError::ProductMissing(id) if id == missing));
        assert!(store.tables.read().await.sales.is_empty());
    }

    #[tokio::test]
    async fn list_sales_of_unknown_product_is_not_found() {
        let store = MemoryProductStore::new();
        assert!(matches!(store.list_sales(Uuid::new_v4()).await, Err(StoreError::NotFound)));
    }
}
