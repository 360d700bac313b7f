// src/store/mod.rs
//! Data access for products and their sales.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::dtos::product::NewProduct;
use crate::dtos::sale::NewSale;
use crate::models::product::Product;
use crate::models::sale::Sale;

pub use memory::MemoryProductStore;
pub use postgres::PgProductStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("not found")]
    NotFound,

    #[error("ID is not in its proper form")]
    InvalidId,

    /// A sale referenced a product that does not exist.
    #[error("product {0} does not exist")]
    ProductMissing(Uuid),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Persistence operations the product handlers delegate to.
///
/// Implementations must be safe to share between concurrent requests.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Inserts a product, assigning its id and timestamps.
    async fn create(&self, new: &NewProduct) -> Result<Product, StoreError>;

    async fn list(&self) -> Result<Vec<Product>, StoreError>;

    async fn get(&self, id: Uuid) -> Result<Product, StoreError>;

    /// Records a sale against `product_id`, which must already exist.
    async fn add_sale(&self, product_id: Uuid, new: &NewSale) -> Result<Sale, StoreError>;

    /// Sales for one product. An existing product with no sales yields an
    /// empty list; an unknown product yields `NotFound`.
    async fn list_sales(&self, product_id: Uuid) -> Result<Vec<Sale>, StoreError>;

    async fn status_check(&self) -> Result<(), StoreError>;
}

/// Parses a product id taken from a request path.
pub fn parse_id(raw: &str) -> Result<Uuid, StoreError> {
    Uuid::parse_str(raw).map_err(|_| StoreError::InvalidId)
}
