// src/store/postgres.rs
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Error as SqlxError, PgPool};
use tracing::instrument;
use uuid::Uuid;

use super::{ProductStore, StoreError};
use crate::dtos::product::NewProduct;
use crate::dtos::sale::NewSale;
use crate::models::product::Product;
use crate::models::sale::Sale;

const FOREIGN_KEY_VIOLATION: &str = "23503";

const PRODUCT_COLUMNS: &str = "p.product_id AS id, p.name, p.cost, p.quantity,
        COALESCE(SUM(s.quantity), 0)::BIGINT AS sold,
        COALESCE(SUM(s.paid), 0)::BIGINT     AS revenue,
        p.date_created, p.date_updated";

fn map_foreign_key_violation(err: SqlxError, product_id: Uuid) -> StoreError {
    match err {
        SqlxError::Database(db_err) if db_err.code().as_deref() == Some(FOREIGN_KEY_VIOLATION) => {
            StoreError::ProductMissing(product_id)
        }
        other => other.into(),
    }
}

#[derive(Debug, Clone)]
pub struct PgProductStore {
    db_pool: PgPool,
}

impl PgProductStore {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    #[instrument(skip(self, new))]
    async fn create(&self, new: &NewProduct) -> Result<Product, StoreError> {
        let now = Utc::now();
        let product = sqlx::query_as::<_, Product>(
            "INSERT INTO products (product_id, name, cost, quantity, date_created, date_updated)
             VALUES ($1, $2, $3, $4, $5, $5)
             RETURNING product_id AS id, name, cost, quantity,
                       0::BIGINT AS sold, 0::BIGINT AS revenue,
                       date_created, date_updated",
        )
        .bind(Uuid::new_v4())
        .bind(&new.name)
        .bind(new.cost)
        .bind(new.quantity)
        .bind(now)
        .fetch_one(&self.db_pool)
        .await?;

        Ok(product)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        let query = format!(
            "SELECT {PRODUCT_COLUMNS}
             FROM products AS p
             LEFT JOIN sales AS s ON p.product_id = s.product_id
             GROUP BY p.product_id
             ORDER BY p.date_created, p.product_id"
        );

        let products = sqlx::query_as::<_, Product>(&query)
            .fetch_all(&self.db_pool)
            .await?;

        Ok(products)
    }

    #[instrument(skip(self))]
    async fn get(&self, id: Uuid) -> Result<Product, StoreError> {
        let query = format!(
            "SELECT {PRODUCT_COLUMNS}
             FROM products AS p
             LEFT JOIN sales AS s ON p.product_id = s.product_id
             WHERE p.product_id = $1
             GROUP BY p.product_id"
        );

        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(&self.db_pool)
            .await?
            .ok_or(StoreError::NotFound)
    }

    #[instrument(skip(self, new))]
    async fn add_sale(&self, product_id: Uuid, new: &NewSale) -> Result<Sale, StoreError> {
        sqlx::query_as::<_, Sale>(
            "INSERT INTO sales (sale_id, product_id, quantity, paid, date_created)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING sale_id AS id, product_id, quantity, paid, date_created",
        )
        .bind(Uuid::new_v4())
        .bind(product_id)
        .bind(new.quantity)
        .bind(new.paid)
        .bind(Utc::now())
        .fetch_one(&self.db_pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, product_id))
    }

    #[instrument(skip(self))]
    async fn list_sales(&self, product_id: Uuid) -> Result<Vec<Sale>, StoreError> {
        let mut tx = self.db_pool.begin().await?;

        sqlx::query_scalar::<_, Uuid>("SELECT product_id FROM products WHERE product_id = $1")
            .bind(product_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(StoreError::NotFound)?;

        let sales = sqlx::query_as::<_, Sale>(
            "SELECT sale_id AS id, product_id, quantity, paid, date_created
             FROM sales WHERE product_id = $1
             ORDER BY date_created, sale_id",
        )
        .bind(product_id)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(sales)
    }

    async fn status_check(&self) -> Result<(), StoreError> {
        crate::database::status_check(&self.db_pool).await?;
        Ok(())
    }
}
