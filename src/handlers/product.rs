// src/handlers/product.rs
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use http::StatusCode;
use tracing::instrument;

use super::decode;
use crate::dtos::product::{NewProduct, ProductResponse};
use crate::dtos::sale::{NewSale, SaleResponse};
use crate::error::{AppError, Context};
use crate::state::AppState;
use crate::store::parse_id;

// POST /v1/products - Create new product
#[instrument(skip(state, payload))]
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<NewProduct>, JsonRejection>,
) -> Result<(StatusCode, Json<ProductResponse>), AppError> {
    let new = decode(payload, "decoding new product")?;

    let product = state.store.create(&new).await.context("creating new product")?;

    Ok((StatusCode::CREATED, Json(product.into())))
}

// GET /v1/products - List all products
#[instrument(skip(state))]
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let products = state.store.list().await.context("getting product list")?;

    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}

// GET /v1/products/{id} - Get single product
#[instrument(skip(state))]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProductResponse>, AppError> {
    let context = || format!("getting product {id:?}");

    let product_id = parse_id(&id).with_context(context)?;
    let product = state.store.get(product_id).await.with_context(context)?;

    Ok(Json(product.into()))
}

// POST /v1/products/{id}/sales - Record a sale; the path id wins over the body
#[instrument(skip(state, payload))]
pub async fn add_sale(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<NewSale>, JsonRejection>,
) -> Result<(StatusCode, Json<SaleResponse>), AppError> {
    let new = decode(payload, "decoding new sale")?;

    let product_id = parse_id(&id).context("adding new sale")?;
    let sale = state
        .store
        .add_sale(product_id, &new)
        .await
        .context("adding new sale")?;

    Ok((StatusCode::CREATED, Json(sale.into())))
}

// GET /v1/products/{id}/sales - Sales for one product
#[instrument(skip(state))]
pub async fn list_sales(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<SaleResponse>>, AppError> {
    let product_id = parse_id(&id).context("getting sales list")?;
    let sales = state
        .store
        .list_sales(product_id)
        .await
        .context("getting sales list")?;

    Ok(Json(sales.into_iter().map(SaleResponse::from).collect()))
}
