use axum::{routing::get, Router};

use crate::handlers::product::{add_sale, create_product, get_product, list_products, list_sales};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/products", get(list_products).post(create_product))
        .route("/v1/products/{id}", get(get_product))
        .route("/v1/products/{id}/sales", get(list_sales).post(add_sale))
}
