pub mod health;
pub mod product;

use axum::{extract::rejection::JsonRejection, Json};

use crate::error::AppError;
use crate::validation::Validate;

/// Unwraps a JSON body and checks its field constraints, tagging any
/// failure with `context`.
pub(crate) fn decode<T: Validate>(
    payload: Result<Json<T>, JsonRejection>,
    context: &str,
) -> Result<T, AppError> {
    let Json(value) = payload.map_err(|rejection| AppError::decode(context, rejection.body_text()))?;
    value.validate().map_err(|fields| AppError::validation(context, fields))?;
    Ok(value)
}
