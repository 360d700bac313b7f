// src/error.rs
use axum::{
    response::{IntoResponse, Response},
    Json,
};
use http::StatusCode;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use crate::store::StoreError;
use crate::validation::FieldError;

/// Classification the response translator branches on. It survives any
/// amount of context wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Validation,
    /// A request referenced a record that does not exist.
    Referential,
    Internal,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{context}: {source}")]
    Store {
        context: String,
        #[source]
        source: StoreError,
    },

    #[error("{context}: {message}")]
    Decode { context: String, message: String },

    #[error("{context}: field validation error")]
    Validation {
        context: String,
        fields: Vec<FieldError>,
    },
}

impl AppError {
    pub fn decode(context: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Decode { context: context.into(), message: message.into() }
    }

    pub fn validation(context: impl Into<String>, fields: Vec<FieldError>) -> Self {
        AppError::Validation { context: context.into(), fields }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Store { source, .. } => match source {
                StoreError::NotFound => ErrorKind::NotFound,
                StoreError::InvalidId => ErrorKind::Validation,
                StoreError::ProductMissing(_) => ErrorKind::Referential,
                StoreError::Database(_) => ErrorKind::Internal,
            },
            AppError::Decode { .. } | AppError::Validation { .. } => ErrorKind::Validation,
        }
    }

    /// Message shown to the client; the wrapping context only goes to the log.
    fn public_message(&self) -> String {
        match self {
            AppError::Store { source, .. } => source.to_string(),
            AppError::Decode { message, .. } => message.clone(),
            AppError::Validation { .. } => "field validation error".to_string(),
        }
    }
}

/// Attaches operation context to store failures.
pub trait Context<T> {
    fn context(self, context: impl Into<String>) -> Result<T, AppError>;

    fn with_context<F>(self, f: F) -> Result<T, AppError>
    where
        F: FnOnce() -> String;
}

impl<T> Context<T> for Result<T, StoreError> {
    fn context(self, context: impl Into<String>) -> Result<T, AppError> {
        self.map_err(|source| AppError::Store { context: context.into(), source })
    }

    fn with_context<F>(self, f: F) -> Result<T, AppError>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|source| AppError::Store { context: f(), source })
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<Vec<FieldError>>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self.kind() {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Validation | ErrorKind::Referential => StatusCode::BAD_REQUEST,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let error_message = if status.is_server_error() {
            error!(error = %self, "request failed");
            "Internal Server Error".to_string()
        } else {
            warn!(error = %self, %status, "request rejected");
            self.public_message()
        };

        let fields = match self {
            AppError::Validation { fields, .. } => Some(fields),
            _ => None,
        };

        (status, Json(ErrorBody { error: error_message, fields })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use uuid::Uuid;

    #[test]
    fn not_found_survives_wrapping() {
        let err = Err::<(), _>(StoreError::NotFound)
            .with_context(|| format!("getting product {:?}", "abc"))
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.to_string(), "getting product \"abc\": not found");
    }

    #[test]
    fn store_errors_are_classified() {
        let missing = Err::<(), _>(StoreError::ProductMissing(Uuid::nil()))
            .context("adding new sale")
            .unwrap_err();
        assert_eq!(missing.kind(), ErrorKind::Referential);

        let broken = Err::<(), _>(StoreError::Database(sqlx::Error::PoolTimedOut))
            .context("getting product list")
            .unwrap_err();
        assert_eq!(broken.kind(), ErrorKind::Internal);
    }

    #[tokio::test]
    async fn internal_errors_hide_details() {
        let response = Err::<(), _>(StoreError::Database(sqlx::Error::PoolTimedOut))
            .context("creating new product")
            .unwrap_err()
            .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Internal Server Error");
        assert!(json.get("fields").is_none());
    }

    #[tokio::test]
    async fn validation_errors_list_fields() {
        let response = AppError::validation(
            "decoding new product",
            vec![FieldError::new("quantity", "quantity must be 1 or greater")],
        )
        .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["fields"][0]["field"], "quantity");
    }
}
