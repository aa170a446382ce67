//! Custom Axum extractors
//!
//! Both reject with `ApiError` so every shape problem is a 400 (or 413 for
//! an oversized body) with the standard error body, never axum's plain-text
//! rejections.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::http::StatusCode;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::{CustomerId, ValidationError};

/// Extract and validate a customer id from path
pub struct CustomerIdPath(pub CustomerId);

impl<S> FromRequestParts<S> for CustomerIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                ApiError::Validation(ValidationError::InvalidId {
                    value: String::new(),
                })
            })?;

        Ok(Self(CustomerId::parse(&id)?))
    }
}

/// JSON body decoded regardless of `Content-Type`.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                ApiError::PayloadTooLarge {
                    reason: e.body_text(),
                }
            } else {
                ApiError::Validation(ValidationError::MalformedBody {
                    reason: e.body_text(),
                })
            }
        })?;

        serde_json::from_slice(&bytes)
            .map(Self)
            .map_err(|e| {
                ApiError::Validation(ValidationError::MalformedBody {
                    reason: e.to_string(),
                })
            })
    }
}
