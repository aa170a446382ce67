//! Customer endpoints
//!
//! Handlers only decode, delegate to `CustomerRepo`, and encode. Status
//! codes for failures come from `ApiError`.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::db::repos::CustomerRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{CustomerIdPath, JsonBody};
use crate::http::server::AppState;
use crate::models::{Customer, CustomerDraft};

/// Delete confirmation
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// POST /customers - create a new customer
async fn create_customer(
    State(state): State<Arc<AppState>>,
    JsonBody(draft): JsonBody<CustomerDraft>,
) -> Result<(StatusCode, Json<Customer>), ApiError> {
    let customer = CustomerRepo::new(&state.pool).create(&draft).await?;
    Ok((StatusCode::CREATED, Json(customer)))
}

/// GET /customers - list all customers
async fn list_customers(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Customer>>, ApiError> {
    let customers = CustomerRepo::new(&state.pool).list().await?;
    Ok(Json(customers))
}

/// GET /customers/{id} - get a single customer
async fn get_customer(
    State(state): State<Arc<AppState>>,
    CustomerIdPath(id): CustomerIdPath,
) -> Result<Json<Customer>, ApiError> {
    let customer = CustomerRepo::new(&state.pool).get(id).await?;
    Ok(Json(customer))
}

/// PUT /customers/{id} - replace name, email and status
async fn update_customer(
    State(state): State<Arc<AppState>>,
    CustomerIdPath(id): CustomerIdPath,
    JsonBody(draft): JsonBody<CustomerDraft>,
) -> Result<Json<Customer>, ApiError> {
    let customer = CustomerRepo::new(&state.pool).update(id, &draft).await?;
    Ok(Json(customer))
}

/// DELETE /customers/{id}
async fn delete_customer(
    State(state): State<Arc<AppState>>,
    CustomerIdPath(id): CustomerIdPath,
) -> Result<Json<MessageResponse>, ApiError> {
    CustomerRepo::new(&state.pool).delete(id).await?;
    Ok(Json(MessageResponse {
        message: "customer deleted",
    }))
}

/// Customer routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/customers", get(list_customers).post(create_customer))
        .route(
            "/customers/{id}",
            get(get_customer).put(update_customer).delete(delete_customer),
        )
}
