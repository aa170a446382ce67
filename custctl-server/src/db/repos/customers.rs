//! Customer repository
//!
//! One SQL statement per operation. Zero matching rows on get/update/delete
//! is reported as `DbError::NotFound` instead of a silent success.
//!
//! The text columns are nullable (tables from older deployments are reused
//! as-is), so every read maps NULL to an empty string.

use sqlx::PgPool;

use super::DbError;
use crate::models::{Customer, CustomerDraft, CustomerId};

const RESOURCE: &str = "customer";

/// Customer repository
pub struct CustomerRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CustomerRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a customer and return it with the id assigned by the database.
    pub async fn create(&self, draft: &CustomerDraft) -> Result<Customer, DbError> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            INSERT INTO customers (name, email, status)
            VALUES ($1, $2, $3)
            RETURNING id, COALESCE(name, '') AS name, COALESCE(email, '') AS email,
                      COALESCE(status, '') AS status
            "#,
        )
        .bind(&draft.name)
        .bind(&draft.email)
        .bind(&draft.status)
        .fetch_one(self.pool)
        .await?;

        tracing::info!(customer_id = customer.id, "customer created");
        Ok(customer)
    }

    /// List every customer, oldest id first.
    pub async fn list(&self) -> Result<Vec<Customer>, DbError> {
        let customers = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, COALESCE(name, '') AS name, COALESCE(email, '') AS email,
                   COALESCE(status, '') AS status
            FROM customers
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        tracing::debug!(count = customers.len(), "customers listed");
        Ok(customers)
    }

    /// Get a single customer by id.
    pub async fn get(&self, id: CustomerId) -> Result<Customer, DbError> {
        sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, COALESCE(name, '') AS name, COALESCE(email, '') AS email,
                   COALESCE(status, '') AS status
            FROM customers
            WHERE id = $1
            "#,
        )
        .bind(id.get())
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| not_found(id))
    }

    /// Replace name, email and status of an existing customer.
    pub async fn update(&self, id: CustomerId, draft: &CustomerDraft) -> Result<Customer, DbError> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            UPDATE customers
            SET name = $2, email = $3, status = $4
            WHERE id = $1
            RETURNING id, COALESCE(name, '') AS name, COALESCE(email, '') AS email,
                      COALESCE(status, '') AS status
            "#,
        )
        .bind(id.get())
        .bind(&draft.name)
        .bind(&draft.email)
        .bind(&draft.status)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| not_found(id))?;

        tracing::info!(customer_id = customer.id, "customer updated");
        Ok(customer)
    }

    /// Delete a customer by id.
    pub async fn delete(&self, id: CustomerId) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id.get())
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }

        tracing::info!(customer_id = %id, "customer deleted");
        Ok(())
    }
}

fn not_found(id: CustomerId) -> DbError {
    DbError::NotFound {
        resource: RESOURCE,
        id: id.to_string(),
    }
}
