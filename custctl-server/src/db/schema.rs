//! Startup schema initialization for the customers table

use sqlx::PgPool;

/// Create the customers table if it does not exist yet.
///
/// Idempotent; columns of an existing table are left untouched.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Ensuring customers table exists...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS customers (
            id SERIAL PRIMARY KEY,
            name TEXT,
            email TEXT,
            status TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("customers table ready");
    Ok(())
}
