//! Database migrations for the submissions table

use sqlx::PgPool;

/// Create the `form_data` table if it does not exist.
///
/// Column widths match the validation limits in `models`.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running form_data migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS form_data (
            id BIGSERIAL PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            email VARCHAR(255) NOT NULL,
            country_code VARCHAR(10) NOT NULL,
            phone VARCHAR(20) NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Migrations complete");
    Ok(())
}
