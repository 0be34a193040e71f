use sqlx::{PgPool, postgres::PgPoolOptions};

/// Schema for the single `articles` table. Applied idempotently at startup;
/// there is no versioned migration history.
const CREATE_ARTICLES_TABLE: &str = "
CREATE TABLE IF NOT EXISTS articles (
    id BIGSERIAL PRIMARY KEY,
    title TEXT NOT NULL CONSTRAINT articles_title_not_empty_chk CHECK (title <> ''),
    content TEXT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL
)";

pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_ARTICLES_TABLE).execute(pool).await?;
    Ok(())
}
