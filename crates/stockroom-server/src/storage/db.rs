//! SQLite product store (embedded, no external dependencies)

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use stockroom_core::{
    Product, ProductDraft, ProductStore, StoreError, DESCRIPTION_MAX_LEN, NAME_MAX_LEN,
};

pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (creating if needed) the database file at `database_path` and
    /// make sure the schema exists.
    pub async fn connect(database_path: &str) -> Result<Self> {
        tracing::info!("Opening SQLite database at: {}", database_path);

        // Create parent directory if needed
        if let Some(parent) = std::path::Path::new(database_path).parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.with_context(|| {
                    format!("Failed to create database directory: {}", parent.display())
                })?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(database_path)
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .synchronous(sqlx::sqlite::SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .with_context(|| {
                format!("Failed to connect to SQLite database at: {}", database_path)
            })?;

        tracing::info!("SQLite connection established, running migrations...");
        Self::from_pool(pool).await
    }

    /// Private in-memory database. Every call yields an isolated instance.
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

        // An in-memory database lives and dies with its connection, so the
        // pool must hold exactly one and never recycle it.
        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .context("Failed to open in-memory SQLite database")?;

        Self::from_pool(pool).await
    }

    async fn from_pool(pool: SqlitePool) -> Result<Self> {
        Self::run_migrations(&pool)
            .await
            .context("Failed to run database migrations")?;

        tracing::info!("Database initialization complete");

        Ok(Self { pool })
    }

    async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        // AUTOINCREMENT keeps ids of deleted products from being handed out again
        let create_product = format!(
            r#"
            CREATE TABLE IF NOT EXISTS product (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name VARCHAR({NAME_MAX_LEN}) NOT NULL UNIQUE,
                description VARCHAR({DESCRIPTION_MAX_LEN}) NOT NULL,
                price FLOAT NOT NULL,
                qty INTEGER NOT NULL
            )
            "#
        );
        sqlx::query(&create_product).execute(pool).await?;

        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl ProductStore for Database {
    async fn create(&self, draft: &ProductDraft) -> stockroom_core::Result<Product> {
        let row: ProductRow = sqlx::query_as(
            r#"
            INSERT INTO product (name, description, price, qty)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id, name, description, price, qty
            "#,
        )
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(draft.price)
        .bind(draft.qty)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error(e, &draft.name))?;

        Ok(row.into())
    }

    async fn list(&self) -> stockroom_core::Result<Vec<Product>> {
        let rows: Vec<ProductRow> = sqlx::query_as(
            r#"
            SELECT id, name, description, price, qty FROM product
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(read_error)?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn get(&self, id: i64) -> stockroom_core::Result<Option<Product>> {
        let row: Option<ProductRow> = sqlx::query_as(
            r#"
            SELECT id, name, description, price, qty FROM product WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(read_error)?;

        Ok(row.map(|r| r.into()))
    }

    async fn update(
        &self,
        id: i64,
        draft: &ProductDraft,
    ) -> stockroom_core::Result<Option<Product>> {
        let row: Option<ProductRow> = sqlx::query_as(
            r#"
            UPDATE product
            SET name = ?1, description = ?2, price = ?3, qty = ?4
            WHERE id = ?5
            RETURNING id, name, description, price, qty
            "#,
        )
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(draft.price)
        .bind(draft.qty)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| write_error(e, &draft.name))?;

        Ok(row.map(|r| r.into()))
    }

    async fn delete(&self, id: i64) -> stockroom_core::Result<Option<Product>> {
        let row: Option<ProductRow> = sqlx::query_as(
            r#"
            DELETE FROM product WHERE id = ?1
            RETURNING id, name, description, price, qty
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(read_error)?;

        Ok(row.map(|r| r.into()))
    }
}

fn write_error(e: sqlx::Error, name: &str) -> StoreError {
    if let sqlx::Error::Database(ref db_err) = e {
        if db_err.is_unique_violation() {
            return StoreError::DuplicateName(name.to_string());
        }
    }
    read_error(e)
}

fn read_error(e: sqlx::Error) -> StoreError {
    StoreError::Database(e.to_string())
}

// Helper struct for sqlx query_as
#[derive(sqlx::FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    description: String,
    price: f64,
    qty: i64,
}

impl From<ProductRow> for Product {
    fn from(r: ProductRow) -> Self {
        Product {
            id: r.id,
            name: r.name,
            description: r.description,
            price: r.price,
            qty: r.qty,
        }
    }
}
