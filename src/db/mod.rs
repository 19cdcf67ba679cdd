pub mod models;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

#[derive(Debug, Clone)]
pub struct Database {
    pub pool: SqlitePool,
}

impl Database {
    pub async fn connect(database_url: &str) -> anyhow::Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;
        Ok(Self { pool })
    }

    pub async fn run_migrations(&self) -> anyhow::Result<()> {
        sqlx::query(
            r#"CREATE TABLE IF NOT EXISTS products (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                description TEXT,
                price REAL,
                image TEXT,
                barcode TEXT UNIQUE,
                created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
            )"#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    // ── Product Operations ─────────────────────────────────────────

    pub async fn create_product(
        &self,
        new: &models::NewProduct,
    ) -> anyhow::Result<models::Product> {
        let product = sqlx::query_as::<_, models::Product>(
            r#"
            INSERT INTO products (name, description, price, image, barcode)
            VALUES (?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&new.name)
        .bind(&new.description)
        .bind(new.price)
        .bind(&new.image)
        .bind(&new.barcode)
        .fetch_one(&self.pool)
        .await?;

        Ok(product)
    }

    pub async fn get_product(&self, id: i64) -> anyhow::Result<Option<models::Product>> {
        let product = sqlx::query_as::<_, models::Product>(
            "SELECT * FROM products WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(product)
    }

    pub async fn get_product_by_barcode(
        &self,
        barcode: &str,
    ) -> anyhow::Result<Option<models::Product>> {
        let product = sqlx::query_as::<_, models::Product>(
            "SELECT * FROM products WHERE barcode = ?",
        )
        .bind(barcode)
        .fetch_optional(&self.pool)
        .await?;
        Ok(product)
    }

    pub async fn list_products(&self, limit: i64) -> anyhow::Result<Vec<models::Product>> {
        let products = sqlx::query_as::<_, models::Product>(
            "SELECT * FROM products ORDER BY id ASC LIMIT ?",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(products)
    }
}
