//! Product catalog: product records and category lookup

use std::time::Duration;

use sqlx::{PgPool, Row, postgres::PgRow};
use tracing::info;

use crate::error::{StoreError, StoreResult};
use crate::models::{NewProduct, Product};

use super::run;

/// Product repository
#[derive(Clone)]
pub struct ProductRepository {
    pool: PgPool,
    timeout: Duration,
}

impl ProductRepository {
    /// Create a new product repository
    pub fn new(pool: PgPool, timeout: Duration) -> Self {
        Self { pool, timeout }
    }

    /// Get all products; an empty catalog is a successful empty list
    pub async fn list(&self) -> StoreResult<Vec<Product>> {
        let rows = run(
            "list products",
            self.timeout,
            sqlx::query(
                r#"
                SELECT id, name, price, category
                FROM products
                "#,
            )
            .fetch_all(&self.pool),
        )
        .await?;

        Ok(rows.into_iter().map(map_product).collect())
    }

    /// Find a product by id
    pub async fn find_by_id(&self, id: i32) -> StoreResult<Product> {
        let row = run(
            "fetch product",
            self.timeout,
            sqlx::query(
                r#"
                SELECT id, name, price, category
                FROM products
                WHERE id = $1
                "#,
            )
            .bind(id)
            .fetch_optional(&self.pool),
        )
        .await?
        .ok_or_else(|| StoreError::NotFound {
            what: format!("product {id}"),
        })?;

        Ok(map_product(row))
    }

    /// Insert a new product and return the generated row
    pub async fn create(&self, new_product: &NewProduct) -> StoreResult<Product> {
        info!("Creating product: {}", new_product.name);

        let row = run(
            "create product",
            self.timeout,
            sqlx::query(
                r#"
                INSERT INTO products (name, price, category)
                VALUES ($1, $2, $3)
                RETURNING id, name, price, category
                "#,
            )
            .bind(&new_product.name)
            .bind(new_product.price)
            .bind(&new_product.category)
            .fetch_one(&self.pool),
        )
        .await?;

        Ok(map_product(row))
    }

    /// Case-insensitive substring match on category
    ///
    /// An empty result set is `NotFound` here, unlike `list`; that
    /// asymmetry is deliberate and matched by the tests.
    pub async fn find_by_category(&self, category: &str) -> StoreResult<Vec<Product>> {
        let pattern = format!("%{category}%");
        let rows = run(
            "list products by category",
            self.timeout,
            sqlx::query(
                r#"
                SELECT id, name, price, category
                FROM products
                WHERE category ILIKE $1
                "#,
            )
            .bind(&pattern)
            .fetch_all(&self.pool),
        )
        .await?;

        if rows.is_empty() {
            return Err(StoreError::NotFound {
                what: format!("products in category '{category}'"),
            });
        }

        Ok(rows.into_iter().map(map_product).collect())
    }
}

fn map_product(row: PgRow) -> Product {
    Product {
        id: row.get("id"),
        name: row.get("name"),
        price: row.get("price"),
        category: row.get("category"),
    }
}
