//! Order ledger: order records and their product association
//!
//! Creating an order is one transaction that inserts the order row and its
//! `order_product` association together; both commit or neither does, so no
//! order can exist without exactly one association row.

use std::time::Duration;

use sqlx::{PgPool, Row, postgres::PgRow};
use tracing::info;

use crate::error::{StoreError, StoreResult};
use crate::models::{NewOrder, Order, OrderStatus};

use super::run;

/// Order repository
#[derive(Clone)]
pub struct OrderRepository {
    pool: PgPool,
    timeout: Duration,
}

impl OrderRepository {
    /// Create a new order repository
    pub fn new(pool: PgPool, timeout: Duration) -> Self {
        Self { pool, timeout }
    }

    /// Get all orders
    pub async fn list(&self) -> StoreResult<Vec<Order>> {
        let rows = run(
            "list orders",
            self.timeout,
            sqlx::query(
                r#"
                SELECT id, product_id, user_id, quantity, status
                FROM orders
                "#,
            )
            .fetch_all(&self.pool),
        )
        .await?;

        rows.into_iter()
            .map(|row| map_order(row, "list orders"))
            .collect()
    }

    /// Create an order with status `active` and link it to its product
    ///
    /// The order insert and the association insert run in one transaction;
    /// dropping the transaction on any early exit rolls both back.
    pub async fn create(&self, new_order: &NewOrder) -> StoreResult<Order> {
        info!(
            "Creating order: product {} for user {}",
            new_order.product_id, new_order.user_id
        );

        let result = tokio::time::timeout(self.timeout, async {
            let mut tx = self.pool.begin().await?;

            let row = sqlx::query(
                r#"
                INSERT INTO orders (product_id, user_id, quantity, status)
                VALUES ($1, $2, $3, $4)
                RETURNING id, product_id, user_id, quantity, status
                "#,
            )
            .bind(new_order.product_id)
            .bind(new_order.user_id)
            .bind(new_order.quantity)
            .bind(OrderStatus::Active.as_str())
            .fetch_one(&mut *tx)
            .await?;

            let order_id: i32 = row.get("id");
            sqlx::query(
                r#"
                INSERT INTO order_product (order_id, product_id)
                VALUES ($1, $2)
                "#,
            )
            .bind(order_id)
            .bind(new_order.product_id)
            .execute(&mut *tx)
            .await?;

            tx.commit().await?;
            Ok::<PgRow, sqlx::Error>(row)
        })
        .await;

        match result {
            Ok(Ok(row)) => map_order(row, "create order"),
            Ok(Err(source)) => Err(StoreError::CreateFailed(source)),
            Err(_) => Err(StoreError::Timeout {
                operation: "create order",
            }),
        }
    }

    /// Get all orders for a user; no orders is a successful empty list
    pub async fn find_by_user(&self, user_id: i32) -> StoreResult<Vec<Order>> {
        let rows = run(
            "list orders for user",
            self.timeout,
            sqlx::query(
                r#"
                SELECT orders.id, orders.product_id, orders.user_id, orders.quantity, orders.status
                FROM orders
                INNER JOIN users ON orders.user_id = users.id
                WHERE users.id = $1
                "#,
            )
            .bind(user_id)
            .fetch_all(&self.pool),
        )
        .await?;

        rows.into_iter()
            .map(|row| map_order(row, "list orders for user"))
            .collect()
    }

    /// Get a user's completed orders
    pub async fn find_completed_by_user(&self, user_id: i32) -> StoreResult<Vec<Order>> {
        let rows = run(
            "list completed orders for user",
            self.timeout,
            sqlx::query(
                r#"
                SELECT orders.id, orders.product_id, orders.user_id, orders.quantity, orders.status
                FROM orders
                INNER JOIN users ON orders.user_id = users.id
                WHERE users.id = $1 AND orders.status = 'complete'
                "#,
            )
            .bind(user_id)
            .fetch_all(&self.pool),
        )
        .await?;

        rows.into_iter()
            .map(|row| map_order(row, "list completed orders for user"))
            .collect()
    }

    /// Transition an order to `complete` and return the updated row
    ///
    /// `complete` is terminal, so repeating the call is an idempotent
    /// no-op update.
    pub async fn complete(&self, order_id: i32) -> StoreResult<Order> {
        let row = run(
            "complete order",
            self.timeout,
            sqlx::query(
                r#"
                UPDATE orders
                SET status = 'complete'
                WHERE id = $1
                RETURNING id, product_id, user_id, quantity, status
                "#,
            )
            .bind(order_id)
            .fetch_optional(&self.pool),
        )
        .await?
        .ok_or_else(|| StoreError::NotFound {
            what: format!("order {order_id}"),
        })?;

        map_order(row, "complete order")
    }
}

fn map_order(row: PgRow, operation: &'static str) -> StoreResult<Order> {
    let status: String = row.get("status");
    let status = status.parse::<OrderStatus>().map_err(|e| {
        // A CHECK constraint keeps this unreachable; surface it if it ever
        // happens instead of guessing a state.
        StoreError::Unavailable {
            operation,
            source: sqlx::Error::Decode(e.into()),
        }
    })?;

    Ok(Order {
        id: row.get("id"),
        product_id: row.get("product_id"),
        user_id: row.get("user_id"),
        quantity: row.get("quantity"),
        status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::TokenService;
    use crate::models::{NewProduct, NewUser};
    use crate::password::CredentialHasher;
    use crate::repositories::{ProductRepository, UserRepository};

    fn live_pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        PgPool::connect_lazy(&url).unwrap()
    }

    async fn seed_user_and_product(pool: &PgPool) -> (i32, i32) {
        let users = UserRepository::new(
            pool.clone(),
            CredentialHasher::new("pepper".to_string(), 1).unwrap(),
            TokenService::new("secret", 3600),
            Duration::from_secs(5),
        );
        let products = ProductRepository::new(pool.clone(), Duration::from_secs(5));

        let user_name = format!(
            "order_test_{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        );
        let (user, _) = users
            .register(&NewUser {
                first_name: "Order".to_string(),
                last_name: "Tester".to_string(),
                user_name,
                password: "password123".to_string(),
            })
            .await
            .unwrap();
        let product = products
            .create(&NewProduct {
                name: "Test Widget".to_string(),
                price: 9.99,
                category: None,
            })
            .await
            .unwrap();

        (user.id, product.id)
    }

    async fn cleanup(pool: &PgPool, user_id: i32, product_id: i32) {
        sqlx::query("DELETE FROM order_product WHERE product_id = $1")
            .bind(product_id)
            .execute(pool)
            .await
            .unwrap();
        sqlx::query("DELETE FROM orders WHERE user_id = $1")
            .bind(user_id)
            .execute(pool)
            .await
            .unwrap();
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(product_id)
            .execute(pool)
            .await
            .unwrap();
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id)
            .execute(pool)
            .await
            .unwrap();
    }

    // Requires a running Postgres with schema.sql applied.
    #[tokio::test]
    #[ignore]
    async fn test_create_links_exactly_one_association_row() {
        let pool = live_pool();
        let (user_id, product_id) = seed_user_and_product(&pool).await;
        let repo = OrderRepository::new(pool.clone(), Duration::from_secs(5));

        let order = repo
            .create(&NewOrder {
                product_id,
                user_id,
                quantity: 2,
            })
            .await
            .unwrap();
        assert_eq!(order.status, OrderStatus::Active);
        assert_eq!(order.quantity, 2);

        let count: i64 = sqlx::query(
            "SELECT COUNT(*) AS n FROM order_product WHERE order_id = $1 AND product_id = $2",
        )
        .bind(order.id)
        .bind(product_id)
        .fetch_one(&pool)
        .await
        .unwrap()
        .get("n");
        assert_eq!(count, 1);

        cleanup(&pool, user_id, product_id).await;
    }

    // Requires a running Postgres with schema.sql applied.
    #[tokio::test]
    #[ignore]
    async fn test_create_against_missing_product_persists_nothing() {
        let pool = live_pool();
        let (user_id, product_id) = seed_user_and_product(&pool).await;
        let repo = OrderRepository::new(pool.clone(), Duration::from_secs(5));

        // Violates the product foreign key; the whole transaction rolls back
        let err = repo
            .create(&NewOrder {
                product_id: -1,
                user_id,
                quantity: 1,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::CreateFailed(_)));

        let orphans: i64 = sqlx::query("SELECT COUNT(*) AS n FROM orders WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&pool)
            .await
            .unwrap()
            .get("n");
        assert_eq!(orphans, 0);

        cleanup(&pool, user_id, product_id).await;
    }

    // Requires a running Postgres with schema.sql applied.
    #[tokio::test]
    #[ignore]
    async fn test_complete_is_idempotent_and_terminal() {
        let pool = live_pool();
        let (user_id, product_id) = seed_user_and_product(&pool).await;
        let repo = OrderRepository::new(pool.clone(), Duration::from_secs(5));

        let order = repo
            .create(&NewOrder {
                product_id,
                user_id,
                quantity: 1,
            })
            .await
            .unwrap();

        let first = repo.complete(order.id).await.unwrap();
        assert_eq!(first.status, OrderStatus::Complete);
        let second = repo.complete(order.id).await.unwrap();
        assert_eq!(second.status, OrderStatus::Complete);

        let completed = repo.find_completed_by_user(user_id).await.unwrap();
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].id, order.id);

        let err = repo.complete(-1).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));

        cleanup(&pool, user_id, product_id).await;
    }

    // Requires a running Postgres with schema.sql applied.
    #[tokio::test]
    #[ignore]
    async fn test_no_orders_is_a_successful_empty_list() {
        let pool = live_pool();
        let (user_id, product_id) = seed_user_and_product(&pool).await;
        let repo = OrderRepository::new(pool.clone(), Duration::from_secs(5));

        let orders = repo.find_by_user(user_id).await.unwrap();
        assert!(orders.is_empty());

        cleanup(&pool, user_id, product_id).await;
    }
}
