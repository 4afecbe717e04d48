use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::{AppError, Result};
use crate::modules::orders::models::Order;

/// Repository for order database operations
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Insert an order, assigning a fresh id. The id on the argument is
    /// ignored.
    async fn insert(&self, order: &Order) -> Result<Order>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Order>>;

    async fn find_all(&self) -> Result<Vec<Order>>;

    async fn find_by_published(&self, published: bool) -> Result<Vec<Order>>;

    /// Case-sensitive substring match against the title
    async fn find_by_title_containing(&self, title: &str) -> Result<Vec<Order>>;

    /// Overwrite an existing order; `NotFound` when the id is absent
    async fn update(&self, order: &Order) -> Result<Order>;

    /// Delete by id; deleting an absent id is not an error
    async fn delete_by_id(&self, id: i64) -> Result<()>;
}

pub struct MySqlOrderRepository {
    pool: MySqlPool,
}

impl MySqlOrderRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for MySqlOrderRepository {
    async fn insert(&self, order: &Order) -> Result<Order> {
        let result =
            sqlx::query("INSERT INTO orders (title, description, published) VALUES (?, ?, ?)")
                .bind(&order.title)
                .bind(&order.description)
                .bind(order.published)
                .execute(&self.pool)
                .await?;

        Ok(Order {
            id: result.last_insert_id() as i64,
            title: order.title.clone(),
            description: order.description.clone(),
            published: order.published,
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Order>> {
        let order = sqlx::query_as::<_, Order>(
            "SELECT id, title, description, published FROM orders WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(order)
    }

    async fn find_all(&self) -> Result<Vec<Order>> {
        let orders = sqlx::query_as::<_, Order>(
            "SELECT id, title, description, published FROM orders ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(orders)
    }

    async fn find_by_published(&self, published: bool) -> Result<Vec<Order>> {
        let orders = sqlx::query_as::<_, Order>(
            "SELECT id, title, description, published FROM orders \
             WHERE published = ? ORDER BY id",
        )
        .bind(published)
        .fetch_all(&self.pool)
        .await?;

        Ok(orders)
    }

    async fn find_by_title_containing(&self, title: &str) -> Result<Vec<Order>> {
        let orders = sqlx::query_as::<_, Order>(
            "SELECT id, title, description, published FROM orders \
             WHERE title LIKE BINARY CONCAT('%', ?, '%') ORDER BY id",
        )
        .bind(title)
        .fetch_all(&self.pool)
        .await?;

        Ok(orders)
    }

    async fn update(&self, order: &Order) -> Result<Order> {
        sqlx::query("UPDATE orders SET title = ?, description = ?, published = ? WHERE id = ?")
            .bind(&order.title)
            .bind(&order.description)
            .bind(order.published)
            .bind(order.id)
            .execute(&self.pool)
            .await?;

        self.find_by_id(order.id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("order {}", order.id)))
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM orders WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
