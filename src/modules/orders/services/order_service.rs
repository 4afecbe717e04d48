use std::sync::Arc;

use crate::core::Result;
use crate::modules::orders::models::{Order, OrderPayload};
use crate::modules::orders::repositories::OrderRepository;

/// Service for order business logic
pub struct OrderService {
    repo: Arc<dyn OrderRepository>,
}

impl OrderService {
    pub fn new(repo: Arc<dyn OrderRepository>) -> Self {
        Self { repo }
    }

    /// Create an order; the caller-supplied `published` flag is
    /// discarded and new orders start unpublished.
    pub async fn create(&self, payload: OrderPayload) -> Result<Order> {
        let draft = Order {
            id: 0,
            title: payload.title,
            description: payload.description,
            published: false,
        };

        self.repo.insert(&draft).await
    }

    pub async fn get_all(&self, title: Option<&str>) -> Result<Vec<Order>> {
        match title {
            None => self.repo.find_all().await,
            Some(title) => self.repo.find_by_title_containing(title).await,
        }
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Order>> {
        self.repo.find_by_id(id).await
    }

    pub async fn get_by_published(&self, published: bool) -> Result<Vec<Order>> {
        self.repo.find_by_published(published).await
    }

    /// Merge-on-update; returns `None` when the id does not exist
    pub async fn update(&self, id: i64, payload: OrderPayload) -> Result<Option<Order>> {
        let Some(mut existing) = self.repo.find_by_id(id).await? else {
            return Ok(None);
        };

        existing.title = payload.title;
        existing.description = payload.description;
        existing.published = payload.published;

        self.repo.update(&existing).await.map(Some)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.repo.delete_by_id(id).await
    }
}
