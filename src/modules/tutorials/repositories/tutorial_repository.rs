use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::{AppError, Result};
use crate::modules::tutorials::models::Tutorial;

/// Repository for tutorial database operations
#[async_trait]
pub trait TutorialRepository: Send + Sync {
    /// Insert a tutorial, assigning a fresh id. The id on the argument
    /// is ignored.
    async fn insert(&self, tutorial: &Tutorial) -> Result<Tutorial>;

    /// Find a tutorial by id
    async fn find_by_id(&self, id: i64) -> Result<Option<Tutorial>>;

    /// List all tutorials
    async fn find_all(&self) -> Result<Vec<Tutorial>>;

    /// List tutorials matching the published flag
    async fn find_by_published(&self, published: bool) -> Result<Vec<Tutorial>>;

    /// List tutorials whose title contains the given substring
    /// (case-sensitive)
    async fn find_by_title_containing(&self, title: &str) -> Result<Vec<Tutorial>>;

    /// Overwrite an existing tutorial located by its id. Fails with
    /// `NotFound` when the id does not exist; never inserts.
    async fn update(&self, tutorial: &Tutorial) -> Result<Tutorial>;

    /// Delete a tutorial by id. Deleting an absent id is not an error.
    async fn delete_by_id(&self, id: i64) -> Result<()>;

    /// Delete every tutorial
    async fn delete_all(&self) -> Result<()>;
}

pub struct MySqlTutorialRepository {
    pool: MySqlPool,
}

impl MySqlTutorialRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TutorialRepository for MySqlTutorialRepository {
    async fn insert(&self, tutorial: &Tutorial) -> Result<Tutorial> {
        let result = sqlx::query(
            "INSERT INTO tutorials (title, description, published) VALUES (?, ?, ?)",
        )
        .bind(&tutorial.title)
        .bind(&tutorial.description)
        .bind(tutorial.published)
        .execute(&self.pool)
        .await?;

        Ok(Tutorial {
            id: result.last_insert_id() as i64,
            title: tutorial.title.clone(),
            description: tutorial.description.clone(),
            published: tutorial.published,
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Tutorial>> {
        let tutorial = sqlx::query_as::<_, Tutorial>(
            "SELECT id, title, description, published FROM tutorials WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(tutorial)
    }

    async fn find_all(&self) -> Result<Vec<Tutorial>> {
        let tutorials = sqlx::query_as::<_, Tutorial>(
            "SELECT id, title, description, published FROM tutorials ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(tutorials)
    }

    async fn find_by_published(&self, published: bool) -> Result<Vec<Tutorial>> {
        let tutorials = sqlx::query_as::<_, Tutorial>(
            "SELECT id, title, description, published FROM tutorials \
             WHERE published = ? ORDER BY id",
        )
        .bind(published)
        .fetch_all(&self.pool)
        .await?;

        Ok(tutorials)
    }

    async fn find_by_title_containing(&self, title: &str) -> Result<Vec<Tutorial>> {
        // LIKE BINARY keeps the match case-sensitive regardless of the
        // column collation.
        let tutorials = sqlx::query_as::<_, Tutorial>(
            "SELECT id, title, description, published FROM tutorials \
             WHERE title LIKE BINARY CONCAT('%', ?, '%') ORDER BY id",
        )
        .bind(title)
        .fetch_all(&self.pool)
        .await?;

        Ok(tutorials)
    }

    async fn update(&self, tutorial: &Tutorial) -> Result<Tutorial> {
        sqlx::query(
            "UPDATE tutorials SET title = ?, description = ?, published = ? WHERE id = ?",
        )
        .bind(&tutorial.title)
        .bind(&tutorial.description)
        .bind(tutorial.published)
        .bind(tutorial.id)
        .execute(&self.pool)
        .await?;

        // rows_affected is 0 both for a missing row and for a no-op
        // update in MySQL, so re-read to distinguish the two.
        self.find_by_id(tutorial.id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("tutorial {}", tutorial.id)))
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM tutorials WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete_all(&self) -> Result<()> {
        sqlx::query("DELETE FROM tutorials")
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
