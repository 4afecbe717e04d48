use std::sync::Arc;

use crate::core::Result;
use crate::modules::tutorials::models::{Tutorial, TutorialPayload};
use crate::modules::tutorials::repositories::TutorialRepository;

/// Service for tutorial business logic
pub struct TutorialService {
    repo: Arc<dyn TutorialRepository>,
}

impl TutorialService {
    pub fn new(repo: Arc<dyn TutorialRepository>) -> Self {
        Self { repo }
    }

    /// Create a tutorial from a request payload. The caller-supplied
    /// `published` flag is discarded; new tutorials start unpublished.
    pub async fn create(&self, payload: TutorialPayload) -> Result<Tutorial> {
        let draft = Tutorial {
            id: 0,
            title: payload.title,
            description: payload.description,
            published: false,
        };

        self.repo.insert(&draft).await
    }

    /// List tutorials, optionally filtered by a title substring. An
    /// empty result is a valid outcome, not an error.
    pub async fn get_all(&self, title: Option<&str>) -> Result<Vec<Tutorial>> {
        match title {
            None => self.repo.find_all().await,
            Some(title) => self.repo.find_by_title_containing(title).await,
        }
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Tutorial>> {
        self.repo.find_by_id(id).await
    }

    pub async fn get_by_published(&self, published: bool) -> Result<Vec<Tutorial>> {
        self.repo.find_by_published(published).await
    }

    /// Merge-on-update: load the existing tutorial, overwrite its
    /// title, description and published flag from the payload, keep the
    /// id. Returns `None` when the id does not exist.
    pub async fn update(&self, id: i64, payload: TutorialPayload) -> Result<Option<Tutorial>> {
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

    pub async fn delete_all(&self) -> Result<()> {
        self.repo.delete_all().await
    }
}
