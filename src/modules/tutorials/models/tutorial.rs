use serde::{Deserialize, Serialize};

/// A tutorial record as stored and served
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Tutorial {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub published: bool,
}

/// Request body for creating or replacing a tutorial
///
/// `published` is accepted on create but ignored there; new tutorials
/// always start unpublished.
#[derive(Debug, Clone, Deserialize)]
pub struct TutorialPayload {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub published: bool,
}
