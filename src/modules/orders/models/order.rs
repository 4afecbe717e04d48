use serde::{Deserialize, Serialize};

/// An order record as stored and served
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Order {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub published: bool,
}

/// Request body for creating or replacing an order
#[derive(Debug, Clone, Deserialize)]
pub struct OrderPayload {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub published: bool,
}
