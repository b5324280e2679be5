//! Knowledge base wire models (pages, categories, tags).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A knowledge base page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgePage {
    pub id: Uuid,
    pub title: Option<String>,
    pub content: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub order: i32,
    pub created_user_id: Option<String>,
    pub updated_user_id: Option<String>,
    pub category_id: Option<Uuid>,
    pub tags: Option<Vec<KnowledgeTag>>,
}

/// A tag referencing knowledge base pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeTag {
    pub id: Uuid,
    pub name: Option<String>,
}

/// A knowledge base category containing pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeCategory {
    pub id: Uuid,
    pub name: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    #[serde(default)]
    pub order: i32,
    pub user_id: Option<String>,
    pub pages: Option<Vec<KnowledgePage>>,
}

/// Payload for `POST /api/KnowledgeBase/Page`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgePageCreate {
    pub title: String,
    pub content: String,
    pub order: i32,
    pub category_id: Uuid,
}

/// Payload for `PUT /api/KnowledgeBase/Page`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgePageUpdate {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub order: i32,
    pub category_id: Uuid,
}

/// Payload for `POST /api/KnowledgeBase/Category`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeCategoryCreate {
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub order: i32,
}

/// Payload for `PUT /api/KnowledgeBase/Category`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeCategoryUpdate {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub order: i32,
}
