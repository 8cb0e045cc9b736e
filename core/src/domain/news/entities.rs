use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A team referenced by a news article. Pairs are kept in insertion order,
/// which is the relevance order chosen by the editors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RelatedTeam {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    pub id: i32,
    pub slug: String,
    pub title: String,
    pub summary: Option<String>,
    pub source_url: Option<String>,
    pub image_url: Option<String>,
    pub published_at: NaiveDate,
    pub updated_at: DateTime<Utc>,
    pub related_teams: Vec<RelatedTeam>,
}
