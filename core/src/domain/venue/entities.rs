use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub id: i32,
    pub slug: String,
    pub name: String,
    /// Prefecture, or country name for venues abroad.
    pub region: String,
    pub map_url: Option<String>,
    pub updated_at: DateTime<Utc>,
}
