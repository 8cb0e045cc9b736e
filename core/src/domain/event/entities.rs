use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Lifecycle status of an event. Closed set: raw values outside it coerce to
/// [`EventStatus::Upcoming`] at the mapping boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Upcoming,
    Ongoing,
    Completed,
    Cancelled,
}

impl Default for EventStatus {
    fn default() -> Self {
        EventStatus::Upcoming
    }
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Upcoming => "upcoming",
            EventStatus::Ongoing => "ongoing",
            EventStatus::Completed => "completed",
            EventStatus::Cancelled => "cancelled",
        }
    }

    /// Japanese label used by the legacy store.
    pub fn label_ja(&self) -> &'static str {
        match self {
            EventStatus::Upcoming => "開催予定",
            EventStatus::Ongoing => "開催中",
            EventStatus::Completed => "終了",
            EventStatus::Cancelled => "中止",
        }
    }

    /// Both storage representations of this status, for exact-match filters.
    pub fn raw_values(&self) -> [&'static str; 2] {
        [self.as_str(), self.label_ja()]
    }

    /// Coerces a raw storage value into the closed set. Accepts the canonical
    /// token and the Japanese label; anything else defaults to `Upcoming`.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("upcoming") | Some("開催予定") => EventStatus::Upcoming,
            Some("ongoing") | Some("開催中") => EventStatus::Ongoing,
            Some("completed") | Some("終了") => EventStatus::Completed,
            Some("cancelled") | Some("中止") => EventStatus::Cancelled,
            _ => EventStatus::default(),
        }
    }
}

/// Strict parse for filter input: unlike [`EventStatus::from_raw`], an
/// unrecognized value is an error (the boundary turns it into "no filter").
impl FromStr for EventStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upcoming" => Ok(EventStatus::Upcoming),
            "ongoing" => Ok(EventStatus::Ongoing),
            "completed" => Ok(EventStatus::Completed),
            "cancelled" => Ok(EventStatus::Cancelled),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i32,
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub location: String,
    pub country: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub status: EventStatus,
    pub image_url: Option<String>,
    pub website_url: Option<String>,
    pub x_account: Option<String>,
    pub instagram_account: Option<String>,
    pub tiktok_account: Option<String>,
    /// Participating teams in presentation order; duplicates allowed.
    pub participant_team_ids: Vec<i32>,
    pub updated_at: DateTime<Utc>,
}
