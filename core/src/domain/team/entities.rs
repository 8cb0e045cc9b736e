use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Club classification. Closed set: unrecognized raw values coerce to
/// [`TeamCategory::GeneralClub`] at the mapping boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum TeamCategory {
    ExhibitionSquad,
    National,
    Under23,
    Invitational,
    GeneralClub,
}

impl Default for TeamCategory {
    fn default() -> Self {
        TeamCategory::GeneralClub
    }
}

impl TeamCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TeamCategory::ExhibitionSquad => "exhibition-squad",
            TeamCategory::National => "national",
            TeamCategory::Under23 => "under-23",
            TeamCategory::Invitational => "invitational",
            TeamCategory::GeneralClub => "general-club",
        }
    }

    /// Label used by the legacy store (the 3x3.EXE-derived dataset).
    pub fn label_ja(&self) -> &'static str {
        match self {
            TeamCategory::ExhibitionSquad => "EXE",
            TeamCategory::National => "代表",
            TeamCategory::Under23 => "U23",
            TeamCategory::Invitational => "招待",
            TeamCategory::GeneralClub => "一般クラブ",
        }
    }

    /// Both storage representations of this category, for exact-match filters.
    pub fn raw_values(&self) -> [&'static str; 2] {
        [self.as_str(), self.label_ja()]
    }

    /// Coerces a raw storage value into the closed set, defaulting to
    /// `GeneralClub` on anything unrecognized.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("exhibition-squad") | Some("EXE") => TeamCategory::ExhibitionSquad,
            Some("national") | Some("代表") => TeamCategory::National,
            Some("under-23") | Some("U23") => TeamCategory::Under23,
            Some("invitational") | Some("招待") => TeamCategory::Invitational,
            Some("general-club") | Some("一般クラブ") => TeamCategory::GeneralClub,
            _ => TeamCategory::default(),
        }
    }
}

/// Strict parse for filter input; unrecognized values become "no filter" at
/// the boundary rather than a default category.
impl FromStr for TeamCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exhibition-squad" => Ok(TeamCategory::ExhibitionSquad),
            "national" => Ok(TeamCategory::National),
            "under-23" => Ok(TeamCategory::Under23),
            "invitational" => Ok(TeamCategory::Invitational),
            "general-club" => Ok(TeamCategory::GeneralClub),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: i32,
    pub slug: String,
    pub name: String,
    pub location: String,
    pub category: TeamCategory,
    pub image_url: Option<String>,
    pub website_url: Option<String>,
    pub x_account: Option<String>,
    pub instagram_account: Option<String>,
    pub tiktok_account: Option<String>,
    pub updated_at: DateTime<Utc>,
}
