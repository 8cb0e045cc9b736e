use chrono::{DateTime, TimeZone, Utc};
use once_cell::sync::Lazy;

use crate::domain::{
    common::{
        entities::{PaginatedResult, app_errors::CoreError},
        slugify,
    },
    team::{
        entities::{Team, TeamCategory},
        ports::TeamRepository,
        value_objects::TeamListFilter,
    },
};

fn fixture_ts(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

fn fixture_team(
    id: i32,
    name: &str,
    location: &str,
    category: TeamCategory,
    website_url: Option<&str>,
    x_account: Option<&str>,
    instagram_account: Option<&str>,
) -> Team {
    Team {
        id,
        slug: slugify(name, id),
        name: name.to_string(),
        location: location.to_string(),
        category,
        image_url: None,
        website_url: website_url.map(str::to_string),
        x_account: x_account.map(str::to_string),
        instagram_account: instagram_account.map(str::to_string),
        tiktok_account: None,
        updated_at: fixture_ts(2026, 2, 24),
    }
}

/// Read-only default dataset, used when no database is configured.
static FIXTURE_TEAMS: Lazy<Vec<Team>> = Lazy::new(|| {
    vec![
        fixture_team(
            1,
            "SHINAGAWA CITY 3x3 BASKETBALL CLUB",
            "東京都",
            TeamCategory::GeneralClub,
            Some("https://www.shinagawa-city.com/3x3basketball/"),
            Some("scbc_3x3"),
            Some("shinagawacity3x3basketball"),
        ),
        fixture_team(
            2,
            "FLOWLISH GUNMA",
            "群馬県",
            TeamCategory::GeneralClub,
            Some("https://flowlish-gunma.com/"),
            Some("flowlish3x3"),
            Some("flowlish3x3"),
        ),
        fixture_team(
            3,
            "UTSUNOMIYA BREX.EXE",
            "栃木県",
            TeamCategory::ExhibitionSquad,
            Some("https://www.utsunomiyabrex.com/"),
            Some("brex3x3"),
            None,
        ),
        fixture_team(
            4,
            "ZETHREE ISHIKAWA.EXE",
            "石川県",
            TeamCategory::ExhibitionSquad,
            None,
            None,
            Some("zethree3x3"),
        ),
        fixture_team(
            5,
            "SHONAN SEASIDE.EXE",
            "神奈川県",
            TeamCategory::ExhibitionSquad,
            None,
            None,
            Some("shonanseaside3x3"),
        ),
        fixture_team(
            6,
            "SINGAPORE",
            "Singapore",
            TeamCategory::National,
            None,
            Some("sgbasketball"),
            Some("sgbasketball"),
        ),
    ]
});

#[derive(Debug, Clone)]
pub struct InMemoryTeamRepository {
    teams: Vec<Team>,
}

impl InMemoryTeamRepository {
    pub fn new(teams: Vec<Team>) -> Self {
        Self { teams }
    }
}

impl Default for InMemoryTeamRepository {
    fn default() -> Self {
        Self::new(FIXTURE_TEAMS.clone())
    }
}

fn matches(team: &Team, filter: &TeamListFilter) -> bool {
    if !filter.search.is_empty() {
        let q = filter.search.to_lowercase();
        let hit = team.name.to_lowercase().contains(&q)
            || team.location.to_lowercase().contains(&q);
        if !hit {
            return false;
        }
    }

    if let Some(category) = filter.category
        && team.category != category
    {
        return false;
    }

    true
}

impl TeamRepository for InMemoryTeamRepository {
    async fn fetch_teams(&self, filter: TeamListFilter) -> Result<PaginatedResult<Team>, CoreError> {
        let mut matched: Vec<Team> = self
            .teams
            .iter()
            .filter(|team| matches(team, &filter))
            .cloned()
            .collect();
        matched.sort_by(|a, b| a.name.cmp(&b.name));

        let total = matched.len() as u64;
        let offset = filter.page.saturating_sub(1).saturating_mul(filter.page_size) as usize;
        let items = matched
            .into_iter()
            .skip(offset)
            .take(filter.page_size as usize)
            .collect();

        Ok(PaginatedResult::new(items, total, filter.page, filter.page_size))
    }

    async fn get_team_by_id(&self, team_id: i32) -> Result<Option<Team>, CoreError> {
        Ok(self.teams.iter().find(|team| team.id == team_id).cloned())
    }

    async fn get_teams_by_ids(&self, team_ids: Vec<i32>) -> Result<Vec<Team>, CoreError> {
        let teams = team_ids
            .iter()
            .filter_map(|id| self.teams.iter().find(|team| team.id == *id).cloned())
            .collect();

        Ok(teams)
    }

    async fn fetch_all_teams(&self) -> Result<Vec<Team>, CoreError> {
        let mut teams = self.teams.clone();
        teams.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(teams)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_duplicate_ids_yield_duplicate_teams() {
        let repo = InMemoryTeamRepository::default();

        let teams = repo.get_teams_by_ids(vec![1, 1]).await.unwrap();
        let ids: Vec<i32> = teams.iter().map(|t| t.id).collect();

        assert_eq!(ids, vec![1, 1]);
    }

    #[tokio::test]
    async fn test_search_matches_location() {
        let repo = InMemoryTeamRepository::default();

        let result = repo
            .fetch_teams(TeamListFilter {
                search: "群馬".to_string(),
                ..TeamListFilter::default()
            })
            .await
            .unwrap();

        assert_eq!(result.total, 1);
        assert_eq!(result.items[0].name, "FLOWLISH GUNMA");
    }
}
