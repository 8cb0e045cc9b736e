use chrono::{DateTime, TimeZone, Utc};
use once_cell::sync::Lazy;

use crate::domain::{
    common::{
        entities::{PaginatedResult, app_errors::CoreError},
        slugify,
    },
    venue::{entities::Venue, ports::VenueRepository, value_objects::VenueListFilter},
};

fn fixture_ts(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .unwrap_or_default()
}

fn fixture_venue(id: i32, name: &str, region: &str, updated: DateTime<Utc>) -> Venue {
    Venue {
        id,
        slug: slugify(name, id),
        name: name.to_string(),
        region: region.to_string(),
        map_url: Some(format!("https://maps.google.com/?q={name}+{region}")),
        updated_at: updated,
    }
}

/// Read-only default dataset, used when no database is configured.
static FIXTURE_VENUES: Lazy<Vec<Venue>> = Lazy::new(|| {
    vec![
        fixture_venue(1, "渋谷スポーツパーク", "東京都", fixture_ts(2026, 2, 23, 9)),
        fixture_venue(2, "なんばコート", "大阪府", fixture_ts(2025, 11, 10, 0)),
        fixture_venue(3, "名古屋アウトドアコート", "愛知県", fixture_ts(2025, 9, 5, 0)),
        fixture_venue(4, "大通プラザ", "北海道", fixture_ts(2025, 8, 20, 0)),
        fixture_venue(5, "マリンメッセ福岡", "福岡県", fixture_ts(2025, 7, 15, 0)),
    ]
});

#[derive(Debug, Clone)]
pub struct InMemoryVenueRepository {
    venues: Vec<Venue>,
}

impl InMemoryVenueRepository {
    pub fn new(venues: Vec<Venue>) -> Self {
        Self { venues }
    }
}

impl Default for InMemoryVenueRepository {
    fn default() -> Self {
        Self::new(FIXTURE_VENUES.clone())
    }
}

fn matches(venue: &Venue, filter: &VenueListFilter) -> bool {
    if filter.search.is_empty() {
        return true;
    }

    let q = filter.search.to_lowercase();
    venue.name.to_lowercase().contains(&q) || venue.region.to_lowercase().contains(&q)
}

impl VenueRepository for InMemoryVenueRepository {
    async fn fetch_venues(
        &self,
        filter: VenueListFilter,
    ) -> Result<PaginatedResult<Venue>, CoreError> {
        let mut matched: Vec<Venue> = self
            .venues
            .iter()
            .filter(|venue| matches(venue, &filter))
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
}
