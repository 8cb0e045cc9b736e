use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use once_cell::sync::Lazy;

use crate::domain::{
    common::{
        entities::{PaginatedResult, app_errors::CoreError},
        slugify,
    },
    event::{
        entities::{Event, EventStatus},
        ports::EventRepository,
        value_objects::EventListFilter,
    },
};

fn fixture_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn fixture_ts(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

fn fixture_event(
    id: i32,
    name: &str,
    description: &str,
    location: &str,
    country: &str,
    start: NaiveDate,
    end: NaiveDate,
    website_url: Option<&str>,
    participant_team_ids: Vec<i32>,
) -> Event {
    Event {
        id,
        slug: slugify(name, id),
        name: name.to_string(),
        description: Some(description.to_string()),
        location: location.to_string(),
        country: Some(country.to_string()),
        start_date: start,
        end_date: Some(end),
        status: EventStatus::Upcoming,
        image_url: None,
        website_url: website_url.map(str::to_string),
        x_account: Some("3x3league".to_string()),
        instagram_account: Some("3x3.exe".to_string()),
        tiktok_account: None,
        participant_team_ids,
        updated_at: fixture_ts(2026, 2, 24),
    }
}

/// Read-only default dataset, used when no database is configured.
static FIXTURE_EVENTS: Lazy<Vec<Event>> = Lazy::new(|| {
    vec![
        fixture_event(
            1,
            "3x3.EXE SUPER PREMIER 2025-26 ROUND.1（Sendai）",
            "3x3.EXE SUPER PREMIERのラウンド1（仙台開催）。",
            "ゼビオアリーナ仙台（宮城県仙台市太白区あすと長町1-4-10）",
            "日本",
            fixture_date(2026, 2, 28),
            fixture_date(2026, 3, 1),
            Some("https://3x3exe.com/superpremier/schedules/"),
            vec![1, 3, 4],
        ),
        fixture_event(
            2,
            "3x3.EXE SUPER PREMIER 2025-26 ROUND.2（Thailand / Mega Bangna）",
            "3x3.EXE SUPER PREMIERのラウンド2（タイ開催）。",
            "Mega Bangna - Food Walk Plaza（Bang Phli District, Samut Prakan, Thailand）",
            "タイ",
            fixture_date(2026, 3, 21),
            fixture_date(2026, 3, 22),
            Some("https://3x3exe.com/superpremier/schedules/"),
            vec![],
        ),
        fixture_event(
            3,
            "3x3.EXE SUPER PREMIER 2025-26 FINAL（Singapore / Sengkang Grand Mall）",
            "3x3.EXE SUPER PREMIERのファイナルラウンド（シンガポール開催）。",
            "Sengkang Grand Mall（70 Compassvale Bow, Singapore 544692）",
            "シンガポール",
            fixture_date(2026, 3, 28),
            fixture_date(2026, 3, 29),
            Some("https://3x3exe.com/superpremier/schedules/"),
            vec![],
        ),
        fixture_event(
            4,
            "FIBA 3x3 Asia Cup 2026",
            "アジア各国・地域の代表が集結するFIBA公式3x3国際大会（アジアカップ）。",
            "OCBC Square（1 Stadium Drive, Singapore 397629）",
            "シンガポール",
            fixture_date(2026, 4, 1),
            fixture_date(2026, 4, 5),
            Some("https://www.thekallang.com.sg/events/fiba-3x3-asia-cup-26"),
            vec![6],
        ),
        fixture_event(
            5,
            "FIBA 3x3 World Tour Utsunomiya Opener 2026",
            "FIBA 3x3 World Tour 2026シーズン開幕戦（宇都宮）。",
            "栃木県 宇都宮市",
            "日本",
            fixture_date(2026, 4, 25),
            fixture_date(2026, 4, 26),
            None,
            vec![3],
        ),
    ]
});

#[derive(Debug, Clone)]
pub struct InMemoryEventRepository {
    events: Vec<Event>,
}

impl InMemoryEventRepository {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }
}

impl Default for InMemoryEventRepository {
    fn default() -> Self {
        Self::new(FIXTURE_EVENTS.clone())
    }
}

fn matches(event: &Event, filter: &EventListFilter) -> bool {
    if !filter.search.is_empty() {
        let q = filter.search.to_lowercase();
        let hit = event.name.to_lowercase().contains(&q)
            || event.location.to_lowercase().contains(&q)
            || event
                .country
                .as_deref()
                .is_some_and(|c| c.to_lowercase().contains(&q))
            || event
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&q));
        if !hit {
            return false;
        }
    }

    if let Some(status) = filter.status
        && event.status != status
    {
        return false;
    }

    true
}

impl EventRepository for InMemoryEventRepository {
    async fn fetch_events(
        &self,
        filter: EventListFilter,
    ) -> Result<PaginatedResult<Event>, CoreError> {
        let mut matched: Vec<Event> = self
            .events
            .iter()
            .filter(|event| matches(event, &filter))
            .cloned()
            .collect();
        matched.sort_by_key(|event| event.start_date);

        let total = matched.len() as u64;
        let offset = filter.page.saturating_sub(1).saturating_mul(filter.page_size) as usize;
        let items = matched
            .into_iter()
            .skip(offset)
            .take(filter.page_size as usize)
            .collect();

        Ok(PaginatedResult::new(items, total, filter.page, filter.page_size))
    }

    async fn get_event_by_id(&self, event_id: i32) -> Result<Option<Event>, CoreError> {
        Ok(self.events.iter().find(|event| event.id == event_id).cloned())
    }

    async fn fetch_upcoming_events(
        &self,
        limit: u64,
        today: NaiveDate,
    ) -> Result<Vec<Event>, CoreError> {
        let mut upcoming: Vec<Event> = self
            .events
            .iter()
            .filter(|event| event.start_date >= today)
            .cloned()
            .collect();
        upcoming.sort_by_key(|event| event.start_date);
        upcoming.truncate(limit as usize);

        Ok(upcoming)
    }
}
