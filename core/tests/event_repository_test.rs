mod common;

use triplecourt_core::domain::event::{
    entities::EventStatus, ports::EventRepository, value_objects::EventListFilter,
};
use triplecourt_core::infrastructure::event::repositories::event_repository::PostgresEventRepository;

use common::{date, insert_event, setup_db};

#[tokio::test]
async fn test_fetch_events_orders_by_start_date_and_keeps_total() {
    let db = setup_db().await;
    insert_event(&db, 1, "OPEN 仙台", "仙台市", date(2026, 3, 5), None).await;
    insert_event(&db, 2, "OPEN 前橋", "前橋市", date(2026, 2, 28), None).await;
    insert_event(&db, 3, "FINAL", "東京都", date(2026, 4, 1), None).await;
    let repo = PostgresEventRepository::new(db);

    let page_one = repo
        .fetch_events(EventListFilter {
            page: 1,
            page_size: 2,
            ..EventListFilter::default()
        })
        .await
        .unwrap();

    assert_eq!(page_one.total, 3);
    assert_eq!(page_one.items.len(), 2);
    assert_eq!(page_one.items[0].id, 2);
    assert_eq!(page_one.items[1].id, 1);

    let out_of_range = repo
        .fetch_events(EventListFilter {
            page: 3,
            page_size: 2,
            ..EventListFilter::default()
        })
        .await
        .unwrap();

    assert!(out_of_range.items.is_empty());
    assert_eq!(out_of_range.total, 3);
}

#[tokio::test]
async fn test_huge_page_from_query_string_is_an_empty_page() {
    let db = setup_db().await;
    insert_event(&db, 1, "OPEN 仙台", "仙台市", date(2026, 3, 5), None).await;
    let repo = PostgresEventRepository::new(db);

    let filter =
        EventListFilter::from_query(None, None, Some("18446744073709551615"), Some("100"));
    let result = repo.fetch_events(filter).await.unwrap();

    assert!(result.items.is_empty());
    assert_eq!(result.total, 1);
}

#[tokio::test]
async fn test_search_matches_location() {
    let db = setup_db().await;
    insert_event(&db, 1, "OPEN 第1戦", "ゼビオアリーナ仙台", date(2026, 3, 5), None).await;
    insert_event(&db, 2, "OPEN 第2戦", "前橋市", date(2026, 3, 12), None).await;
    let repo = PostgresEventRepository::new(db);

    let result = repo
        .fetch_events(EventListFilter {
            search: "仙台".to_string(),
            ..EventListFilter::default()
        })
        .await
        .unwrap();

    assert_eq!(result.total, 1);
    assert_eq!(result.items[0].id, 1);
}

#[tokio::test]
async fn test_search_is_case_insensitive() {
    let db = setup_db().await;
    insert_event(&db, 1, "FIBA 3x3 World Tour", "Utsunomiya", date(2026, 5, 1), None).await;
    let repo = PostgresEventRepository::new(db);

    let result = repo
        .fetch_events(EventListFilter {
            search: "fiba".to_string(),
            ..EventListFilter::default()
        })
        .await
        .unwrap();

    assert_eq!(result.total, 1);
}

#[tokio::test]
async fn test_status_filter_accepts_both_spellings() {
    let db = setup_db().await;
    insert_event(&db, 1, "昨季 FINAL", "東京都", date(2025, 9, 1), Some("completed")).await;
    insert_event(&db, 2, "昨季 OPEN", "大阪府", date(2025, 8, 1), Some("終了")).await;
    insert_event(&db, 3, "今季 OPEN", "愛知県", date(2026, 6, 1), Some("upcoming")).await;
    insert_event(&db, 4, "未設定", "北海道", date(2026, 7, 1), None).await;
    let repo = PostgresEventRepository::new(db);

    let completed = repo
        .fetch_events(EventListFilter {
            status: Some(EventStatus::Completed),
            ..EventListFilter::default()
        })
        .await
        .unwrap();

    assert_eq!(completed.total, 2);
    assert!(completed.items.iter().all(|e| e.status == EventStatus::Completed));
}

#[tokio::test]
async fn test_get_event_by_id() {
    let db = setup_db().await;
    insert_event(&db, 7, "OPEN 宇都宮", "宇都宮市", date(2026, 5, 10), None).await;
    let repo = PostgresEventRepository::new(db);

    let found = repo.get_event_by_id(7).await.unwrap();
    let missing = repo.get_event_by_id(99).await.unwrap();

    let event = found.expect("event 7 should exist");
    assert_eq!(event.name, "OPEN 宇都宮");
    // Unset status columns coerce to the default.
    assert_eq!(event.status, EventStatus::Upcoming);
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_fetch_upcoming_events_excludes_past_and_respects_limit() {
    let db = setup_db().await;
    insert_event(&db, 1, "終了済み", "仙台市", date(2026, 2, 28), None).await;
    insert_event(&db, 2, "当日", "東京都", date(2026, 3, 10), None).await;
    insert_event(&db, 3, "来月", "大阪府", date(2026, 4, 1), None).await;
    insert_event(&db, 4, "再来月", "福岡県", date(2026, 5, 1), None).await;
    let repo = PostgresEventRepository::new(db);

    let today = date(2026, 3, 10);
    let all = repo.fetch_upcoming_events(6, today).await.unwrap();
    let capped = repo.fetch_upcoming_events(2, today).await.unwrap();

    // Events starting today still count as upcoming.
    assert_eq!(all.iter().map(|e| e.id).collect::<Vec<_>>(), vec![2, 3, 4]);
    assert_eq!(capped.iter().map(|e| e.id).collect::<Vec<_>>(), vec![2, 3]);
}
