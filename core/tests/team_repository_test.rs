mod common;

use triplecourt_core::domain::team::{
    entities::TeamCategory, ports::TeamRepository, value_objects::TeamListFilter,
};
use triplecourt_core::infrastructure::team::repositories::team_repository::PostgresTeamRepository;

use common::{insert_team, setup_db};

#[tokio::test]
async fn test_fetch_teams_orders_by_name() {
    let db = setup_db().await;
    insert_team(&db, 1, "UTSUNOMIYA BREX.EXE", "宇都宮市", Some("EXE")).await;
    insert_team(&db, 2, "FLOWLISH GUNMA", "前橋市", None).await;
    insert_team(&db, 3, "SHINAGAWA CC", "品川区", None).await;
    let repo = PostgresTeamRepository::new(db);

    let result = repo.fetch_teams(TeamListFilter::default()).await.unwrap();

    assert_eq!(result.total, 3);
    let names: Vec<&str> = result.items.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["FLOWLISH GUNMA", "SHINAGAWA CC", "UTSUNOMIYA BREX.EXE"]);
}

#[tokio::test]
async fn test_category_filter_accepts_both_spellings() {
    let db = setup_db().await;
    insert_team(&db, 1, "UTSUNOMIYA BREX.EXE", "宇都宮市", Some("EXE")).await;
    insert_team(&db, 2, "SHONAN SEASIDE.EXE", "藤沢市", Some("exhibition-squad")).await;
    insert_team(&db, 3, "日本代表", "東京都", Some("代表")).await;
    insert_team(&db, 4, "未分類クラブ", "札幌市", None).await;
    let repo = PostgresTeamRepository::new(db);

    let squads = repo
        .fetch_teams(TeamListFilter {
            category: Some(TeamCategory::ExhibitionSquad),
            ..TeamListFilter::default()
        })
        .await
        .unwrap();

    assert_eq!(squads.total, 2);
    assert!(squads.items.iter().all(|t| t.category == TeamCategory::ExhibitionSquad));
}

#[tokio::test]
async fn test_search_matches_location() {
    let db = setup_db().await;
    insert_team(&db, 1, "FLOWLISH GUNMA", "群馬県前橋市", None).await;
    insert_team(&db, 2, "SHINAGAWA CC", "東京都品川区", None).await;
    let repo = PostgresTeamRepository::new(db);

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

#[tokio::test]
async fn test_get_teams_by_ids_preserves_request_order() {
    let db = setup_db().await;
    insert_team(&db, 1, "ALPHA", "東京都", None).await;
    insert_team(&db, 2, "BRAVO", "大阪府", None).await;
    insert_team(&db, 3, "CHARLIE", "愛知県", None).await;
    let repo = PostgresTeamRepository::new(db);

    let teams = repo.get_teams_by_ids(vec![3, 1, 2]).await.unwrap();

    assert_eq!(teams.iter().map(|t| t.id).collect::<Vec<_>>(), vec![3, 1, 2]);
}

#[tokio::test]
async fn test_get_teams_by_ids_drops_missing_ids() {
    let db = setup_db().await;
    insert_team(&db, 1, "ALPHA", "東京都", None).await;
    insert_team(&db, 2, "BRAVO", "大阪府", None).await;
    let repo = PostgresTeamRepository::new(db);

    let teams = repo.get_teams_by_ids(vec![2, 99, 1]).await.unwrap();

    assert_eq!(teams.iter().map(|t| t.id).collect::<Vec<_>>(), vec![2, 1]);
}

#[tokio::test]
async fn test_get_teams_by_ids_empty_input() {
    let db = setup_db().await;
    let repo = PostgresTeamRepository::new(db);

    let teams = repo.get_teams_by_ids(Vec::new()).await.unwrap();

    assert!(teams.is_empty());
}

#[tokio::test]
async fn test_get_team_by_id_coerces_unknown_category() {
    let db = setup_db().await;
    insert_team(&db, 5, "定期練習会チーム", "名古屋市", Some("定期練習会")).await;
    let repo = PostgresTeamRepository::new(db);

    let team = repo.get_team_by_id(5).await.unwrap().expect("team 5 should exist");

    assert_eq!(team.category, TeamCategory::GeneralClub);
}

#[tokio::test]
async fn test_fetch_all_teams_returns_everything_sorted() {
    let db = setup_db().await;
    insert_team(&db, 1, "ZETHREE ISHIKAWA.EXE", "金沢市", Some("EXE")).await;
    insert_team(&db, 2, "FLOWLISH GUNMA", "前橋市", None).await;
    let repo = PostgresTeamRepository::new(db);

    let teams = repo.fetch_all_teams().await.unwrap();

    assert_eq!(teams.len(), 2);
    assert_eq!(teams[0].name, "FLOWLISH GUNMA");
}
