#![allow(dead_code)]

use chrono::NaiveDate;
use sea_orm::{
    ActiveValue::{NotSet, Set},
    ConnectionTrait, Database, DatabaseConnection, DbBackend, EntityTrait, Schema,
};

use triplecourt_core::entity::{news, news_teams, teams, tournaments, venues};

/// Fresh in-memory sqlite database with the portal schema created from the
/// entity definitions.
pub async fn setup_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("failed to connect to sqlite");

    let schema = Schema::new(DbBackend::Sqlite);
    let backend = db.get_database_backend();
    let stmts = vec![
        schema.create_table_from_entity(tournaments::Entity),
        schema.create_table_from_entity(teams::Entity),
        schema.create_table_from_entity(news::Entity),
        schema.create_table_from_entity(news_teams::Entity),
        schema.create_table_from_entity(venues::Entity),
    ];

    for stmt in stmts {
        db.execute(backend.build(&stmt))
            .await
            .expect("failed to create table");
    }

    db
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("invalid fixture date")
}

pub async fn insert_event(
    db: &DatabaseConnection,
    id: i32,
    name: &str,
    location: &str,
    start: NaiveDate,
    status: Option<&str>,
) {
    tournaments::Entity::insert(tournaments::ActiveModel {
        id: Set(id),
        name: Set(name.to_string()),
        description: NotSet,
        location: Set(location.to_string()),
        country: NotSet,
        date: Set(start),
        end_date: NotSet,
        status: Set(status.map(str::to_string)),
        image: NotSet,
        website_url: NotSet,
        x_account: NotSet,
        instagram_account: NotSet,
        tiktok_account: NotSet,
        participant_team_ids: NotSet,
        updated_at: NotSet,
    })
    .exec(db)
    .await
    .expect("failed to insert event");
}

pub async fn insert_team(
    db: &DatabaseConnection,
    id: i32,
    name: &str,
    location: &str,
    category: Option<&str>,
) {
    teams::Entity::insert(teams::ActiveModel {
        id: Set(id),
        name: Set(name.to_string()),
        location: Set(location.to_string()),
        category: Set(category.map(str::to_string)),
        image: NotSet,
        website_url: NotSet,
        x_account: NotSet,
        instagram_account: NotSet,
        tiktok_account: NotSet,
        updated_at: NotSet,
    })
    .exec(db)
    .await
    .expect("failed to insert team");
}

pub async fn insert_article(
    db: &DatabaseConnection,
    id: i32,
    title: &str,
    summary: Option<&str>,
    published: NaiveDate,
) {
    news::Entity::insert(news::ActiveModel {
        id: Set(id),
        title: Set(title.to_string()),
        summary: Set(summary.map(str::to_string)),
        source_url: NotSet,
        image: NotSet,
        date: Set(published),
        updated_at: NotSet,
    })
    .exec(db)
    .await
    .expect("failed to insert article");
}

pub async fn link_article_team(
    db: &DatabaseConnection,
    id: i32,
    news_id: i32,
    team_id: i32,
    team_name: &str,
    position: i32,
) {
    news_teams::Entity::insert(news_teams::ActiveModel {
        id: Set(id),
        news_id: Set(news_id),
        team_id: Set(team_id),
        team_name: Set(team_name.to_string()),
        position: Set(position),
    })
    .exec(db)
    .await
    .expect("failed to link article to team");
}

pub async fn insert_venue(db: &DatabaseConnection, id: i32, name: &str, region: &str) {
    venues::Entity::insert(venues::ActiveModel {
        id: Set(id),
        name: Set(name.to_string()),
        region: Set(region.to_string()),
        map_url: NotSet,
        updated_at: NotSet,
    })
    .exec(db)
    .await
    .expect("failed to insert venue");
}
