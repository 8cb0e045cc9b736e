use sea_orm::{Database, DatabaseConnection};
use tracing::{error, info};

use crate::domain::common::{DatabaseConfig, entities::app_errors::CoreError, services::Service};
use crate::infrastructure::{
    event::repositories::{
        event_repository::PostgresEventRepository,
        in_memory_event_repository::InMemoryEventRepository,
    },
    news::repositories::{
        in_memory_news_repository::InMemoryNewsRepository,
        news_repository::PostgresNewsRepository,
    },
    team::repositories::{
        in_memory_team_repository::InMemoryTeamRepository,
        team_repository::PostgresTeamRepository,
    },
    venue::repositories::{
        in_memory_venue_repository::InMemoryVenueRepository,
        venue_repository::PostgresVenueRepository,
    },
};

pub mod event;
pub mod news;
pub mod team;
pub mod venue;

pub type PostgresPortalService = Service<
    PostgresEventRepository,
    PostgresTeamRepository,
    PostgresNewsRepository,
    PostgresVenueRepository,
>;

pub type FixturePortalService = Service<
    InMemoryEventRepository,
    InMemoryTeamRepository,
    InMemoryNewsRepository,
    InMemoryVenueRepository,
>;

pub async fn connect_database(config: &DatabaseConfig) -> Result<DatabaseConnection, CoreError> {
    info!(host = %config.host, database = %config.name, "connecting to database");

    Database::connect(config.connection_url()).await.map_err(|e| {
        error!("Failed to connect to database: {}", e);
        CoreError::DatabaseConnection
    })
}

/// Assembles the service over the database-backed repositories.
pub fn create_service(db: DatabaseConnection) -> PostgresPortalService {
    Service::new(
        PostgresEventRepository::new(db.clone()),
        PostgresTeamRepository::new(db.clone()),
        PostgresNewsRepository::new(db.clone()),
        PostgresVenueRepository::new(db),
    )
}

/// Assembles the service over the embedded fixture dataset, the fallback used
/// when no database is configured.
pub fn create_fixture_service() -> FixturePortalService {
    Service::new(
        InMemoryEventRepository::default(),
        InMemoryTeamRepository::default(),
        InMemoryNewsRepository::default(),
        InMemoryVenueRepository::default(),
    )
}
