use chrono::NaiveDate;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
    sea_query::{Expr, Func},
};
use tracing::error;

use crate::domain::{
    common::entities::{PaginatedResult, app_errors::CoreError},
    event::{entities::Event, ports::EventRepository, value_objects::EventListFilter},
};
use crate::entity::tournaments::{Column as TournamentColumn, Entity as TournamentEntity};

#[derive(Debug, Clone)]
pub struct PostgresEventRepository {
    pub db: DatabaseConnection,
}

impl PostgresEventRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Case-insensitive substring match over the searchable event columns.
fn search_condition(term: &str) -> Condition {
    let pattern = format!("%{}%", term.to_lowercase());

    Condition::any()
        .add(Expr::expr(Func::lower(Expr::col(TournamentColumn::Name))).like(pattern.as_str()))
        .add(Expr::expr(Func::lower(Expr::col(TournamentColumn::Location))).like(pattern.as_str()))
        .add(Expr::expr(Func::lower(Expr::col(TournamentColumn::Country))).like(pattern.as_str()))
        .add(
            Expr::expr(Func::lower(Expr::col(TournamentColumn::Description)))
                .like(pattern.as_str()),
        )
}

impl EventRepository for PostgresEventRepository {
    async fn fetch_events(
        &self,
        filter: EventListFilter,
    ) -> Result<PaginatedResult<Event>, CoreError> {
        let mut query = TournamentEntity::find();

        if !filter.search.is_empty() {
            query = query.filter(search_condition(&filter.search));
        }

        if let Some(status) = filter.status {
            // Legacy rows carry the Japanese label, so match both spellings.
            query = query.filter(TournamentColumn::Status.is_in(status.raw_values()));
        }

        let total = query.clone().count(&self.db).await.map_err(|e| {
            error!("Failed to count events: {}", e);
            CoreError::InternalServerError
        })?;

        let offset = filter.page.saturating_sub(1).saturating_mul(filter.page_size);
        let events = query
            .order_by_asc(TournamentColumn::Date)
            .offset(offset)
            .limit(filter.page_size)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch events: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(Event::from)
            .collect::<Vec<Event>>();

        Ok(PaginatedResult::new(events, total, filter.page, filter.page_size))
    }

    async fn get_event_by_id(&self, event_id: i32) -> Result<Option<Event>, CoreError> {
        let event = TournamentEntity::find_by_id(event_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get event by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(Event::from);

        Ok(event)
    }

    async fn fetch_upcoming_events(
        &self,
        limit: u64,
        today: NaiveDate,
    ) -> Result<Vec<Event>, CoreError> {
        let events = TournamentEntity::find()
            .filter(TournamentColumn::Date.gte(today))
            .order_by_asc(TournamentColumn::Date)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch upcoming events: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(Event::from)
            .collect::<Vec<Event>>();

        Ok(events)
    }
}
