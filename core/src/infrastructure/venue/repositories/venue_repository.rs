use sea_orm::{
    Condition, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
    sea_query::{Expr, Func},
};
use tracing::error;

use crate::domain::{
    common::entities::{PaginatedResult, app_errors::CoreError},
    venue::{entities::Venue, ports::VenueRepository, value_objects::VenueListFilter},
};
use crate::entity::venues::{Column as VenueColumn, Entity as VenueEntity};

#[derive(Debug, Clone)]
pub struct PostgresVenueRepository {
    pub db: DatabaseConnection,
}

impl PostgresVenueRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn search_condition(term: &str) -> Condition {
    let pattern = format!("%{}%", term.to_lowercase());

    Condition::any()
        .add(Expr::expr(Func::lower(Expr::col(VenueColumn::Name))).like(pattern.as_str()))
        .add(Expr::expr(Func::lower(Expr::col(VenueColumn::Region))).like(pattern.as_str()))
}

impl VenueRepository for PostgresVenueRepository {
    async fn fetch_venues(
        &self,
        filter: VenueListFilter,
    ) -> Result<PaginatedResult<Venue>, CoreError> {
        let mut query = VenueEntity::find();

        if !filter.search.is_empty() {
            query = query.filter(search_condition(&filter.search));
        }

        let total = query.clone().count(&self.db).await.map_err(|e| {
            error!("Failed to count venues: {}", e);
            CoreError::InternalServerError
        })?;

        let offset = filter.page.saturating_sub(1).saturating_mul(filter.page_size);
        let venues = query
            .order_by_asc(VenueColumn::Name)
            .offset(offset)
            .limit(filter.page_size)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch venues: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(Venue::from)
            .collect::<Vec<Venue>>();

        Ok(PaginatedResult::new(venues, total, filter.page, filter.page_size))
    }
}
