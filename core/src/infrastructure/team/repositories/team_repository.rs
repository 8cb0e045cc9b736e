use std::collections::HashMap;

use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
    sea_query::{Expr, Func},
};
use tracing::error;

use crate::domain::{
    common::entities::{PaginatedResult, app_errors::CoreError},
    team::{entities::Team, ports::TeamRepository, value_objects::TeamListFilter},
};
use crate::entity::teams::{Column as TeamColumn, Entity as TeamEntity};

#[derive(Debug, Clone)]
pub struct PostgresTeamRepository {
    pub db: DatabaseConnection,
}

impl PostgresTeamRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn search_condition(term: &str) -> Condition {
    let pattern = format!("%{}%", term.to_lowercase());

    Condition::any()
        .add(Expr::expr(Func::lower(Expr::col(TeamColumn::Name))).like(pattern.as_str()))
        .add(Expr::expr(Func::lower(Expr::col(TeamColumn::Location))).like(pattern.as_str()))
}

impl TeamRepository for PostgresTeamRepository {
    async fn fetch_teams(&self, filter: TeamListFilter) -> Result<PaginatedResult<Team>, CoreError> {
        let mut query = TeamEntity::find();

        if !filter.search.is_empty() {
            query = query.filter(search_condition(&filter.search));
        }

        if let Some(category) = filter.category {
            query = query.filter(TeamColumn::Category.is_in(category.raw_values()));
        }

        let total = query.clone().count(&self.db).await.map_err(|e| {
            error!("Failed to count teams: {}", e);
            CoreError::InternalServerError
        })?;

        let offset = filter.page.saturating_sub(1).saturating_mul(filter.page_size);
        let teams = query
            .order_by_asc(TeamColumn::Name)
            .offset(offset)
            .limit(filter.page_size)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch teams: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(Team::from)
            .collect::<Vec<Team>>();

        Ok(PaginatedResult::new(teams, total, filter.page, filter.page_size))
    }

    async fn get_team_by_id(&self, team_id: i32) -> Result<Option<Team>, CoreError> {
        let team = TeamEntity::find_by_id(team_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get team by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(Team::from);

        Ok(team)
    }

    async fn get_teams_by_ids(&self, team_ids: Vec<i32>) -> Result<Vec<Team>, CoreError> {
        if team_ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = TeamEntity::find()
            .filter(TeamColumn::Id.is_in(team_ids.iter().copied()))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get teams by ids: {}", e);
                CoreError::InternalServerError
            })?;

        let by_id: HashMap<i32, Team> =
            models.iter().map(|model| (model.id, Team::from(model))).collect();

        // Reorder to the caller's id order, dropping ids with no match.
        let teams = team_ids
            .iter()
            .filter_map(|id| by_id.get(id).cloned())
            .collect();

        Ok(teams)
    }

    async fn fetch_all_teams(&self) -> Result<Vec<Team>, CoreError> {
        let teams = TeamEntity::find()
            .order_by_asc(TeamColumn::Name)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch all teams: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(Team::from)
            .collect::<Vec<Team>>();

        Ok(teams)
    }
}
