use crate::domain::{
    common::{
        entities::{PaginatedResult, app_errors::CoreError},
        services::Service,
    },
    event::ports::EventRepository,
    news::ports::NewsRepository,
    team::{
        entities::Team,
        ports::{TeamRepository, TeamService},
        value_objects::TeamListFilter,
    },
    venue::ports::VenueRepository,
};

impl<E, T, N, V> TeamService for Service<E, T, N, V>
where
    E: EventRepository,
    T: TeamRepository,
    N: NewsRepository,
    V: VenueRepository,
{
    async fn list_teams(&self, filter: TeamListFilter) -> Result<PaginatedResult<Team>, CoreError> {
        self.team_repository.fetch_teams(filter).await
    }

    async fn get_team_by_id(&self, team_id: i32) -> Result<Option<Team>, CoreError> {
        self.team_repository.get_team_by_id(team_id).await
    }

    async fn get_teams_by_ids(&self, team_ids: Vec<i32>) -> Result<Vec<Team>, CoreError> {
        self.team_repository.get_teams_by_ids(team_ids).await
    }

    async fn get_all_teams(&self) -> Result<Vec<Team>, CoreError> {
        self.team_repository.fetch_all_teams().await
    }
}
