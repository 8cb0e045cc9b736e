use crate::domain::{
    common::entities::{PaginatedResult, app_errors::CoreError},
    team::{entities::Team, value_objects::TeamListFilter},
};

#[cfg_attr(test, mockall::automock)]
pub trait TeamService: Send + Sync {
    fn list_teams(
        &self,
        filter: TeamListFilter,
    ) -> impl Future<Output = Result<PaginatedResult<Team>, CoreError>> + Send;

    fn get_team_by_id(
        &self,
        team_id: i32,
    ) -> impl Future<Output = Result<Option<Team>, CoreError>> + Send;

    fn get_teams_by_ids(
        &self,
        team_ids: Vec<i32>,
    ) -> impl Future<Output = Result<Vec<Team>, CoreError>> + Send;

    fn get_all_teams(&self) -> impl Future<Output = Result<Vec<Team>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait TeamRepository: Send + Sync {
    fn fetch_teams(
        &self,
        filter: TeamListFilter,
    ) -> impl Future<Output = Result<PaginatedResult<Team>, CoreError>> + Send;

    fn get_team_by_id(
        &self,
        team_id: i32,
    ) -> impl Future<Output = Result<Option<Team>, CoreError>> + Send;

    /// Returns teams in the order of `team_ids`, dropping ids with no match.
    /// An empty input resolves without a storage round trip.
    fn get_teams_by_ids(
        &self,
        team_ids: Vec<i32>,
    ) -> impl Future<Output = Result<Vec<Team>, CoreError>> + Send;

    fn fetch_all_teams(&self) -> impl Future<Output = Result<Vec<Team>, CoreError>> + Send;
}
