use crate::domain::{
    common::entities::{PaginatedResult, app_errors::CoreError},
    venue::{entities::Venue, value_objects::VenueListFilter},
};

#[cfg_attr(test, mockall::automock)]
pub trait VenueService: Send + Sync {
    fn list_venues(
        &self,
        filter: VenueListFilter,
    ) -> impl Future<Output = Result<PaginatedResult<Venue>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait VenueRepository: Send + Sync {
    fn fetch_venues(
        &self,
        filter: VenueListFilter,
    ) -> impl Future<Output = Result<PaginatedResult<Venue>, CoreError>> + Send;
}
