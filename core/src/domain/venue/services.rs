use crate::domain::{
    common::{
        entities::{PaginatedResult, app_errors::CoreError},
        services::Service,
    },
    event::ports::EventRepository,
    news::ports::NewsRepository,
    team::ports::TeamRepository,
    venue::{
        entities::Venue,
        ports::{VenueRepository, VenueService},
        value_objects::VenueListFilter,
    },
};

impl<E, T, N, V> VenueService for Service<E, T, N, V>
where
    E: EventRepository,
    T: TeamRepository,
    N: NewsRepository,
    V: VenueRepository,
{
    async fn list_venues(
        &self,
        filter: VenueListFilter,
    ) -> Result<PaginatedResult<Venue>, CoreError> {
        self.venue_repository.fetch_venues(filter).await
    }
}
