use chrono::Utc;

use crate::domain::{
    common::{
        entities::{PaginatedResult, app_errors::CoreError},
        services::Service,
    },
    event::{
        entities::Event,
        ports::{EventRepository, EventService},
        value_objects::EventListFilter,
    },
    news::ports::NewsRepository,
    team::ports::TeamRepository,
    venue::ports::VenueRepository,
};

impl<E, T, N, V> EventService for Service<E, T, N, V>
where
    E: EventRepository,
    T: TeamRepository,
    N: NewsRepository,
    V: VenueRepository,
{
    async fn list_events(
        &self,
        filter: EventListFilter,
    ) -> Result<PaginatedResult<Event>, CoreError> {
        self.event_repository.fetch_events(filter).await
    }

    async fn get_event_by_id(&self, event_id: i32) -> Result<Option<Event>, CoreError> {
        self.event_repository.get_event_by_id(event_id).await
    }

    async fn get_upcoming_events(&self, limit: u64) -> Result<Vec<Event>, CoreError> {
        // Wall clock is read once per request; the repository never consults it.
        let today = Utc::now().date_naive();

        self.event_repository.fetch_upcoming_events(limit, today).await
    }
}
