use crate::domain::{
    event::ports::EventRepository, news::ports::NewsRepository, team::ports::TeamRepository,
    venue::ports::VenueRepository,
};

/// Aggregate service over the four repository ports. The per-feature service
/// traits are implemented for this struct in each feature's `services.rs`.
#[derive(Debug, Clone)]
pub struct Service<E, T, N, V>
where
    E: EventRepository,
    T: TeamRepository,
    N: NewsRepository,
    V: VenueRepository,
{
    pub event_repository: E,
    pub team_repository: T,
    pub news_repository: N,
    pub venue_repository: V,
}

impl<E, T, N, V> Service<E, T, N, V>
where
    E: EventRepository,
    T: TeamRepository,
    N: NewsRepository,
    V: VenueRepository,
{
    pub fn new(
        event_repository: E,
        team_repository: T,
        news_repository: N,
        venue_repository: V,
    ) -> Self {
        Self {
            event_repository,
            team_repository,
            news_repository,
            venue_repository,
        }
    }
}
