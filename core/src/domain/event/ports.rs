use chrono::NaiveDate;

use crate::domain::{
    common::entities::{PaginatedResult, app_errors::CoreError},
    event::{entities::Event, value_objects::EventListFilter},
};

#[cfg_attr(test, mockall::automock)]
pub trait EventService: Send + Sync {
    fn list_events(
        &self,
        filter: EventListFilter,
    ) -> impl Future<Output = Result<PaginatedResult<Event>, CoreError>> + Send;

    fn get_event_by_id(
        &self,
        event_id: i32,
    ) -> impl Future<Output = Result<Option<Event>, CoreError>> + Send;

    fn get_upcoming_events(
        &self,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<Event>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait EventRepository: Send + Sync {
    fn fetch_events(
        &self,
        filter: EventListFilter,
    ) -> impl Future<Output = Result<PaginatedResult<Event>, CoreError>> + Send;

    fn get_event_by_id(
        &self,
        event_id: i32,
    ) -> impl Future<Output = Result<Option<Event>, CoreError>> + Send;

    /// Events with a start date on or after `today`, ascending, first `limit`.
    fn fetch_upcoming_events(
        &self,
        limit: u64,
        today: NaiveDate,
    ) -> impl Future<Output = Result<Vec<Event>, CoreError>> + Send;
}
