use crate::domain::common::params::{
    parse_page_param, parse_page_size_param, parse_search_param,
};
use crate::domain::common::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::domain::event::entities::EventStatus;

#[derive(Debug, Clone)]
pub struct EventListFilter {
    pub search: String,
    /// `None` means "show all", distinct from the entity-side default.
    pub status: Option<EventStatus>,
    pub page: u64,
    pub page_size: u64,
}

impl EventListFilter {
    /// Builds a validated filter from raw query-string values.
    pub fn from_query(
        search: Option<&str>,
        status: Option<&str>,
        page: Option<&str>,
        page_size: Option<&str>,
    ) -> Self {
        Self {
            search: parse_search_param(search),
            status: status.and_then(|raw| raw.parse().ok()),
            page: parse_page_param(page),
            page_size: parse_page_size_param(page_size, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE),
        }
    }
}

impl Default for EventListFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_query_degrades_invalid_input() {
        let filter = EventListFilter::from_query(
            Some("  仙台 "),
            Some("not-a-status"),
            Some("-1"),
            Some("9999"),
        );
        assert_eq!(filter.search, "仙台");
        assert_eq!(filter.status, None);
        assert_eq!(filter.page, 1);
        assert_eq!(filter.page_size, MAX_PAGE_SIZE);
    }

    #[test]
    fn test_from_query_accepts_valid_status() {
        let filter = EventListFilter::from_query(None, Some("cancelled"), Some("2"), Some("18"));
        assert_eq!(filter.status, Some(EventStatus::Cancelled));
        assert_eq!(filter.page, 2);
        assert_eq!(filter.page_size, 18);
    }
}
