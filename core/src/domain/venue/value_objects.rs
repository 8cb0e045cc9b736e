use crate::domain::common::params::{
    parse_page_param, parse_page_size_param, parse_search_param,
};
use crate::domain::common::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

#[derive(Debug, Clone)]
pub struct VenueListFilter {
    pub search: String,
    pub page: u64,
    pub page_size: u64,
}

impl VenueListFilter {
    pub fn from_query(
        search: Option<&str>,
        page: Option<&str>,
        page_size: Option<&str>,
    ) -> Self {
        Self {
            search: parse_search_param(search),
            page: parse_page_param(page),
            page_size: parse_page_size_param(page_size, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE),
        }
    }
}

impl Default for VenueListFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
