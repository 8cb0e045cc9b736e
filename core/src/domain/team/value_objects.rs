use crate::domain::common::params::{
    parse_page_param, parse_page_size_param, parse_search_param,
};
use crate::domain::common::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::domain::team::entities::TeamCategory;

#[derive(Debug, Clone)]
pub struct TeamListFilter {
    pub search: String,
    /// `None` means "show all".
    pub category: Option<TeamCategory>,
    pub page: u64,
    pub page_size: u64,
}

impl TeamListFilter {
    pub fn from_query(
        search: Option<&str>,
        category: Option<&str>,
        page: Option<&str>,
        page_size: Option<&str>,
    ) -> Self {
        Self {
            search: parse_search_param(search),
            category: category.and_then(|raw| raw.parse().ok()),
            page: parse_page_param(page),
            page_size: parse_page_size_param(page_size, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE),
        }
    }
}

impl Default for TeamListFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
