use crate::domain::common::params::{
    parse_optional_id_param, parse_page_param, parse_page_size_param, parse_search_param,
};
use crate::domain::common::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

#[derive(Debug, Clone)]
pub struct NewsListFilter {
    pub search: String,
    /// Restricts results to articles referencing this team. `None` means
    /// "show all" and is never conflated with zero.
    pub team_id: Option<i32>,
    pub page: u64,
    pub page_size: u64,
}

impl NewsListFilter {
    pub fn from_query(
        search: Option<&str>,
        team_id: Option<&str>,
        page: Option<&str>,
        page_size: Option<&str>,
    ) -> Self {
        Self {
            search: parse_search_param(search),
            team_id: parse_optional_id_param(team_id),
            page: parse_page_param(page),
            page_size: parse_page_size_param(page_size, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE),
        }
    }
}

impl Default for NewsListFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            team_id: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
