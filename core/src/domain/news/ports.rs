use crate::domain::{
    common::entities::{PaginatedResult, app_errors::CoreError},
    news::{entities::NewsArticle, value_objects::NewsListFilter},
};

#[cfg_attr(test, mockall::automock)]
pub trait NewsService: Send + Sync {
    fn list_news(
        &self,
        filter: NewsListFilter,
    ) -> impl Future<Output = Result<PaginatedResult<NewsArticle>, CoreError>> + Send;

    fn get_news_by_id(
        &self,
        news_id: i32,
    ) -> impl Future<Output = Result<Option<NewsArticle>, CoreError>> + Send;

    fn get_latest_news(
        &self,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<NewsArticle>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait NewsRepository: Send + Sync {
    fn fetch_news(
        &self,
        filter: NewsListFilter,
    ) -> impl Future<Output = Result<PaginatedResult<NewsArticle>, CoreError>> + Send;

    fn get_news_by_id(
        &self,
        news_id: i32,
    ) -> impl Future<Output = Result<Option<NewsArticle>, CoreError>> + Send;

    /// Most recently published articles, newest first.
    fn fetch_latest_news(
        &self,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<NewsArticle>, CoreError>> + Send;
}
