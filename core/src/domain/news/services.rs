use crate::domain::{
    common::{
        entities::{PaginatedResult, app_errors::CoreError},
        services::Service,
    },
    event::ports::EventRepository,
    news::{
        entities::NewsArticle,
        ports::{NewsRepository, NewsService},
        value_objects::NewsListFilter,
    },
    team::ports::TeamRepository,
    venue::ports::VenueRepository,
};

impl<E, T, N, V> NewsService for Service<E, T, N, V>
where
    E: EventRepository,
    T: TeamRepository,
    N: NewsRepository,
    V: VenueRepository,
{
    async fn list_news(
        &self,
        filter: NewsListFilter,
    ) -> Result<PaginatedResult<NewsArticle>, CoreError> {
        self.news_repository.fetch_news(filter).await
    }

    async fn get_news_by_id(&self, news_id: i32) -> Result<Option<NewsArticle>, CoreError> {
        self.news_repository.get_news_by_id(news_id).await
    }

    async fn get_latest_news(&self, limit: u64) -> Result<Vec<NewsArticle>, CoreError> {
        self.news_repository.fetch_latest_news(limit).await
    }
}
