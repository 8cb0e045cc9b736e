use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
    sea_query::{Expr, Func},
};
use tracing::error;

use crate::domain::{
    common::entities::{PaginatedResult, app_errors::CoreError},
    news::{
        entities::{NewsArticle, RelatedTeam},
        ports::NewsRepository,
        value_objects::NewsListFilter,
    },
};
use crate::entity::{
    news::{Column as NewsColumn, Entity as NewsEntity, Model as NewsModel},
    news_teams::{Column as NewsTeamColumn, Entity as NewsTeamEntity},
};

#[derive(Debug, Clone)]
pub struct PostgresNewsRepository {
    pub db: DatabaseConnection,
}

impl PostgresNewsRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fills `related_teams` for each article from the join table, keeping
    /// the stored insertion order.
    async fn attach_related_teams(
        &self,
        models: Vec<NewsModel>,
    ) -> Result<Vec<NewsArticle>, CoreError> {
        let mut articles: Vec<NewsArticle> = models.iter().map(NewsArticle::from).collect();

        let article_ids: Vec<i32> = models.iter().map(|model| model.id).collect();
        if article_ids.is_empty() {
            return Ok(articles);
        }

        let links = NewsTeamEntity::find()
            .filter(NewsTeamColumn::NewsId.is_in(article_ids))
            .order_by_asc(NewsTeamColumn::Position)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch related teams for news: {}", e);
                CoreError::InternalServerError
            })?;

        for article in &mut articles {
            article.related_teams = links
                .iter()
                .filter(|link| link.news_id == article.id)
                .map(RelatedTeam::from)
                .collect();
        }

        Ok(articles)
    }
}

fn search_condition(term: &str) -> Condition {
    let pattern = format!("%{}%", term.to_lowercase());

    Condition::any()
        .add(Expr::expr(Func::lower(Expr::col(NewsColumn::Title))).like(pattern.as_str()))
        .add(Expr::expr(Func::lower(Expr::col(NewsColumn::Summary))).like(pattern.as_str()))
}

impl NewsRepository for PostgresNewsRepository {
    async fn fetch_news(
        &self,
        filter: NewsListFilter,
    ) -> Result<PaginatedResult<NewsArticle>, CoreError> {
        let mut query = NewsEntity::find();

        if !filter.search.is_empty() {
            query = query.filter(search_condition(&filter.search));
        }

        if let Some(team_id) = filter.team_id {
            query = query
                .inner_join(NewsTeamEntity)
                .filter(NewsTeamColumn::TeamId.eq(team_id))
                .distinct();
        }

        let total = query.clone().count(&self.db).await.map_err(|e| {
            error!("Failed to count news: {}", e);
            CoreError::InternalServerError
        })?;

        let offset = filter.page.saturating_sub(1).saturating_mul(filter.page_size);
        let models = query
            .order_by_desc(NewsColumn::Date)
            .offset(offset)
            .limit(filter.page_size)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch news: {}", e);
                CoreError::InternalServerError
            })?;

        let articles = self.attach_related_teams(models).await?;

        Ok(PaginatedResult::new(articles, total, filter.page, filter.page_size))
    }

    async fn get_news_by_id(&self, news_id: i32) -> Result<Option<NewsArticle>, CoreError> {
        let model = NewsEntity::find_by_id(news_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get news by id: {}", e);
                CoreError::InternalServerError
            })?;

        let Some(model) = model else {
            return Ok(None);
        };

        let articles = self.attach_related_teams(vec![model]).await?;

        Ok(articles.into_iter().next())
    }

    async fn fetch_latest_news(&self, limit: u64) -> Result<Vec<NewsArticle>, CoreError> {
        let models = NewsEntity::find()
            .order_by_desc(NewsColumn::Date)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch latest news: {}", e);
                CoreError::InternalServerError
            })?;

        self.attach_related_teams(models).await
    }
}
