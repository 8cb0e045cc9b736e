use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use once_cell::sync::Lazy;

use crate::domain::{
    common::{
        entities::{PaginatedResult, app_errors::CoreError},
        slugify,
    },
    news::{
        entities::{NewsArticle, RelatedTeam},
        ports::NewsRepository,
        value_objects::NewsListFilter,
    },
};

fn fixture_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn fixture_ts(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .unwrap_or_default()
}

fn related(id: i32, name: &str) -> RelatedTeam {
    RelatedTeam {
        id,
        name: name.to_string(),
    }
}

fn fixture_article(
    id: i32,
    title: &str,
    summary: &str,
    source_url: &str,
    published: NaiveDate,
    updated: DateTime<Utc>,
    related_teams: Vec<RelatedTeam>,
) -> NewsArticle {
    NewsArticle {
        id,
        slug: slugify(title, id),
        title: title.to_string(),
        summary: Some(summary.to_string()),
        source_url: Some(source_url.to_string()),
        image_url: None,
        published_at: published,
        updated_at: updated,
        related_teams,
    }
}

/// Read-only default dataset, used when no database is configured.
static FIXTURE_NEWS: Lazy<Vec<NewsArticle>> = Lazy::new(|| {
    vec![
        fixture_article(
            1,
            "3×3女子日本代表がロサンゼルスオリンピックに向けて第1次合宿を実施",
            "JBAが3×3女子日本代表の第1次強化合宿を実施。アジアカップ2026やLA五輪に向けた強化を本格始動した。",
            "https://basket-count.com/article/detail/253060",
            fixture_date(2026, 2, 24),
            fixture_ts(2026, 2, 26, 0),
            vec![],
        ),
        fixture_article(
            2,
            "3×3日本選手権FINAL総括…SHINAGAWA CITYとFLOWLISH GUNMAが初優勝",
            "横浜BUNTAIで開催された3×3日本選手権FINALが終了。男女ともに初優勝の新王者が誕生した。",
            "https://basketballking.jp/news/japan/20260225/597777.html",
            fixture_date(2026, 2, 25),
            fixture_ts(2026, 2, 26, 0),
            vec![
                related(1, "SHINAGAWA CITY 3x3 BASKETBALL CLUB"),
                related(2, "FLOWLISH GUNMA"),
            ],
        ),
        fixture_article(
            3,
            "3x3.EXE SUPER PREMIER 2025-26 ROUND.1が今週末仙台で開幕、国内外12チームが集結",
            "ゼビオアリーナ仙台で開催されるROUND.1に国内外12チームが出場予定。新シーズン最初のSTOPに注目が集まる。",
            "https://3x3exe.com/superpremier/xebio_arena_0228-0301/",
            fixture_date(2026, 2, 26),
            fixture_ts(2026, 2, 26, 8),
            vec![
                related(1, "SHINAGAWA CITY 3x3 BASKETBALL CLUB"),
                related(3, "UTSUNOMIYA BREX.EXE"),
                related(4, "ZETHREE ISHIKAWA.EXE"),
            ],
        ),
        fixture_article(
            4,
            "3x3.EXE SUPER PREMIER ROUND.1仙台大会のロスター発表、各チーム4名体制でエントリー",
            "ROUND.1仙台大会の出場チームがロスターを公開。各チーム4名体制で登録し、初戦に備える。",
            "https://3x3exe.com/superpremier/teams/",
            fixture_date(2026, 2, 26),
            fixture_ts(2026, 2, 26, 8),
            vec![
                related(1, "SHINAGAWA CITY 3x3 BASKETBALL CLUB"),
                related(3, "UTSUNOMIYA BREX.EXE"),
                related(5, "SHONAN SEASIDE.EXE"),
            ],
        ),
    ]
});

#[derive(Debug, Clone)]
pub struct InMemoryNewsRepository {
    articles: Vec<NewsArticle>,
}

impl InMemoryNewsRepository {
    pub fn new(articles: Vec<NewsArticle>) -> Self {
        Self { articles }
    }
}

impl Default for InMemoryNewsRepository {
    fn default() -> Self {
        Self::new(FIXTURE_NEWS.clone())
    }
}

fn matches(article: &NewsArticle, filter: &NewsListFilter) -> bool {
    if !filter.search.is_empty() {
        let q = filter.search.to_lowercase();
        let hit = article.title.to_lowercase().contains(&q)
            || article
                .summary
                .as_deref()
                .is_some_and(|s| s.to_lowercase().contains(&q));
        if !hit {
            return false;
        }
    }

    if let Some(team_id) = filter.team_id
        && !article.related_teams.iter().any(|team| team.id == team_id)
    {
        return false;
    }

    true
}

impl NewsRepository for InMemoryNewsRepository {
    async fn fetch_news(
        &self,
        filter: NewsListFilter,
    ) -> Result<PaginatedResult<NewsArticle>, CoreError> {
        let mut matched: Vec<NewsArticle> = self
            .articles
            .iter()
            .filter(|article| matches(article, &filter))
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.published_at.cmp(&a.published_at));

        let total = matched.len() as u64;
        let offset = filter.page.saturating_sub(1).saturating_mul(filter.page_size) as usize;
        let items = matched
            .into_iter()
            .skip(offset)
            .take(filter.page_size as usize)
            .collect();

        Ok(PaginatedResult::new(items, total, filter.page, filter.page_size))
    }

    async fn get_news_by_id(&self, news_id: i32) -> Result<Option<NewsArticle>, CoreError> {
        Ok(self
            .articles
            .iter()
            .find(|article| article.id == news_id)
            .cloned())
    }

    async fn fetch_latest_news(&self, limit: u64) -> Result<Vec<NewsArticle>, CoreError> {
        let mut latest = self.articles.clone();
        latest.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        latest.truncate(limit as usize);

        Ok(latest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_team_filter_returns_only_related_articles() {
        let repo = InMemoryNewsRepository::default();

        let result = repo
            .fetch_news(NewsListFilter {
                team_id: Some(5),
                ..NewsListFilter::default()
            })
            .await
            .unwrap();

        assert_eq!(result.total, 1);
        assert_eq!(result.items[0].id, 4);
    }

    #[tokio::test]
    async fn test_related_teams_keep_insertion_order() {
        let repo = InMemoryNewsRepository::default();

        let article = repo.get_news_by_id(3).await.unwrap().unwrap();
        let ids: Vec<i32> = article.related_teams.iter().map(|t| t.id).collect();

        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[tokio::test]
    async fn test_latest_news_sorted_newest_first() {
        let repo = InMemoryNewsRepository::default();

        let latest = repo.fetch_latest_news(10).await.unwrap();
        let dates: Vec<NaiveDate> = latest.iter().map(|a| a.published_at).collect();
        let mut sorted = dates.clone();
        sorted.sort_by(|a, b| b.cmp(a));

        assert_eq!(dates, sorted);
        assert_eq!(latest.len(), 4);
    }
}
