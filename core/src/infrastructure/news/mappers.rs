use chrono::Utc;

use crate::{
    domain::{
        common::slugify,
        news::entities::{NewsArticle, RelatedTeam},
    },
    entity::{news, news_teams},
};

/// Maps the article row alone; related teams come from the join table and
/// are attached by the repository.
impl From<&news::Model> for NewsArticle {
    fn from(model: &news::Model) -> Self {
        Self {
            id: model.id,
            slug: slugify(&model.title, model.id),
            title: model.title.clone(),
            summary: model.summary.clone(),
            source_url: model.source_url.clone(),
            image_url: model.image.clone(),
            published_at: model.date,
            updated_at: model.updated_at.map(|dt| dt.to_utc()).unwrap_or_else(Utc::now),
            related_teams: Vec::new(),
        }
    }
}

impl From<news::Model> for NewsArticle {
    fn from(model: news::Model) -> Self {
        Self::from(&model)
    }
}

impl From<&news_teams::Model> for RelatedTeam {
    fn from(model: &news_teams::Model) -> Self {
        Self {
            id: model.team_id,
            name: model.team_name.clone(),
        }
    }
}
