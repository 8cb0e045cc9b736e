use chrono::Utc;

use crate::{
    domain::{
        common::slugify,
        team::entities::{Team, TeamCategory},
    },
    entity::teams,
};

impl From<&teams::Model> for Team {
    fn from(model: &teams::Model) -> Self {
        Self {
            id: model.id,
            slug: slugify(&model.name, model.id),
            name: model.name.clone(),
            location: model.location.clone(),
            category: TeamCategory::from_raw(model.category.as_deref()),
            image_url: model.image.clone(),
            website_url: model.website_url.clone(),
            x_account: model.x_account.clone(),
            instagram_account: model.instagram_account.clone(),
            tiktok_account: model.tiktok_account.clone(),
            updated_at: model.updated_at.map(|dt| dt.to_utc()).unwrap_or_else(Utc::now),
        }
    }
}

impl From<teams::Model> for Team {
    fn from(model: teams::Model) -> Self {
        Self::from(&model)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn test_mapper_coerces_category_and_fills_timestamp() {
        let model = teams::Model {
            id: 3,
            name: "UTSUNOMIYA BREX.EXE".to_string(),
            location: "栃木県".to_string(),
            category: Some("定期練習会".to_string()),
            image: None,
            website_url: None,
            x_account: None,
            instagram_account: None,
            tiktok_account: None,
            updated_at: None,
        };

        let before = Utc::now();
        let team = Team::from(&model);

        assert_eq!(team.category, TeamCategory::GeneralClub);
        assert_eq!(team.slug, "utsunomiya-brex-exe-3");
        assert!(team.updated_at >= before);
    }
}
