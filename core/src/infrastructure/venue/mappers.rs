use chrono::Utc;

use crate::{
    domain::{common::slugify, venue::entities::Venue},
    entity::venues,
};

impl From<&venues::Model> for Venue {
    fn from(model: &venues::Model) -> Self {
        Self {
            id: model.id,
            slug: slugify(&model.name, model.id),
            name: model.name.clone(),
            region: model.region.clone(),
            map_url: model.map_url.clone(),
            updated_at: model.updated_at.map(|dt| dt.to_utc()).unwrap_or_else(Utc::now),
        }
    }
}

impl From<venues::Model> for Venue {
    fn from(model: venues::Model) -> Self {
        Self::from(&model)
    }
}
