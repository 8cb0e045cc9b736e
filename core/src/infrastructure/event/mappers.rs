use chrono::Utc;

use crate::{
    domain::{
        common::slugify,
        event::entities::{Event, EventStatus},
    },
    entity::tournaments,
};

impl From<&tournaments::Model> for Event {
    fn from(model: &tournaments::Model) -> Self {
        let participant_team_ids: Vec<i32> = model
            .participant_team_ids
            .clone()
            .and_then(|value| serde_json::from_value(value).ok())
            .unwrap_or_default();

        Self {
            id: model.id,
            slug: slugify(&model.name, model.id),
            name: model.name.clone(),
            description: model.description.clone(),
            location: model.location.clone(),
            country: model.country.clone(),
            start_date: model.date,
            end_date: model.end_date,
            status: EventStatus::from_raw(model.status.as_deref()),
            image_url: model.image.clone(),
            website_url: model.website_url.clone(),
            x_account: model.x_account.clone(),
            instagram_account: model.instagram_account.clone(),
            tiktok_account: model.tiktok_account.clone(),
            participant_team_ids,
            updated_at: model.updated_at.map(|dt| dt.to_utc()).unwrap_or_else(Utc::now),
        }
    }
}

impl From<tournaments::Model> for Event {
    fn from(model: tournaments::Model) -> Self {
        Self::from(&model)
    }
}
