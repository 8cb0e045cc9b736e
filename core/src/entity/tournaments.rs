use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tournaments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = true)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub location: String,
    pub country: Option<String>,
    pub date: Date,
    pub end_date: Option<Date>,
    pub status: Option<String>,
    pub image: Option<String>,
    pub website_url: Option<String>,
    pub x_account: Option<String>,
    pub instagram_account: Option<String>,
    pub tiktok_account: Option<String>,
    /// JSON array of team ids, presentation order.
    pub participant_team_ids: Option<Json>,
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
