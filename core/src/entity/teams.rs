use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "teams")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = true)]
    pub id: i32,
    pub name: String,
    pub location: String,
    pub category: Option<String>,
    pub image: Option<String>,
    pub website_url: Option<String>,
    pub x_account: Option<String>,
    pub instagram_account: Option<String>,
    pub tiktok_account: Option<String>,
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::news_teams::Entity")]
    NewsTeams,
}

impl Related<super::news_teams::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NewsTeams.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
