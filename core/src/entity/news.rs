use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "news")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = true)]
    pub id: i32,
    pub title: String,
    pub summary: Option<String>,
    pub source_url: Option<String>,
    pub image: Option<String>,
    /// Publication date.
    pub date: Date,
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
