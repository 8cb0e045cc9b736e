pub mod news;
pub mod news_teams;
pub mod teams;
pub mod tournaments;
pub mod venues;
