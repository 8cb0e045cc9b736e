pub mod in_memory_news_repository;
pub mod news_repository;
