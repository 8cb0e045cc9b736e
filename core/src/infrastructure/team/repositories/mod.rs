pub mod in_memory_team_repository;
pub mod team_repository;
