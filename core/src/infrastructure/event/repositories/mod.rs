pub mod event_repository;
pub mod in_memory_event_repository;
