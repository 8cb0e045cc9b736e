pub mod in_memory_venue_repository;
pub mod venue_repository;
