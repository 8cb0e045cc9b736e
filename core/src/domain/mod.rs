pub mod common;
pub mod event;
pub mod news;
pub mod team;
pub mod venue;
