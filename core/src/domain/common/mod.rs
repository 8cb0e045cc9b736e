pub mod entities;
pub mod params;
pub mod services;

/// Default number of items per list page when the caller supplies none.
pub const DEFAULT_PAGE_SIZE: u64 = 20;

/// Hard upper bound on the page size a caller may request.
pub const MAX_PAGE_SIZE: u64 = 100;

#[derive(Clone, Debug)]
pub struct PortalConfig {
    pub database: DatabaseConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
}

impl DatabaseConfig {
    pub fn connection_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.name
        )
    }
}

/// Builds the URL-safe identifier for an entity: lowercased name with runs of
/// non-ASCII-alphanumeric characters collapsed to a single hyphen, trimmed,
/// with `-{id}` appended. The id suffix keeps slugs unique when names collide.
///
/// Only ASCII characters survive, so a fully Japanese name slugs to `"-{id}"`.
pub fn slugify(text: &str, id: i32) -> String {
    let mut base = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for c in text.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !base.is_empty() {
                base.push('-');
            }
            base.push(c);
            pending_hyphen = false;
        } else {
            pending_hyphen = true;
        }
    }

    format!("{base}-{id}")
}
