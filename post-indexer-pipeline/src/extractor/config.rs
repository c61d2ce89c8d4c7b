//! Connection settings for the source database.

use std::fmt;

use crate::errors::PipelineError;

/// Default table holding the posts.
pub const DEFAULT_TABLE: &str = "posts";

/// Connection settings for the PostgreSQL source.
#[derive(Clone)]
pub struct SourceConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    /// Table to read, optionally schema-qualified.
    pub table: String,
}

impl SourceConfig {
    /// Create a config, validating the table name.
    ///
    /// The table name is interpolated into the page query, so only plain
    /// identifiers (`posts`, `forum.posts`) are accepted.
    pub fn new(
        host: impl Into<String>,
        port: u16,
        user: impl Into<String>,
        password: impl Into<String>,
        database: impl Into<String>,
        table: impl Into<String>,
    ) -> Result<Self, PipelineError> {
        let table = table.into();
        if !is_valid_table_name(&table) {
            return Err(PipelineError::config(format!("Invalid table name: {table:?}")));
        }

        Ok(Self {
            host: host.into(),
            port,
            user: user.into(),
            password: password.into(),
            database: database.into(),
            table,
        })
    }

    /// Connection details safe to log.
    pub fn redacted(&self) -> String {
        format!(
            "host={} port={} user={} password=*** dbname={} table={}",
            self.host, self.port, self.user, self.database, self.table
        )
    }
}

impl fmt::Debug for SourceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"***")
            .field("database", &self.database)
            .field("table", &self.table)
            .finish()
    }
}

fn is_valid_table_name(name: &str) -> bool {
    let parts: Vec<&str> = name.split('.').collect();
    parts.len() <= 2 && parts.iter().all(|part| is_identifier(part))
}

fn is_identifier(part: &str) -> bool {
    let mut chars = part.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_table(table: &str) -> Result<SourceConfig, PipelineError> {
        SourceConfig::new("localhost", 5432, "indexer", "hunter2", "chatty", table)
    }

    #[test]
    fn test_accepts_plain_and_qualified_tables() {
        assert!(config_with_table("posts").is_ok());
        assert!(config_with_table("post").is_ok());
        assert!(config_with_table("forum.posts_v2").is_ok());
        assert!(config_with_table("_staging").is_ok());
    }

    #[test]
    fn test_rejects_unsafe_tables() {
        for table in ["", "1posts", "posts; DROP TABLE posts", "a.b.c", "po-sts", "posts."] {
            let err = config_with_table(table).unwrap_err();
            assert!(matches!(err, PipelineError::ConfigError(_)), "{table}");
        }
    }

    #[test]
    fn test_password_is_never_printed() {
        let config = config_with_table("posts").unwrap();
        assert!(!config.redacted().contains("hunter2"));
        assert!(!format!("{config:?}").contains("hunter2"));
        assert!(config.redacted().contains("dbname=chatty"));
    }
}
