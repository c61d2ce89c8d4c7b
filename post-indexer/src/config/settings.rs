//! Run configuration read from the environment.

use std::env;
use std::str::FromStr;

use crate::IndexingError;
use post_indexer_pipeline::extractor::SourceConfig;
use post_indexer_pipeline::loader::LoaderConfig;
use post_indexer_pipeline::orchestrator::{OrchestratorConfig, DEFAULT_BATCH_SIZE};
use post_indexer_repository::config::DEFAULT_UPDATE_URL;
use post_indexer_repository::SinkConfig;

const DEFAULT_DB_HOST: &str = "localhost";
const DEFAULT_DB_PORT: u16 = 5432;
const DEFAULT_DB_USER: &str = "postgres";
const DEFAULT_DB_NAME: &str = "chatty";
const DEFAULT_RECOVERY_DELAY_SECS: u64 = 30;

/// Everything a run needs, fixed at startup.
#[derive(Debug, Clone)]
pub struct IndexerConfig {
    pub source: SourceConfig,
    pub sink: SinkConfig,
    pub orchestrator: OrchestratorConfig,
    pub loader: LoaderConfig,
}

impl IndexerConfig {
    /// Read the configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `DB_HOST`: source host (default: localhost)
    /// - `DB_PORT`: source port (default: 5432)
    /// - `DB_USER`: source user (default: postgres)
    /// - `DB_PASSWORD`: source password (default: empty)
    /// - `DB_NAME`: source database (default: chatty)
    /// - `DB_TABLE`: posts table, optionally schema-qualified (default: posts)
    /// - `SOLR_UPDATE_URL`: update handler URL (default: http://localhost:8983/solr/unstructured_posts/update)
    /// - `BATCH_SIZE`: rows per page and per batch (default: 1000)
    /// - `RECOVERY_DELAY_SECS`: pause before retrying a failed batch (default: 30)
    pub fn from_env() -> Result<Self, IndexingError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, IndexingError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let port = parse_or(&lookup, "DB_PORT", DEFAULT_DB_PORT)?;
        let source = SourceConfig::new(
            var("DB_HOST", DEFAULT_DB_HOST),
            port,
            var("DB_USER", DEFAULT_DB_USER),
            var("DB_PASSWORD", ""),
            var("DB_NAME", DEFAULT_DB_NAME),
            var("DB_TABLE", post_indexer_pipeline::extractor::DEFAULT_TABLE),
        )?;

        let sink = SinkConfig::new(&var("SOLR_UPDATE_URL", DEFAULT_UPDATE_URL))?;

        let batch_size: usize = parse_or(&lookup, "BATCH_SIZE", DEFAULT_BATCH_SIZE)?;
        if batch_size == 0 {
            return Err(IndexingError::config("BATCH_SIZE must be at least 1"));
        }

        let recovery_delay_secs: u64 =
            parse_or(&lookup, "RECOVERY_DELAY_SECS", DEFAULT_RECOVERY_DELAY_SECS)?;

        Ok(Self {
            source,
            sink,
            orchestrator: OrchestratorConfig {
                batch_size,
                ..Default::default()
            },
            loader: LoaderConfig {
                recovery_delay_ms: recovery_delay_secs.saturating_mul(1000),
            },
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, IndexingError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| IndexingError::config(format!("Invalid {key} {raw:?}: {e}"))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<IndexerConfig, IndexingError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        IndexerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.source.host, "localhost");
        assert_eq!(config.source.port, 5432);
        assert_eq!(config.source.database, "chatty");
        assert_eq!(config.source.table, "posts");
        assert_eq!(config.sink.update_url.as_str(), DEFAULT_UPDATE_URL);
        assert_eq!(config.orchestrator.batch_size, 1000);
        assert_eq!(config.orchestrator.start_cursor, -1);
        assert_eq!(config.loader.recovery_delay_ms, 30_000);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("DB_HOST", "db.internal"),
            ("DB_PORT", "6543"),
            ("DB_USER", "indexer"),
            ("DB_PASSWORD", "s3cret"),
            ("DB_NAME", "forum"),
            ("DB_TABLE", "public.post"),
            ("SOLR_UPDATE_URL", "http://solr:8983/solr/posts/update"),
            ("BATCH_SIZE", "250"),
            ("RECOVERY_DELAY_SECS", "5"),
        ])
        .unwrap();

        assert_eq!(config.source.host, "db.internal");
        assert_eq!(config.source.port, 6543);
        assert_eq!(config.source.user, "indexer");
        assert_eq!(config.source.password, "s3cret");
        assert_eq!(config.source.table, "public.post");
        assert_eq!(config.sink.update_url.host_str(), Some("solr"));
        assert_eq!(config.orchestrator.batch_size, 250);
        assert_eq!(config.loader.recovery_delay_ms, 5_000);
    }

    #[test]
    fn test_invalid_values() {
        let cases: &[(&str, &str)] = &[
            ("DB_PORT", "postgres"),
            ("DB_PORT", "70000"),
            ("BATCH_SIZE", "0"),
            ("BATCH_SIZE", "-10"),
            ("RECOVERY_DELAY_SECS", "soon"),
            ("DB_TABLE", "posts; --"),
            ("SOLR_UPDATE_URL", "localhost:8983"),
        ];

        for (key, value) in cases {
            let err = config_from(&[(key, value)]).unwrap_err();
            assert_eq!(err.exit_code(), crate::EXIT_CONFIG, "{key}={value}");
        }
    }

    #[test]
    fn test_bad_update_url_is_reported_as_configuration() {
        let err = config_from(&[("SOLR_UPDATE_URL", "ftp://solr/update")]).unwrap_err();

        assert!(matches!(
            err,
            IndexingError::SinkError(post_indexer_repository::SinkError::ConfigError(_))
        ));
        assert!(!err.to_string().contains("Connection error"), "{err}");
        assert_eq!(err.exit_code(), crate::EXIT_CONFIG);
    }
}
