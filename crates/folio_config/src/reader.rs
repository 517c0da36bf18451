use std::collections::HashMap;
use std::path::PathBuf;

use config::{Config, Environment, File, FileFormat};
use derive_setters::Setters;
use tracing::debug;

use crate::error::Result;
use crate::settings::FolioConfig;

/// Looked up in the working directory when no explicit path is set
pub const DEFAULT_CONFIG_FILE: &str = "folio.toml";

pub const ENV_PREFIX: &str = "FOLIO";

/// Resolves a [`FolioConfig`] from defaults, a TOML file and the environment.
#[derive(Debug, Clone, Setters)]
#[setters(into)]
pub struct ConfigReader {
    /// Explicit config file; unlike the default file it must exist
    #[setters(strip_option)]
    path: Option<PathBuf>,
    /// Overrides whether a missing config file is an error
    #[setters(strip_option)]
    required: Option<bool>,
    env_prefix: String,
    /// Load a `.env` file into the process environment before reading
    dotenv: bool,
    /// Replaces the process environment as the variable source
    #[setters(strip_option)]
    env_vars: Option<HashMap<String, String>>,
}

impl Default for ConfigReader {
    fn default() -> Self {
        Self {
            path: None,
            required: None,
            env_prefix: ENV_PREFIX.to_string(),
            dotenv: false,
            env_vars: None,
        }
    }
}

impl ConfigReader {
    pub fn read(&self) -> Result<FolioConfig> {
        if self.dotenv {
            dotenvy::dotenv().ok();
        }

        let required = self.required.unwrap_or(self.path.is_some());
        let path = self
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        let environment = Environment::with_prefix(&self.env_prefix)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("prune.preserved_keys")
            .source(
                self.env_vars
                    .clone()
                    .map(|vars| vars.into_iter().collect()),
            );

        let config = Config::builder()
            .add_source(File::from(path.as_path()).format(FileFormat::Toml).required(required))
            .add_source(environment)
            .build()?
            .try_deserialize::<FolioConfig>()?;

        debug!(path = %path.display(), env_prefix = %self.env_prefix, "Loaded configuration");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn reader() -> ConfigReader {
        ConfigReader::default().dotenv(false).env_vars(HashMap::new())
    }

    fn write_config(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio.toml");
        std::fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn test_defaults_without_sources() {
        let dir = tempfile::tempdir().unwrap();
        let fixture = reader().path(dir.path().join("absent.toml")).required(false);

        let actual = fixture.read().unwrap();

        let expected = FolioConfig::default();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let fixture = reader().path(dir.path().join("absent.toml"));

        let actual = fixture.read();

        assert!(actual.is_err());
    }

    #[test]
    fn test_dotenv_is_opt_in() {
        let fixture = ConfigReader::default();
        assert!(!fixture.dotenv);
        assert_eq!(fixture.required, None);
    }

    #[test]
    fn test_reads_toml_file() {
        let (_dir, path) = write_config(
            r#"
            [truncate]
            ellipsis = "…"

            [search]
            max_gap = 5

            [prune]
            preserved_keys = ["_id", "_rev"]

            [instance]
            source = "file"
            id_file = "/var/lib/folio/instance_id"
            "#,
        );

        let actual = reader().path(path).read().unwrap();

        assert_eq!(actual.truncate.ellipsis, "…");
        assert_eq!(actual.search.max_gap, 5);
        assert_eq!(actual.prune.reserved_prefix, '_');
        assert_eq!(actual.prune.preserved_keys, vec!["_id", "_rev"]);
        assert_eq!(actual.instance.source, folio_instance::IdSource::File);
        assert_eq!(
            actual.instance.id_file,
            Some(PathBuf::from("/var/lib/folio/instance_id"))
        );
    }

    #[test]
    fn test_environment_overrides_file() {
        let (_dir, path) = write_config("[search]\nmax_gap = 5\n");
        let vars = HashMap::from([
            ("FOLIO_SEARCH__MAX_GAP".to_string(), "3".to_string()),
            ("FOLIO_PRUNE__PRESERVED_KEYS".to_string(), "_id,_key".to_string()),
            ("OTHER_SEARCH__MAX_GAP".to_string(), "99".to_string()),
        ]);

        let actual = reader().path(path).env_vars(vars).read().unwrap();

        assert_eq!(actual.search.max_gap, 3);
        assert_eq!(actual.prune.preserved_keys, vec!["_id", "_key"]);
    }

    #[test]
    fn test_configured_helpers() {
        let (_dir, path) = write_config(
            r#"
            [truncate]
            ellipsis = "…"
            [search]
            max_gap = 2
            [prune]
            preserved_keys = ["_id", "_rev"]
            "#,
        );
        let fixture = reader().path(path).read().unwrap();

        assert_eq!(fixture.truncator(12).truncate("The quick brown fox"), "The quick…");

        let pattern = fixture.search_pattern("foo bar", false).unwrap();
        assert_eq!(pattern.as_str(), "foo.{0,2}bar");

        let mut doc = json!({ "_id": 1, "_rev": 2, "_tmp": 3, "title": "x" });
        fixture.sanitize(&mut doc);
        assert_eq!(doc, json!({ "_id": 1, "_rev": 2, "title": "x" }));
    }
}
