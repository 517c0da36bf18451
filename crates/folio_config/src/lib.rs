//! Layered configuration for the folio helpers.
//!
//! Values are resolved from built-in defaults, then an optional TOML file,
//! then `FOLIO_`-prefixed environment variables (`__` separates nested keys,
//! e.g. `FOLIO_SEARCH__MAX_GAP=10`).

mod error;
mod reader;
mod settings;

pub use error::{Error, Result};
pub use reader::{ConfigReader, DEFAULT_CONFIG_FILE, ENV_PREFIX};
pub use settings::FolioConfig;
