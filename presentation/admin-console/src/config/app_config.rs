use std::env;
use std::path::PathBuf;

use localization::locale::Locale;

/// Console configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub locale: Locale,
    pub seed_file: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - CATALOG_LOCALE: language of validation messages, one of en, fr, es (default: "en")
    /// - CATALOG_SEED_FILE: JSON array of products created at start-up (default: none)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let locale = match lookup("CATALOG_LOCALE") {
            Some(raw) => raw.trim().parse::<Locale>().unwrap_or_else(|_| {
                tracing::warn!(locale = %raw, "unknown CATALOG_LOCALE, using default");
                Locale::default()
            }),
            None => Locale::default(),
        };

        let seed_file = lookup("CATALOG_SEED_FILE")
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from);

        Self { locale, seed_file }
    }
}
