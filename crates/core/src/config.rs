//! Settings for translation boundary diagnostics
use crate::constants::{
    DISABLED_VALUES, ENABLED_VALUES, FAILABLE_TRACE_RELEASES_VAR, FAILABLE_TRACE_TRANSLATIONS_VAR,
};
use crate::errors::{Error, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

static GLOBAL_SETTINGS: Lazy<Settings> = Lazy::new(|| match Settings::from_env() {
    Ok(settings) => settings,
    Err(e) => {
        tracing::warn!("Ignoring invalid failable settings: {e}");
        Settings::default()
    }
});

/// Source of settings for debugging and precedence tracking
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default configuration
    #[default]
    Default,
    /// Environment variable
    EnvironmentVariable(String),
    /// Set programmatically
    Explicit,
}

/// Diagnostics settings for translation boundaries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Emit a debug event whenever a declared failure is translated
    pub trace_translations: bool,
    /// Emit a warning whenever a scoped resource fails to release
    pub trace_releases: bool,
    /// Where these settings came from
    #[serde(skip)]
    pub source: ConfigSource,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            trace_translations: true,
            trace_releases: true,
            source: ConfigSource::Default,
        }
    }
}

impl Settings {
    /// Create settings with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether translations are traced
    pub fn with_trace_translations(mut self, enabled: bool) -> Self {
        self.trace_translations = enabled;
        self.source = ConfigSource::Explicit;
        self
    }

    /// Set whether release failures are traced
    pub fn with_trace_releases(mut self, enabled: bool) -> Self {
        self.trace_releases = enabled;
        self.source = ConfigSource::Explicit;
        self
    }

    /// Process-wide settings, read from the environment on first use
    pub fn global() -> &'static Settings {
        &GLOBAL_SETTINGS
    }

    /// Load settings from environment variables, falling back to defaults
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load settings through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();
        let mut sources = Vec::new();

        if let Some(value) = lookup(FAILABLE_TRACE_TRANSLATIONS_VAR) {
            settings.trace_translations = parse_flag(FAILABLE_TRACE_TRANSLATIONS_VAR, &value)?;
            sources.push(FAILABLE_TRACE_TRANSLATIONS_VAR);
        }

        if let Some(value) = lookup(FAILABLE_TRACE_RELEASES_VAR) {
            settings.trace_releases = parse_flag(FAILABLE_TRACE_RELEASES_VAR, &value)?;
            sources.push(FAILABLE_TRACE_RELEASES_VAR);
        }

        if !sources.is_empty() {
            settings.source = ConfigSource::EnvironmentVariable(sources.join(","));
        }

        Ok(settings)
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool> {
    let normalized = value.trim().to_lowercase();
    if ENABLED_VALUES.contains(&normalized.as_str()) {
        Ok(true)
    } else if DISABLED_VALUES.contains(&normalized.as_str()) {
        Ok(false)
    } else {
        Err(Error::configuration(format!(
            "{name} must be one of {ENABLED_VALUES:?} or {DISABLED_VALUES:?}, got '{value}'"
        )))
    }
}
