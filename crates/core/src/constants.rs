/// Constants used throughout the failable workspace
// Environment variable names
pub const FAILABLE_TRACE_TRANSLATIONS_VAR: &str = "FAILABLE_TRACE_TRANSLATIONS";
pub const FAILABLE_TRACE_RELEASES_VAR: &str = "FAILABLE_TRACE_RELEASES";

// Values accepted as "disabled" for boolean settings
pub const DISABLED_VALUES: &[&str] = &["0", "false", "off", "no"];

// Values accepted as "enabled" for boolean settings
pub const ENABLED_VALUES: &[&str] = &["1", "true", "on", "yes"];

// Expected size that marks an iteration source as unsized
pub const UNKNOWN_SIZE: u64 = u64::MAX;

// Tracing target for translation boundary events
pub const TRACE_TARGET: &str = "failable";
