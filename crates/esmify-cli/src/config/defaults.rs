pub use esmify::{default_exclude, default_include};

/// Config file looked up in the working directory when `--config` is absent
pub const CONFIG_FILE_NAME: &str = "esmify.config.json";

/// Prefix for environment overrides (`ESMIFY_DRY_RUN`, `ESMIFY_INCLUDE`, ...)
pub const ENV_PREFIX: &str = "ESMIFY_";

/// Config keys that may come from the environment
///
/// `ESMIFY_INCLUDE` and `ESMIFY_EXCLUDE` take a comma-separated glob list.
pub const ENV_KEYS: &[&str] = &["include", "exclude", "dry_run"];
