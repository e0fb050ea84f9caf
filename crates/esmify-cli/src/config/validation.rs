use crate::config::EsmifyConfig;
use crate::error::{ConfigError, Result};
use esmify::{EsmError, GlobFilter};

/// Validate a single glob pattern for the named config field.
pub fn validate_glob(field: &str, pattern: &str) -> Result<()> {
    if pattern.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: field.to_string(),
            value: "\"\"".to_string(),
            hint: "Glob patterns cannot be empty".to_string(),
        }
        .into());
    }

    match GlobFilter::new(&[pattern], &[] as &[&str]) {
        Ok(_) => Ok(()),
        Err(EsmError::InvalidGlob { reason, .. }) => Err(ConfigError::InvalidValue {
            field: field.to_string(),
            value: pattern.to_string(),
            hint: format!("{reason}; supported syntax is `*`, `**` and brace lists"),
        }
        .into()),
        Err(other) => Err(other.into()),
    }
}

impl EsmifyConfig {
    /// Validate configuration for logical consistency.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.include {
            validate_glob("include", pattern)?;
        }
        for pattern in &self.exclude {
            validate_glob("exclude", pattern)?;
        }

        if self.include.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "include".to_string(),
                value: "[]".to_string(),
                hint: "At least one include glob is required, or no file would be selected"
                    .to_string(),
            }
            .into());
        }

        for (name, root) in &self.projects {
            if name.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "projects".to_string(),
                    value: format!("\"{}\"", name),
                    hint: "Project names cannot be empty".to_string(),
                }
                .into());
            }
            if root.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: format!("projects.{name}"),
                    value: "\"\"".to_string(),
                    hint: "Give the project's root directory".to_string(),
                }
                .into());
            }
        }

        Ok(())
    }
}
