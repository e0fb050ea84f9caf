use crate::cli::SelectionArgs;
use crate::config::{CONFIG_FILE_NAME, ENV_KEYS, ENV_PREFIX, EsmifyConfig, default_exclude, default_include};
use crate::error::{ConfigError, Result};
use figment::{
    Figment,
    providers::{Env, Format as _, Json, Serialized},
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Values given on the command line; absent fields leave lower layers alone
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct CliOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    include: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exclude: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dry_run: Option<bool>,
}

impl CliOverrides {
    fn from_args(args: &SelectionArgs, dry_run: bool) -> Self {
        Self {
            include: (!args.include.is_empty()).then(|| args.include.clone()),
            exclude: (!args.exclude.is_empty()).then(|| args.exclude.clone()),
            dry_run: dry_run.then_some(true),
        }
    }
}

impl EsmifyConfig {
    /// Load configuration from multiple sources.
    /// Priority: CLI args > environment variables > config file > defaults
    ///
    /// The config file is `--config` if given (and must exist), otherwise
    /// `esmify.config.json` in `cwd` when present.
    pub fn load(args: &SelectionArgs, dry_run: bool, cwd: &Path) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default_config()));

        if let Some(path) = Self::config_file(args.config.as_deref(), cwd)? {
            debug!(path = %path.display(), "loading config file");
            figment = figment.merge(Json::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).only(ENV_KEYS).map(|key| {
            match key.as_str() {
                "dry_run" => "dryRun".into(),
                _ => key.into(),
            }
        }));
        figment = figment.merge(Serialized::defaults(CliOverrides::from_args(args, dry_run)));

        let config: Self = figment.extract().map_err(|e| ConfigError::InvalidValue {
            field: "configuration".to_string(),
            value: e.to_string(),
            hint: format!(
                "Check {CONFIG_FILE_NAME} syntax and field types, and any {ENV_PREFIX}* variables"
            ),
        })?;

        config.validate()?;
        Ok(config)
    }

    fn config_file(explicit: Option<&Path>, cwd: &Path) -> Result<Option<PathBuf>> {
        match explicit {
            Some(path) => {
                let path = crate::commands::utils::resolve_path(path, cwd);
                if !path.is_file() {
                    return Err(ConfigError::NotFound(path).into());
                }
                Ok(Some(path))
            }
            None => {
                let default_path = cwd.join(CONFIG_FILE_NAME);
                Ok(default_path.is_file().then_some(default_path))
            }
        }
    }

    /// Get default configuration values.
    pub fn default_config() -> Self {
        Self {
            include: default_include(),
            exclude: default_exclude(),
            projects: BTreeMap::new(),
            dry_run: false,
        }
    }

    /// Root directory for a run
    ///
    /// `--project` looks the name up in `projects`; otherwise the positional
    /// root, or `cwd`. Relative paths resolve against `cwd`.
    pub fn resolve_root(&self, args: &SelectionArgs, cwd: &Path) -> Result<PathBuf> {
        let root = match (&args.project, &args.root) {
            (Some(name), _) => self.projects.get(name).cloned().ok_or_else(|| {
                ConfigError::ProjectNotFound {
                    name: name.clone(),
                    hint: self.projects_hint(),
                }
            })?,
            (None, Some(root)) => root.clone(),
            (None, None) => return Ok(cwd.to_path_buf()),
        };
        Ok(crate::commands::utils::resolve_path(&root, cwd))
    }

    fn projects_hint(&self) -> String {
        if self.projects.is_empty() {
            format!("Declare projects in {CONFIG_FILE_NAME}: \"projects\": {{ \"name\": \"path\" }}")
        } else {
            let names: Vec<&str> = self.projects.keys().map(String::as_str).collect();
            format!("Configured projects: {}", names.join(", "))
        }
    }
}
