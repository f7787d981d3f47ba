//! Configuration resolver with per-field layer precedence

use super::file::read_config_file;
use super::layers::LayerProvider;
use figment::Figment;
use figment::value::Value;
use snake_application::EnvironmentSource;
use snake_domain::{
    CONFIGURATION_FILE_ENV, ConfigError, ConfigField, Configuration, DefaultTable, ExplicitArgs,
    Layer, LogLevel, Resolved, Sources,
};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolves the startup configuration from four ranked layers
///
/// Priority (highest to lowest), decided independently for every field:
/// 1. Explicit call-site arguments
/// 2. Environment variables (`LOG_LEVEL`, `WIDTH`, ...)
/// 3. Configuration file
/// 4. The [`DefaultTable`]
///
/// A field present in a layer wins even when its value is empty; the value
/// is then validated and rejected rather than silently replaced.
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    defaults: DefaultTable,
}

impl Default for ConfigResolver {
    fn default() -> Self {
        Self::new(DefaultTable::default())
    }
}

impl ConfigResolver {
    pub fn new(defaults: DefaultTable) -> Self {
        Self { defaults }
    }

    /// Built-in defaults plus the files looked up when none is named:
    /// `res/settings.json`, then the user's `snake-game/settings.json`.
    pub fn standard() -> Self {
        let mut defaults = DefaultTable::default().with_candidate_file("res/settings.json");
        if let Some(path) = Self::user_config_path() {
            defaults = defaults.with_candidate_file(path);
        }
        Self::new(defaults)
    }

    /// Path of the per-user settings file (`~/.config/snake-game/settings.json`).
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("snake-game").join("settings.json"))
    }

    pub fn defaults(&self) -> &DefaultTable {
        &self.defaults
    }

    /// Resolve every field, reading at most one configuration file.
    ///
    /// `file_path` names the file to load; when `None`, the
    /// `CONFIGURATION_FILE` variable is consulted, then the default table's
    /// candidate files.
    pub fn resolve(
        &self,
        explicit: &ExplicitArgs,
        env: &dyn EnvironmentSource,
        file_path: Option<&Path>,
    ) -> Result<Resolved, ConfigError> {
        let mut figment = Figment::new().merge(LayerProvider::defaults(&self.defaults));

        let file = self.select_file(env, file_path);
        if let Some(path) = &file {
            debug!("Loading configuration file {}", path.display());
            figment = figment.merge(LayerProvider::file(read_config_file(path)?));
        }

        let figment = figment
            .merge(LayerProvider::environment(env))
            .merge(LayerProvider::explicit(explicit));

        let configuration = Configuration {
            log_level: parse_log_level(&lookup(&figment, ConfigField::LogLevel))?,
            log_directory: PathBuf::from(parse_text(
                ConfigField::LogDirectory,
                &lookup(&figment, ConfigField::LogDirectory),
            )?),
            log_file: parse_text(ConfigField::LogFile, &lookup(&figment, ConfigField::LogFile))?,
            surface_width: parse_dimension(ConfigField::Width, &lookup(&figment, ConfigField::Width))?,
            surface_height: parse_dimension(
                ConfigField::Height,
                &lookup(&figment, ConfigField::Height),
            )?,
        };

        let sources = Sources {
            fields: ConfigField::ALL
                .into_iter()
                .map(|field| (field, layer_of(&figment, field)))
                .collect(),
            file,
        };

        Ok(Resolved {
            configuration,
            sources,
        })
    }

    /// Pick the configuration file to read, if any.
    ///
    /// A file named by the caller or the environment is always returned so
    /// that a missing file is reported; candidates are only returned if they
    /// exist.
    pub fn select_file(
        &self,
        env: &dyn EnvironmentSource,
        file_path: Option<&Path>,
    ) -> Option<PathBuf> {
        if let Some(path) = file_path {
            return Some(path.to_path_buf());
        }
        if let Some(path) = env.var(CONFIGURATION_FILE_ENV) {
            return Some(PathBuf::from(path));
        }
        self.defaults
            .candidate_files
            .iter()
            .find(|candidate| candidate.is_file())
            .cloned()
    }
}

/// Merged value for `field`. The default layer guarantees presence.
fn lookup(figment: &Figment, field: ConfigField) -> Value {
    figment
        .find_value(field.key())
        .unwrap_or_else(|_| Value::from(String::new()))
}

fn layer_of(figment: &Figment, field: ConfigField) -> Layer {
    figment
        .find_metadata(field.key())
        .and_then(|metadata| Layer::from_name(&metadata.name))
        .unwrap_or(Layer::Default)
}

/// Render a raw value for error messages.
fn describe(value: &Value) -> String {
    match value {
        Value::String(_, s) => s.clone(),
        Value::Char(_, c) => c.to_string(),
        Value::Bool(_, b) => b.to_string(),
        Value::Num(..) => integer(value)
            .map(|n| n.to_string())
            .unwrap_or_else(|| "<non-integer number>".to_string()),
        Value::Empty(..) => "null".to_string(),
        Value::Array(..) => "<array>".to_string(),
        _ => "<table>".to_string(),
    }
}

fn parse_log_level(value: &Value) -> Result<LogLevel, ConfigError> {
    let field = ConfigField::LogLevel;
    let text = value
        .as_str()
        .ok_or_else(|| ConfigError::invalid(field, describe(value), "expected a string"))?;
    text.parse::<LogLevel>().map_err(|_| {
        ConfigError::invalid(
            field,
            text,
            format!("expected one of: {}", LogLevel::valid_names()),
        )
    })
}

fn parse_text(field: ConfigField, value: &Value) -> Result<String, ConfigError> {
    match value.as_str() {
        Some(text) if !text.trim().is_empty() => Ok(text.to_string()),
        Some(text) => Err(ConfigError::invalid(field, text, "must not be empty")),
        None => Err(ConfigError::invalid(
            field,
            describe(value),
            "expected a string",
        )),
    }
}

/// Integer view of a number, whether figment holds it signed or unsigned.
fn integer(value: &Value) -> Option<i128> {
    value
        .to_u128()
        .and_then(|n| i128::try_from(n).ok())
        .or_else(|| value.to_i128())
}

fn parse_dimension(field: ConfigField, value: &Value) -> Result<u32, ConfigError> {
    let invalid = || ConfigError::invalid(field, describe(value), "expected a positive integer");
    let number = match value {
        Value::String(_, text) => text.trim().parse::<i128>().map_err(|_| invalid())?,
        Value::Num(..) => integer(value).ok_or_else(invalid)?,
        _ => return Err(invalid()),
    };
    u32::try_from(number)
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(invalid)
}
