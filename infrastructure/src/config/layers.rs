//! figment providers for the four configuration layers
//!
//! Every layer is reduced to a flat [`Dict`] keyed by [`ConfigField::key`]
//! and tagged with the [`Layer`] it came from, so the merged [`Figment`]
//! can report which layer won each field.
//!
//! [`Figment`]: figment::Figment

use figment::value::{Dict, Map, Value};
use figment::{Error, Metadata, Profile, Provider};
use snake_application::EnvironmentSource;
use snake_domain::{ConfigField, DefaultTable, ExplicitArgs, Layer};

/// A single precedence layer as a figment provider.
#[derive(Debug, Clone)]
pub struct LayerProvider {
    layer: Layer,
    dict: Dict,
}

impl LayerProvider {
    pub fn new(layer: Layer, dict: Dict) -> Self {
        Self { layer, dict }
    }

    pub fn defaults(table: &DefaultTable) -> Self {
        let mut dict = Dict::new();
        dict.insert(
            ConfigField::LogLevel.key().to_string(),
            Value::from(table.log_level.as_str().to_string()),
        );
        dict.insert(
            ConfigField::LogDirectory.key().to_string(),
            Value::from(table.log_directory.to_string_lossy().into_owned()),
        );
        dict.insert(
            ConfigField::LogFile.key().to_string(),
            Value::from(table.log_file.clone()),
        );
        dict.insert(ConfigField::Width.key().to_string(), Value::from(table.width));
        dict.insert(ConfigField::Height.key().to_string(), Value::from(table.height));
        Self::new(Layer::Default, dict)
    }

    /// Recognized keys from a parsed configuration file.
    ///
    /// Unknown keys are dropped. A canonical key beats its alias.
    pub fn file(contents: Dict) -> Self {
        let mut dict = Dict::new();
        for (key, value) in contents {
            let Some(field) = ConfigField::from_key(&key) else {
                continue;
            };
            if key == field.key() || !dict.contains_key(field.key()) {
                dict.insert(field.key().to_string(), value);
            }
        }
        Self::new(Layer::File, dict)
    }

    /// Variables that are set, including those set to the empty string.
    pub fn environment(env: &dyn EnvironmentSource) -> Self {
        let dict = ConfigField::ALL
            .into_iter()
            .filter_map(|field| {
                env.var(field.env_var())
                    .map(|value| (field.key().to_string(), Value::from(value)))
            })
            .collect();
        Self::new(Layer::Environment, dict)
    }

    pub fn explicit(args: &ExplicitArgs) -> Self {
        let mut dict = Dict::new();
        let strings = [
            (ConfigField::LogLevel, &args.log_level),
            (ConfigField::LogDirectory, &args.log_directory),
            (ConfigField::LogFile, &args.log_file),
        ];
        for (field, value) in strings {
            if let Some(value) = value {
                dict.insert(field.key().to_string(), Value::from(value.clone()));
            }
        }
        for (field, value) in [
            (ConfigField::Width, args.width),
            (ConfigField::Height, args.height),
        ] {
            if let Some(value) = value {
                dict.insert(field.key().to_string(), Value::from(value));
            }
        }
        Self::new(Layer::Explicit, dict)
    }
}

impl Provider for LayerProvider {
    fn metadata(&self) -> Metadata {
        Metadata::named(self.layer.as_str())
    }

    fn data(&self) -> Result<Map<Profile, Dict>, Error> {
        let mut map = Map::new();
        map.insert(Profile::Default, self.dict.clone());
        Ok(map)
    }
}
