//! Model configuration files.
//!
//! A configuration selects a model by its public name and supplies option overrides:
//!
//! ```toml
//! model = "SPMe"
//! name = "cell A"
//!
//! [options]
//! thermal = "lumped"
//! "particle size" = "distribution"
//! ```

use crate::errors::{RSBMError, RSBMResult};
use crate::model::BatteryModel;
use crate::namespace::ModelNamespace;
use crate::options::ModelOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelConfig {
    /// Public name of the model type
    pub model: String,
    /// Instance name. The model type's full name is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub options: ModelOptions,
}

impl ModelConfig {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            name: None,
            options: ModelOptions::default(),
        }
    }

    pub fn from_toml_str(text: &str) -> RSBMResult<Self> {
        toml::from_str(text).map_err(|e| RSBMError::Config(e.to_string()))
    }

    pub fn from_path(path: impl AsRef<Path>) -> RSBMResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> RSBMResult<String> {
        toml::to_string(self).map_err(|e| RSBMError::Config(e.to_string()))
    }

    /// Resolve the model through `namespace` and build it.
    pub fn build(&self, namespace: &ModelNamespace) -> RSBMResult<Box<dyn BatteryModel>> {
        let model_type = namespace.resolve(&self.model)?;
        let mut model = model_type.build(self.options.clone())?;
        if let Some(name) = &self.name {
            model.set_name(name.clone());
        }
        debug!(
            model = model_type.name(),
            name = model.name(),
            "Built model from configuration"
        );
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{ParticleSize, Thermal};

    #[test]
    fn test_parse_full_config() {
        let config = ModelConfig::from_toml_str(
            r#"
            model = "SPMe"
            name = "cell A"

            [options]
            thermal = "lumped"
            "particle size" = "distribution"
            "#,
        )
        .unwrap();

        assert_eq!(config.model, "SPMe");
        assert_eq!(config.name.as_deref(), Some("cell A"));
        assert_eq!(config.options.thermal, Some(Thermal::Lumped));
        assert_eq!(
            config.options.particle_size,
            Some(ParticleSize::Distribution)
        );
    }

    #[test]
    fn test_options_table_is_optional() {
        let config = ModelConfig::from_toml_str(r#"model = "DFN""#).unwrap();
        assert_eq!(config, ModelConfig::new("DFN"));
    }

    #[test]
    fn test_missing_model_key() {
        let err = ModelConfig::from_toml_str(r#"name = "cell A""#).unwrap_err();
        assert!(matches!(err, RSBMError::Config(_)));
    }

    #[test]
    fn test_round_trip_through_toml() {
        let mut config = ModelConfig::new("MPM");
        config.name = Some("many particles".to_string());
        config.options = ModelOptions::new().with_thermal(Thermal::XFull);

        let text = config.to_toml_string().unwrap();
        assert_eq!(ModelConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_missing_file() {
        let err = ModelConfig::from_path("/nonexistent/model.toml").unwrap_err();
        assert!(matches!(err, RSBMError::Io(_)));
    }
}
