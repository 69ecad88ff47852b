//! User-facing model options.
//!
//! Options come in two forms:
//! - [`ModelOptions`]: the overrides a user asks for. Every field is optional and the
//!   struct deserialises from TOML using the option names as keys
//!   (`"particle size" = "distribution"`).
//! - [`ResolvedOptions`]: the concrete option set a model is built with, obtained by
//!   merging the overrides onto the defaults of that model type.
//!
//! ```rust
//! use rsbm_core::options::{ModelOptions, ParticleSize, ResolvedOptions, Thermal};
//!
//! let overrides = ModelOptions::from_toml_str(r#"thermal = "lumped""#).unwrap();
//! let resolved = overrides.resolve(ResolvedOptions::default());
//!
//! assert_eq!(resolved.thermal, Thermal::Lumped);
//! assert_eq!(resolved.particle_size, ParticleSize::Single);
//! ```

use crate::errors::{RSBMError, RSBMResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Thermal submodel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Thermal {
    #[default]
    Isothermal,
    Lumped,
    /// Temperature resolved through the thickness of the cell.
    XFull,
}

impl fmt::Display for Thermal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Thermal::Isothermal => write!(f, "isothermal"),
            Thermal::Lumped => write!(f, "lumped"),
            Thermal::XFull => write!(f, "x-full"),
        }
    }
}

/// Treatment of lithium transport inside electrode particles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Particle {
    #[default]
    #[serde(rename = "Fickian diffusion")]
    FickianDiffusion,
    #[serde(rename = "uniform profile")]
    UniformProfile,
    #[serde(rename = "quadratic profile")]
    QuadraticProfile,
    #[serde(rename = "quartic profile")]
    QuarticProfile,
}

impl fmt::Display for Particle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Particle::FickianDiffusion => write!(f, "Fickian diffusion"),
            Particle::UniformProfile => write!(f, "uniform profile"),
            Particle::QuadraticProfile => write!(f, "quadratic profile"),
            Particle::QuarticProfile => write!(f, "quartic profile"),
        }
    }
}

/// Whether each electrode is represented by one particle size or a distribution of sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticleSize {
    #[default]
    Single,
    Distribution,
}

impl fmt::Display for ParticleSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParticleSize::Single => write!(f, "single"),
            ParticleSize::Distribution => write!(f, "distribution"),
        }
    }
}

/// Formulation of the electrode/electrolyte interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurfaceForm {
    #[default]
    #[serde(rename = "false")]
    None,
    Differential,
    Algebraic,
}

impl fmt::Display for SurfaceForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceForm::None => write!(f, "false"),
            SurfaceForm::Differential => write!(f, "differential"),
            SurfaceForm::Algebraic => write!(f, "algebraic"),
        }
    }
}

/// Number of spatial dimensions resolved in the current collectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Dimensionality {
    #[default]
    Zero,
    One,
    Two,
}

impl TryFrom<u8> for Dimensionality {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Dimensionality::Zero),
            1 => Ok(Dimensionality::One),
            2 => Ok(Dimensionality::Two),
            other => Err(format!("dimensionality must be 0, 1 or 2, got {other}")),
        }
    }
}

impl From<Dimensionality> for u8 {
    fn from(value: Dimensionality) -> Self {
        match value {
            Dimensionality::Zero => 0,
            Dimensionality::One => 1,
            Dimensionality::Two => 2,
        }
    }
}

impl fmt::Display for Dimensionality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}

/// Option overrides requested by a user.
///
/// Unset fields fall back to the model's defaults when resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModelOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thermal: Option<Thermal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub particle: Option<Particle>,
    #[serde(
        rename = "particle size",
        alias = "particle_size",
        skip_serializing_if = "Option::is_none"
    )]
    pub particle_size: Option<ParticleSize>,
    #[serde(
        rename = "surface form",
        alias = "surface_form",
        skip_serializing_if = "Option::is_none"
    )]
    pub surface_form: Option<SurfaceForm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensionality: Option<Dimensionality>,
}

impl ModelOptions {
    /// Overrides with nothing set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse overrides from a TOML table.
    pub fn from_toml_str(text: &str) -> RSBMResult<Self> {
        toml::from_str(text).map_err(|e| RSBMError::Config(e.to_string()))
    }

    pub fn with_thermal(mut self, thermal: Thermal) -> Self {
        self.thermal = Some(thermal);
        self
    }

    pub fn with_particle(mut self, particle: Particle) -> Self {
        self.particle = Some(particle);
        self
    }

    pub fn with_particle_size(mut self, particle_size: ParticleSize) -> Self {
        self.particle_size = Some(particle_size);
        self
    }

    pub fn with_surface_form(mut self, surface_form: SurfaceForm) -> Self {
        self.surface_form = Some(surface_form);
        self
    }

    pub fn with_dimensionality(mut self, dimensionality: Dimensionality) -> Self {
        self.dimensionality = Some(dimensionality);
        self
    }

    /// True if no option is overridden.
    pub fn is_empty(&self) -> bool {
        self.overrides().is_empty()
    }

    /// The overridden options as `(option name, value)` pairs, in table order.
    pub fn overrides(&self) -> Vec<(&'static str, String)> {
        let mut result = Vec::new();
        if let Some(v) = self.thermal {
            result.push(("thermal", v.to_string()));
        }
        if let Some(v) = self.particle {
            result.push(("particle", v.to_string()));
        }
        if let Some(v) = self.particle_size {
            result.push(("particle size", v.to_string()));
        }
        if let Some(v) = self.surface_form {
            result.push(("surface form", v.to_string()));
        }
        if let Some(v) = self.dimensionality {
            result.push(("dimensionality", v.to_string()));
        }
        result
    }

    /// Merge the overrides onto `defaults`.
    pub fn resolve(&self, defaults: ResolvedOptions) -> ResolvedOptions {
        ResolvedOptions {
            thermal: self.thermal.unwrap_or(defaults.thermal),
            particle: self.particle.unwrap_or(defaults.particle),
            particle_size: self.particle_size.unwrap_or(defaults.particle_size),
            surface_form: self.surface_form.unwrap_or(defaults.surface_form),
            dimensionality: self.dimensionality.unwrap_or(defaults.dimensionality),
        }
    }
}

/// The concrete option set of a model instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResolvedOptions {
    pub thermal: Thermal,
    pub particle: Particle,
    #[serde(rename = "particle size")]
    pub particle_size: ParticleSize,
    #[serde(rename = "surface form")]
    pub surface_form: SurfaceForm,
    pub dimensionality: Dimensionality,
}

impl ResolvedOptions {
    /// Checks combinations that no model supports.
    pub fn validate(&self, model: &str) -> RSBMResult<()> {
        if self.thermal == Thermal::XFull && self.dimensionality != Dimensionality::Zero {
            return Err(RSBMError::InvalidOption {
                model: model.to_string(),
                option: "thermal".to_string(),
                value: self.thermal.to_string(),
                reason: format!(
                    "x-full thermal models require dimensionality 0, got {}",
                    self.dimensionality
                ),
            });
        }
        Ok(())
    }

    /// Options set to something other than in `reference`, as `(option name, value)`
    /// pairs in table order.
    pub fn differences(&self, reference: &ResolvedOptions) -> Vec<(&'static str, String)> {
        ModelOptions {
            thermal: (self.thermal != reference.thermal).then_some(self.thermal),
            particle: (self.particle != reference.particle).then_some(self.particle),
            particle_size: (self.particle_size != reference.particle_size)
                .then_some(self.particle_size),
            surface_form: (self.surface_form != reference.surface_form)
                .then_some(self.surface_form),
            dimensionality: (self.dimensionality != reference.dimensionality)
                .then_some(self.dimensionality),
        }
        .overrides()
    }
}
