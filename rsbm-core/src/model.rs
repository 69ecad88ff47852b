//! The interface shared by every battery model type.
//!
//! A model here is a *description* of a battery model: its identity, the options it
//! was built with, the submodels it is composed of and the variables it defines.
//! Assembling and solving the governing equations is the job of downstream crates.

use crate::errors::RSBMResult;
use crate::namespace::ModelType;
use crate::options::{ModelOptions, Particle, ParticleSize, ResolvedOptions, SurfaceForm, Thermal};
use crate::variable::StaticVariableDefinition;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Treatment of lithium-ion transport in the electrolyte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElectrolyteDiffusion {
    /// Electrolyte concentration held at its initial value.
    ConstantConcentration,
    Full,
}

/// Order of the asymptotic approximation used for a charge-conservation submodel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Approximation {
    LeadingOrder,
    Composite,
    Full,
}

/// One slot of a model's composition and the submodel filling it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Submodel {
    Particle(Particle),
    ParticleSize(ParticleSize),
    ElectrolyteDiffusion(ElectrolyteDiffusion),
    ElectrolyteConductivity(Approximation),
    ElectrodeOhm(Approximation),
    Interface(SurfaceForm),
    Thermal(Thermal),
}

impl Submodel {
    /// Name of the slot this submodel fills.
    pub fn slot(&self) -> &'static str {
        match self {
            Submodel::Particle(_) => "particle",
            Submodel::ParticleSize(_) => "particle size",
            Submodel::ElectrolyteDiffusion(_) => "electrolyte diffusion",
            Submodel::ElectrolyteConductivity(_) => "electrolyte conductivity",
            Submodel::ElectrodeOhm(_) => "electrode ohm",
            Submodel::Interface(_) => "interface",
            Submodel::Thermal(_) => "thermal",
        }
    }
}

/// A battery model instance.
///
/// Implementations are serialisable as `Box<dyn BatteryModel>` via `typetag`, with
/// the concrete type recorded under the `model` key.
#[typetag::serde(tag = "model")]
pub trait BatteryModel: Debug + Send + Sync {
    /// The static handle of this model's type.
    fn model_type(&self) -> &'static ModelType;

    /// Instance name. Defaults to the full name of the model type.
    fn name(&self) -> &str;

    fn set_name(&mut self, name: String);

    /// Options the model was built with, after merging overrides onto defaults.
    fn options(&self) -> &ResolvedOptions;

    /// Submodels in composition order. Empty for models that set none.
    fn submodels(&self) -> Vec<Submodel>;

    /// True if the model works with through-cell averaged quantities.
    fn is_x_averaged(&self) -> bool;

    /// Variables this model defines.
    fn variables(&self) -> Vec<&'static StaticVariableDefinition>;

    /// Test if the model defines a variable with the given name
    fn defines_variable(&self, name: &str) -> bool {
        self.variables().iter().any(|v| v.name == name)
    }
}

/// Static side of a model type: how to build one and what its defaults are.
///
/// Every type registered in a model namespace implements this trait. The
/// namespace stores a constructor generated from [`ModelClass::with_options`].
pub trait ModelClass: BatteryModel + Sized + 'static {
    /// The static handle registered for this type.
    fn model_class() -> &'static ModelType;

    /// Option values used for anything the caller does not override.
    fn default_options() -> ResolvedOptions {
        ResolvedOptions::default()
    }

    /// Check that a resolved option set is one this type can hold.
    ///
    /// Runs for every instance, whether built with [`ModelClass::with_options`] or
    /// deserialised.
    fn check_options(options: &ResolvedOptions) -> RSBMResult<()> {
        options.validate(Self::model_class().name())
    }

    /// Build an instance, merging `options` onto [`ModelClass::default_options`].
    fn with_options(options: ModelOptions) -> RSBMResult<Self>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submodel_slots_are_distinct() {
        let submodels = [
            Submodel::Particle(Particle::FickianDiffusion),
            Submodel::ParticleSize(ParticleSize::Single),
            Submodel::ElectrolyteDiffusion(ElectrolyteDiffusion::Full),
            Submodel::ElectrolyteConductivity(Approximation::Full),
            Submodel::ElectrodeOhm(Approximation::Full),
            Submodel::Interface(SurfaceForm::None),
            Submodel::Thermal(Thermal::Isothermal),
        ];
        let mut slots: Vec<&str> = submodels.iter().map(Submodel::slot).collect();
        slots.sort();
        slots.dedup();

        assert_eq!(slots.len(), submodels.len());
    }

    #[test]
    fn test_submodel_serialization() {
        let submodel = Submodel::ElectrolyteConductivity(Approximation::Composite);
        let json = serde_json::to_string(&submodel).unwrap();
        assert_eq!(json, r#"{"ElectrolyteConductivity":"Composite"}"#);

        let deserialized: Submodel = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, submodel);
    }
}
