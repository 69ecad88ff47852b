//! Many-Particle Model in its fixed-option form.

use rsbm_core::define_model_type;
use rsbm_core::errors::RSBMResult;
use rsbm_core::model::ModelClass;
use rsbm_core::namespace::ModelType;
use rsbm_core::options::{ModelOptions, ResolvedOptions};
use serde::{Deserialize, Serialize};

use super::base_lithium_ion_model::{impl_lithium_ion_model, reject_overrides, ModelState};
use super::mpm::MPM;
use super::spm::SPM_PHYSICS;
use super::FAMILY;

/// Many-Particle Model, basic form
///
/// Same composition as [`MPM`](super::MPM) with its default options. The
/// option set is fixed: any override is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ModelState", into = "ModelState")]
pub struct BasicMPM {
    state: ModelState,
}

impl_lithium_ion_model!(BasicMPM, BASIC_MPM_TYPE, physics = SPM_PHYSICS);

impl ModelClass for BasicMPM {
    fn model_class() -> &'static ModelType {
        &BASIC_MPM_TYPE
    }

    fn default_options() -> ResolvedOptions {
        MPM::default_options()
    }

    fn check_options(options: &ResolvedOptions) -> RSBMResult<()> {
        reject_overrides(&BASIC_MPM_TYPE, "MPM", options.differences(&Self::default_options()))
    }

    fn with_options(options: ModelOptions) -> RSBMResult<Self> {
        reject_overrides(&BASIC_MPM_TYPE, "MPM", options.overrides())?;
        Ok(Self::default())
    }
}

define_model_type!(
    BASIC_MPM_TYPE,
    BasicMPM,
    family = FAMILY,
    name = "BasicMPM",
    full_name = "Many-Particle Model",
    description = "Many-Particle Model with default options only",
);

#[cfg(test)]
mod tests {
    use super::*;
    use rsbm_core::model::BatteryModel;
    use rsbm_core::options::{ParticleSize, SurfaceForm};

    #[test]
    fn test_uses_mpm_defaults() {
        let model = BasicMPM::default();

        assert_eq!(model.name(), "Many-Particle Model");
        assert_eq!(model.options(), &MPM::default_options());
        assert_eq!(model.options().particle_size, ParticleSize::Distribution);
    }

    #[test]
    fn test_rejects_even_default_values() {
        let result = BasicMPM::with_options(
            ModelOptions::new().with_surface_form(SurfaceForm::Algebraic),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialising_single_particle_size_fails() {
        let mut value = serde_json::to_value(&BasicMPM::default() as &dyn BatteryModel).unwrap();
        value["options"]["particle size"] = "single".into();

        let err = serde_json::from_value::<Box<dyn BatteryModel>>(value).unwrap_err();
        assert!(err.to_string().contains("'particle size' = 'single'"));
    }
}
