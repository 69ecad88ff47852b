//! Many-Particle Model.

use rsbm_core::define_model_type;
use rsbm_core::errors::{RSBMError, RSBMResult};
use rsbm_core::model::ModelClass;
use rsbm_core::namespace::ModelType;
use rsbm_core::options::{ModelOptions, ParticleSize, ResolvedOptions, SurfaceForm};
use serde::{Deserialize, Serialize};

use super::base_lithium_ion_model::{impl_lithium_ion_model, ModelState};
use super::spm::SPM_PHYSICS;
use super::FAMILY;

/// Many-Particle Model (MPM)
///
/// An SPM in which each electrode holds a continuous distribution of particle
/// sizes instead of one representative particle. The distribution requires the
/// algebraic surface form by default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ModelState", into = "ModelState")]
pub struct MPM {
    state: ModelState,
}

impl_lithium_ion_model!(MPM, MPM_TYPE, physics = SPM_PHYSICS);

impl ModelClass for MPM {
    fn model_class() -> &'static ModelType {
        &MPM_TYPE
    }

    fn default_options() -> ResolvedOptions {
        ResolvedOptions {
            particle_size: ParticleSize::Distribution,
            surface_form: SurfaceForm::Algebraic,
            ..ResolvedOptions::default()
        }
    }

    fn check_options(options: &ResolvedOptions) -> RSBMResult<()> {
        options.validate(MPM_TYPE.name())?;
        if options.particle_size != ParticleSize::Distribution {
            return Err(RSBMError::InvalidOption {
                model: MPM_TYPE.name().to_string(),
                option: "particle size".to_string(),
                value: options.particle_size.to_string(),
                reason: "The Many-Particle Model requires a particle-size distribution".to_string(),
            });
        }
        Ok(())
    }

    fn with_options(options: ModelOptions) -> RSBMResult<Self> {
        Ok(Self {
            state: ModelState::resolve::<Self>(options)?,
        })
    }
}

define_model_type!(
    MPM_TYPE,
    MPM,
    family = FAMILY,
    name = "MPM",
    full_name = "Many-Particle Model",
    description = "Single particle model with a distribution of particle sizes in each electrode",
);

#[cfg(test)]
mod tests {
    use super::*;
    use rsbm_core::model::{BatteryModel, Submodel};
    use rsbm_core::options::Thermal;
    use rsbm_core::standard_variables::VAR_POSITIVE_PARTICLE_SIZE_DISTRIBUTION;

    #[test]
    fn test_defaults() {
        let model = MPM::default();

        assert_eq!(model.name(), "Many-Particle Model");
        assert_eq!(model.options().particle_size, ParticleSize::Distribution);
        assert_eq!(model.options().surface_form, SurfaceForm::Algebraic);
        assert!(model.defines_variable(VAR_POSITIVE_PARTICLE_SIZE_DISTRIBUTION.name));
    }

    #[test]
    fn test_overrides_keep_distribution() {
        let model = MPM::with_options(ModelOptions::new().with_thermal(Thermal::Lumped)).unwrap();

        assert_eq!(model.options().thermal, Thermal::Lumped);
        assert_eq!(model.options().particle_size, ParticleSize::Distribution);
    }

    #[test]
    fn test_single_particle_size_rejected() {
        let err = MPM::with_options(ModelOptions::new().with_particle_size(ParticleSize::Single))
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Invalid option for MPM: 'particle size' = 'single'. \
             The Many-Particle Model requires a particle-size distribution"
        );
    }

    #[test]
    fn test_surface_form_can_be_overridden() {
        let model =
            MPM::with_options(ModelOptions::new().with_surface_form(SurfaceForm::Differential))
                .unwrap();

        assert!(model
            .submodels()
            .contains(&Submodel::Interface(SurfaceForm::Differential)));
    }

    #[test]
    fn test_deserialising_single_particle_size_fails() {
        let mut value = serde_json::to_value(&MPM::default() as &dyn BatteryModel).unwrap();
        value["options"]["particle size"] = "single".into();

        let err = serde_json::from_value::<Box<dyn BatteryModel>>(value).unwrap_err();
        assert!(err
            .to_string()
            .contains("The Many-Particle Model requires a particle-size distribution"));
    }

    #[test]
    fn test_deserialised_state_matches_built_model() {
        let model = MPM::with_options(ModelOptions::new().with_thermal(Thermal::Lumped)).unwrap();
        let value = serde_json::to_value(&model).unwrap();

        assert_eq!(serde_json::from_value::<MPM>(value).unwrap(), model);
    }
}
