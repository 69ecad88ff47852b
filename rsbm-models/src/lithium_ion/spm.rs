//! Single Particle Model.

use rsbm_core::define_model_type;
use rsbm_core::errors::RSBMResult;
use rsbm_core::model::{Approximation, ElectrolyteDiffusion, ModelClass};
use rsbm_core::namespace::ModelType;
use rsbm_core::options::ModelOptions;
use serde::{Deserialize, Serialize};

use super::base_lithium_ion_model::{impl_lithium_ion_model, ModelState, Physics};
use super::FAMILY;

pub(crate) const SPM_PHYSICS: Physics = Physics {
    electrolyte_diffusion: ElectrolyteDiffusion::ConstantConcentration,
    electrolyte_conductivity: Approximation::LeadingOrder,
    electrode_ohm: Approximation::LeadingOrder,
    x_average: true,
};

/// Single Particle Model (SPM)
///
/// Each electrode is represented by one spherical particle and the electrolyte
/// concentration is uniform, so only the particle submodels carry spatial structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ModelState", into = "ModelState")]
pub struct SPM {
    state: ModelState,
}

impl_lithium_ion_model!(SPM, SPM_TYPE, physics = SPM_PHYSICS);

impl ModelClass for SPM {
    fn model_class() -> &'static ModelType {
        &SPM_TYPE
    }

    fn with_options(options: ModelOptions) -> RSBMResult<Self> {
        Ok(Self {
            state: ModelState::resolve::<Self>(options)?,
        })
    }
}

define_model_type!(
    SPM_TYPE,
    SPM,
    family = FAMILY,
    name = "SPM",
    full_name = "Single Particle Model",
    description = "Each electrode reduced to a single representative particle in a uniform electrolyte",
);
