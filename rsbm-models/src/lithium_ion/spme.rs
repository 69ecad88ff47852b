//! Single Particle Model with electrolyte.

use rsbm_core::define_model_type;
use rsbm_core::errors::RSBMResult;
use rsbm_core::model::{Approximation, ElectrolyteDiffusion, ModelClass};
use rsbm_core::namespace::ModelType;
use rsbm_core::options::ModelOptions;
use serde::{Deserialize, Serialize};

use super::base_lithium_ion_model::{impl_lithium_ion_model, ModelState, Physics};
use super::FAMILY;

const SPME_PHYSICS: Physics = Physics {
    electrolyte_diffusion: ElectrolyteDiffusion::Full,
    electrolyte_conductivity: Approximation::Composite,
    electrode_ohm: Approximation::Composite,
    x_average: true,
};

/// Single Particle Model with electrolyte (SPMe)
///
/// Extends the SPM with electrolyte transport through the cell thickness; charge
/// conservation uses the composite approximation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ModelState", into = "ModelState")]
pub struct SPMe {
    state: ModelState,
}

impl_lithium_ion_model!(SPMe, SPME_TYPE, physics = SPME_PHYSICS);

impl ModelClass for SPMe {
    fn model_class() -> &'static ModelType {
        &SPME_TYPE
    }

    fn with_options(options: ModelOptions) -> RSBMResult<Self> {
        Ok(Self {
            state: ModelState::resolve::<Self>(options)?,
        })
    }
}

define_model_type!(
    SPME_TYPE,
    SPMe,
    family = FAMILY,
    name = "SPMe",
    full_name = "Single Particle Model with electrolyte",
    description = "Single particle electrodes coupled to electrolyte transport through the cell",
);
