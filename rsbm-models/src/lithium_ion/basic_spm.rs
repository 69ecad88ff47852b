//! Single Particle Model in its fixed-option form.

use rsbm_core::define_model_type;
use rsbm_core::errors::RSBMResult;
use rsbm_core::model::ModelClass;
use rsbm_core::namespace::ModelType;
use rsbm_core::options::{ModelOptions, ResolvedOptions};
use serde::{Deserialize, Serialize};

use super::base_lithium_ion_model::{impl_lithium_ion_model, reject_overrides, ModelState};
use super::spm::SPM_PHYSICS;
use super::FAMILY;

/// Single Particle Model, basic form
///
/// Same composition as [`SPM`](super::SPM) with its default options. The
/// option set is fixed: any override is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ModelState", into = "ModelState")]
pub struct BasicSPM {
    state: ModelState,
}

impl_lithium_ion_model!(BasicSPM, BASIC_SPM_TYPE, physics = SPM_PHYSICS);

impl ModelClass for BasicSPM {
    fn model_class() -> &'static ModelType {
        &BASIC_SPM_TYPE
    }

    fn check_options(options: &ResolvedOptions) -> RSBMResult<()> {
        reject_overrides(&BASIC_SPM_TYPE, "SPM", options.differences(&Self::default_options()))
    }

    fn with_options(options: ModelOptions) -> RSBMResult<Self> {
        reject_overrides(&BASIC_SPM_TYPE, "SPM", options.overrides())?;
        Ok(Self::default())
    }
}

define_model_type!(
    BASIC_SPM_TYPE,
    BasicSPM,
    family = FAMILY,
    name = "BasicSPM",
    full_name = "Single Particle Model",
    description = "Single Particle Model with default options only",
);
