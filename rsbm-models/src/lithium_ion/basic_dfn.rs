//! Doyle-Fuller-Newman model in its fixed-option form.

use rsbm_core::define_model_type;
use rsbm_core::errors::RSBMResult;
use rsbm_core::model::ModelClass;
use rsbm_core::namespace::ModelType;
use rsbm_core::options::{ModelOptions, ResolvedOptions};
use serde::{Deserialize, Serialize};

use super::base_lithium_ion_model::{impl_lithium_ion_model, reject_overrides, ModelState};
use super::dfn::DFN_PHYSICS;
use super::FAMILY;

/// Doyle-Fuller-Newman model, basic form
///
/// Same composition as [`DFN`](super::DFN) with its default options. The
/// option set is fixed: any override is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ModelState", into = "ModelState")]
pub struct BasicDFN {
    state: ModelState,
}

impl_lithium_ion_model!(BasicDFN, BASIC_DFN_TYPE, physics = DFN_PHYSICS);

impl ModelClass for BasicDFN {
    fn model_class() -> &'static ModelType {
        &BASIC_DFN_TYPE
    }

    fn check_options(options: &ResolvedOptions) -> RSBMResult<()> {
        reject_overrides(&BASIC_DFN_TYPE, "DFN", options.differences(&Self::default_options()))
    }

    fn with_options(options: ModelOptions) -> RSBMResult<Self> {
        reject_overrides(&BASIC_DFN_TYPE, "DFN", options.overrides())?;
        Ok(Self::default())
    }
}

define_model_type!(
    BASIC_DFN_TYPE,
    BasicDFN,
    family = FAMILY,
    name = "BasicDFN",
    full_name = "Doyle-Fuller-Newman model",
    description = "Doyle-Fuller-Newman model with default options only",
);

#[cfg(test)]
mod tests {
    use super::*;
    use rsbm_core::errors::RSBMError;
    use rsbm_core::model::BatteryModel;
    use rsbm_core::options::Particle;

    #[test]
    fn test_empty_options_accepted() {
        let model = BasicDFN::with_options(ModelOptions::new()).unwrap();
        assert_eq!(model, BasicDFN::default());
        assert!(!model.is_x_averaged());
    }

    #[test]
    fn test_rejects_options() {
        let result =
            BasicDFN::with_options(ModelOptions::new().with_particle(Particle::QuadraticProfile));
        assert!(matches!(result, Err(RSBMError::InvalidOption { .. })));
    }

    #[test]
    fn test_deserialising_changed_options_fails() {
        let mut value = serde_json::to_value(&BasicDFN::default()).unwrap();
        value["options"]["particle"] = "quartic profile".into();

        let result = serde_json::from_value::<BasicDFN>(value);
        assert!(result.is_err());
    }
}
