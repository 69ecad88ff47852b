//! Doyle-Fuller-Newman model.

use rsbm_core::define_model_type;
use rsbm_core::errors::RSBMResult;
use rsbm_core::model::{Approximation, ElectrolyteDiffusion, ModelClass};
use rsbm_core::namespace::ModelType;
use rsbm_core::options::ModelOptions;
use serde::{Deserialize, Serialize};

use super::base_lithium_ion_model::{impl_lithium_ion_model, ModelState, Physics};
use super::FAMILY;

pub(crate) const DFN_PHYSICS: Physics = Physics {
    electrolyte_diffusion: ElectrolyteDiffusion::Full,
    electrolyte_conductivity: Approximation::Full,
    electrode_ohm: Approximation::Full,
    x_average: false,
};

/// Doyle-Fuller-Newman model (DFN)
///
/// Porous electrode model resolving a particle at every position through the cell
/// thickness, with full electrolyte transport and charge conservation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ModelState", into = "ModelState")]
pub struct DFN {
    state: ModelState,
}

impl_lithium_ion_model!(DFN, DFN_TYPE, physics = DFN_PHYSICS);

impl ModelClass for DFN {
    fn model_class() -> &'static ModelType {
        &DFN_TYPE
    }

    fn with_options(options: ModelOptions) -> RSBMResult<Self> {
        Ok(Self {
            state: ModelState::resolve::<Self>(options)?,
        })
    }
}

define_model_type!(
    DFN_TYPE,
    DFN,
    family = FAMILY,
    name = "DFN",
    full_name = "Doyle-Fuller-Newman model",
    description = "Pseudo-two-dimensional porous electrode model with full electrolyte transport",
);

#[cfg(test)]
mod tests {
    use super::*;
    use rsbm_core::model::BatteryModel;
    use rsbm_core::errors::RSBMError;
    use rsbm_core::options::{Dimensionality, Thermal};
    use rsbm_core::standard_variables::{
        VAR_ELECTROLYTE_POTENTIAL, VAR_NEGATIVE_ELECTRODE_POTENTIAL,
        VAR_NEGATIVE_PARTICLE_CONCENTRATION, VAR_XAVG_NEGATIVE_PARTICLE_CONCENTRATION,
    };

    #[test]
    fn test_not_x_averaged() {
        let model = DFN::default();

        assert!(!model.is_x_averaged());
        assert!(model.defines_variable(VAR_NEGATIVE_PARTICLE_CONCENTRATION.name));
        assert!(!model.defines_variable(VAR_XAVG_NEGATIVE_PARTICLE_CONCENTRATION.name));
    }

    #[test]
    fn test_potentials_are_resolved() {
        let model = DFN::default();

        assert!(model.defines_variable(VAR_ELECTROLYTE_POTENTIAL.name));
        assert!(model.defines_variable(VAR_NEGATIVE_ELECTRODE_POTENTIAL.name));
    }

    #[test]
    fn test_x_full_thermal_in_pouch_cell_rejected() {
        let err = DFN::with_options(
            ModelOptions::new()
                .with_thermal(Thermal::XFull)
                .with_dimensionality(Dimensionality::One),
        )
        .unwrap_err();

        match err {
            RSBMError::InvalidOption { model, option, .. } => {
                assert_eq!(model, "DFN");
                assert_eq!(option, "thermal");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_deserialising_x_full_in_pouch_cell_fails() {
        let mut value = serde_json::to_value(&DFN::default() as &dyn BatteryModel).unwrap();
        value["options"]["thermal"] = "x-full".into();
        value["options"]["dimensionality"] = 2.into();

        let result = serde_json::from_value::<Box<dyn BatteryModel>>(value);
        assert!(result.is_err());
    }
}
