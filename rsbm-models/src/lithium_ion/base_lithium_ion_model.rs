//! Structure shared by every lithium-ion model.

use rsbm_core::define_model_type;
use rsbm_core::errors::{RSBMError, RSBMResult};
use rsbm_core::model::{
    Approximation, BatteryModel, ElectrolyteDiffusion, ModelClass, Submodel,
};
use rsbm_core::namespace::ModelType;
use rsbm_core::options::{ModelOptions, ParticleSize, ResolvedOptions, Thermal};
use rsbm_core::standard_variables::{
    VAR_CELL_TEMPERATURE, VAR_CURRENT, VAR_DISCHARGE_CAPACITY, VAR_ELECTROLYTE_CONCENTRATION,
    VAR_ELECTROLYTE_POTENTIAL, VAR_NEGATIVE_ELECTRODE_POTENTIAL,
    VAR_NEGATIVE_PARTICLE_CONCENTRATION, VAR_NEGATIVE_PARTICLE_SIZE_DISTRIBUTION,
    VAR_POSITIVE_ELECTRODE_POTENTIAL, VAR_POSITIVE_PARTICLE_CONCENTRATION,
    VAR_POSITIVE_PARTICLE_SIZE_DISTRIBUTION, VAR_TIME, VAR_VOLTAGE,
    VAR_XAVG_NEGATIVE_PARTICLE_CONCENTRATION, VAR_XAVG_POSITIVE_PARTICLE_CONCENTRATION,
};
use rsbm_core::variable::StaticVariableDefinition;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::FAMILY;

/// Which submodel fills each option-independent slot of a full model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Physics {
    pub electrolyte_diffusion: ElectrolyteDiffusion,
    pub electrolyte_conductivity: Approximation,
    pub electrode_ohm: Approximation,
    /// Quantities are averaged through the thickness of each electrode
    pub x_average: bool,
}

impl Physics {
    pub(crate) fn submodels(&self, options: &ResolvedOptions) -> Vec<Submodel> {
        vec![
            Submodel::Particle(options.particle),
            Submodel::ParticleSize(options.particle_size),
            Submodel::ElectrolyteDiffusion(self.electrolyte_diffusion),
            Submodel::ElectrolyteConductivity(self.electrolyte_conductivity),
            Submodel::ElectrodeOhm(self.electrode_ohm),
            Submodel::Interface(options.surface_form),
            Submodel::Thermal(options.thermal),
        ]
    }

    pub(crate) fn variables(
        &self,
        options: &ResolvedOptions,
    ) -> Vec<&'static StaticVariableDefinition> {
        let mut variables = cell_variables(options);

        if self.x_average {
            variables.push(&VAR_XAVG_NEGATIVE_PARTICLE_CONCENTRATION);
            variables.push(&VAR_XAVG_POSITIVE_PARTICLE_CONCENTRATION);
        } else {
            variables.push(&VAR_NEGATIVE_PARTICLE_CONCENTRATION);
            variables.push(&VAR_POSITIVE_PARTICLE_CONCENTRATION);
        }
        if options.particle_size == ParticleSize::Distribution {
            variables.push(&VAR_NEGATIVE_PARTICLE_SIZE_DISTRIBUTION);
            variables.push(&VAR_POSITIVE_PARTICLE_SIZE_DISTRIBUTION);
        }

        if self.electrolyte_diffusion == ElectrolyteDiffusion::Full {
            variables.push(&VAR_ELECTROLYTE_CONCENTRATION);
        }
        if self.electrolyte_conductivity == Approximation::Full {
            variables.push(&VAR_ELECTROLYTE_POTENTIAL);
        }
        if self.electrode_ohm == Approximation::Full {
            variables.push(&VAR_NEGATIVE_ELECTRODE_POTENTIAL);
            variables.push(&VAR_POSITIVE_ELECTRODE_POTENTIAL);
        }
        variables
    }
}

fn cell_variables(options: &ResolvedOptions) -> Vec<&'static StaticVariableDefinition> {
    let mut variables = vec![&VAR_TIME, &VAR_CURRENT, &VAR_VOLTAGE, &VAR_DISCHARGE_CAPACITY];
    if options.thermal != Thermal::Isothermal {
        variables.push(&VAR_CELL_TEMPERATURE);
    }
    variables
}

/// Instance name and options every lithium-ion model carries.
///
/// This is also the serialised form of each model. Converting it back into a
/// model goes through [`ModelClass::check_options`], so a deserialised model is
/// held to the same rules as one built from options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelState {
    pub name: String,
    pub options: ResolvedOptions,
}

impl ModelState {
    pub(crate) fn new(model_type: &'static ModelType, options: ResolvedOptions) -> Self {
        Self {
            name: model_type.full_name().to_string(),
            options,
        }
    }

    /// Merge `overrides` onto the defaults of `T` and check the result.
    pub(crate) fn resolve<T: ModelClass>(overrides: ModelOptions) -> RSBMResult<Self> {
        let model_type = T::model_class();
        let options = overrides.resolve(T::default_options());
        T::check_options(&options)?;
        debug!(
            model = model_type.name(),
            options = ?options,
            "Resolved model options"
        );
        Ok(Self::new(model_type, options))
    }

    /// Pass the state through the option checks of `T`.
    pub(crate) fn checked<T: ModelClass>(self) -> RSBMResult<Self> {
        T::check_options(&self.options)?;
        Ok(self)
    }
}

/// Fail with the first of `options` for a model type that takes none.
///
/// `full_model` names the model that accepts the options instead.
pub(crate) fn reject_overrides(
    model_type: &'static ModelType,
    full_model: &str,
    options: Vec<(&'static str, String)>,
) -> RSBMResult<()> {
    match options.into_iter().next() {
        Some((option, value)) => Err(RSBMError::InvalidOption {
            model: model_type.name().to_string(),
            option: option.to_string(),
            value,
            reason: format!("Basic models do not accept options; use {full_model} instead"),
        }),
        None => Ok(()),
    }
}

/// Implement the parts every full or basic lithium-ion model shares.
///
/// The model must be a struct with a single `state: ModelState` field and carry
/// `#[serde(try_from = "ModelState", into = "ModelState")]`. `physics` is the
/// [`Physics`] the model is composed of.
macro_rules! impl_lithium_ion_model {
    ($model:ident, $model_type:ident, physics = $physics:expr) => {
        impl Default for $model {
            fn default() -> Self {
                Self {
                    state: $crate::lithium_ion::base_lithium_ion_model::ModelState::new(
                        &$model_type,
                        <Self as ::rsbm_core::model::ModelClass>::default_options(),
                    ),
                }
            }
        }

        impl From<$model> for $crate::lithium_ion::base_lithium_ion_model::ModelState {
            fn from(model: $model) -> Self {
                model.state
            }
        }

        impl TryFrom<$crate::lithium_ion::base_lithium_ion_model::ModelState> for $model {
            type Error = ::rsbm_core::errors::RSBMError;

            fn try_from(
                state: $crate::lithium_ion::base_lithium_ion_model::ModelState,
            ) -> ::rsbm_core::errors::RSBMResult<Self> {
                Ok(Self {
                    state: state.checked::<Self>()?,
                })
            }
        }

        #[typetag::serde]
        impl ::rsbm_core::model::BatteryModel for $model {
            fn model_type(&self) -> &'static ::rsbm_core::namespace::ModelType {
                &$model_type
            }

            fn name(&self) -> &str {
                &self.state.name
            }

            fn set_name(&mut self, name: String) {
                self.state.name = name;
            }

            fn options(&self) -> &::rsbm_core::options::ResolvedOptions {
                &self.state.options
            }

            fn submodels(&self) -> Vec<::rsbm_core::model::Submodel> {
                $physics.submodels(&self.state.options)
            }

            fn is_x_averaged(&self) -> bool {
                $physics.x_average
            }

            fn variables(&self) -> Vec<&'static ::rsbm_core::variable::StaticVariableDefinition> {
                $physics.variables(&self.state.options)
            }
        }
    };
}

pub(crate) use impl_lithium_ion_model;

/// Base lithium-ion model.
///
/// Holds the instance name and resolved options every lithium-ion model carries.
/// On its own it sets no submodels; the full models add their composition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ModelState", into = "ModelState")]
pub struct BaseModel {
    state: ModelState,
}

impl Default for BaseModel {
    fn default() -> Self {
        Self {
            state: ModelState::new(&BASE_MODEL_TYPE, Self::default_options()),
        }
    }
}

impl From<BaseModel> for ModelState {
    fn from(model: BaseModel) -> Self {
        model.state
    }
}

impl TryFrom<ModelState> for BaseModel {
    type Error = RSBMError;

    fn try_from(state: ModelState) -> RSBMResult<Self> {
        Ok(Self {
            state: state.checked::<Self>()?,
        })
    }
}

#[typetag::serde]
impl BatteryModel for BaseModel {
    fn model_type(&self) -> &'static ModelType {
        &BASE_MODEL_TYPE
    }

    fn name(&self) -> &str {
        &self.state.name
    }

    fn set_name(&mut self, name: String) {
        self.state.name = name;
    }

    fn options(&self) -> &ResolvedOptions {
        &self.state.options
    }

    fn submodels(&self) -> Vec<Submodel> {
        vec![]
    }

    fn is_x_averaged(&self) -> bool {
        false
    }

    fn variables(&self) -> Vec<&'static StaticVariableDefinition> {
        cell_variables(&self.state.options)
    }
}

impl ModelClass for BaseModel {
    fn model_class() -> &'static ModelType {
        &BASE_MODEL_TYPE
    }

    fn with_options(options: ModelOptions) -> RSBMResult<Self> {
        Ok(Self {
            state: ModelState::resolve::<Self>(options)?,
        })
    }
}

define_model_type!(
    BASE_MODEL_TYPE,
    BaseModel,
    family = FAMILY,
    name = "BaseModel",
    full_name = "Unnamed lithium-ion model",
    description = "Shared structure of the lithium-ion models; sets no submodels",
);

#[cfg(test)]
mod tests {
    use super::*;
    use rsbm_core::errors::RSBMError;
    use rsbm_core::options::{Dimensionality, SurfaceForm};

    #[test]
    fn test_default_name() {
        let model = BaseModel::default();
        assert_eq!(model.name(), "Unnamed lithium-ion model");
        assert_eq!(model.options(), &ResolvedOptions::default());
    }

    #[test]
    fn test_sets_no_submodels() {
        let model = BaseModel::with_options(ModelOptions::new()).unwrap();
        assert!(model.submodels().is_empty());
        assert!(!model.is_x_averaged());
    }

    #[test]
    fn test_accepts_any_valid_option() {
        let model = BaseModel::with_options(
            ModelOptions::new()
                .with_thermal(Thermal::Lumped)
                .with_particle_size(ParticleSize::Distribution)
                .with_surface_form(SurfaceForm::Differential),
        )
        .unwrap();

        assert_eq!(model.options().thermal, Thermal::Lumped);
        assert!(model.defines_variable(VAR_CELL_TEMPERATURE.name));
    }

    #[test]
    fn test_rejects_invalid_combination() {
        let result = BaseModel::with_options(
            ModelOptions::new()
                .with_thermal(Thermal::XFull)
                .with_dimensionality(Dimensionality::Two),
        );
        assert!(matches!(result, Err(RSBMError::InvalidOption { .. })));
    }

    #[test]
    fn test_physics_variables_follow_composition() {
        let physics = Physics {
            electrolyte_diffusion: ElectrolyteDiffusion::Full,
            electrolyte_conductivity: Approximation::Composite,
            electrode_ohm: Approximation::Composite,
            x_average: true,
        };
        let names: Vec<&str> = physics
            .variables(&ResolvedOptions::default())
            .iter()
            .map(|v| v.name)
            .collect();

        assert!(names.contains(&VAR_ELECTROLYTE_CONCENTRATION.name));
        assert!(names.contains(&VAR_XAVG_NEGATIVE_PARTICLE_CONCENTRATION.name));
        assert!(!names.contains(&VAR_ELECTROLYTE_POTENTIAL.name));
        assert!(!names.contains(&VAR_NEGATIVE_ELECTRODE_POTENTIAL.name));
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut model: Box<dyn BatteryModel> = Box::new(BaseModel::default());
        model.set_name("bare".to_string());

        let json = serde_json::to_string(&model).unwrap();
        assert!(json.contains(r#""model":"BaseModel""#));

        let deserialized: Box<dyn BatteryModel> = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.name(), "bare");
        assert!(deserialized.model_type().is::<BaseModel>());
    }

    #[test]
    fn test_serialised_form() {
        let value = serde_json::to_value(&BaseModel::default()).unwrap();
        assert_eq!(value["name"], "Unnamed lithium-ion model");
        assert_eq!(value["options"]["thermal"], "isothermal");
        assert_eq!(value["options"]["particle size"], "single");
    }

    #[test]
    fn test_deserialising_invalid_combination_fails() {
        let value = serde_json::json!({
            "model": "BaseModel",
            "name": "bare",
            "options": {
                "thermal": "x-full",
                "particle": "Fickian diffusion",
                "particle size": "single",
                "surface form": "false",
                "dimensionality": 2
            }
        });

        let err = serde_json::from_value::<Box<dyn BatteryModel>>(value).unwrap_err();
        assert!(err
            .to_string()
            .contains("x-full thermal models require dimensionality 0"));
    }

    #[test]
    fn test_reject_overrides_names_first_option() {
        let err = reject_overrides(
            &BASE_MODEL_TYPE,
            "SPM",
            vec![("surface form", "algebraic".to_string())],
        )
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Invalid option for BaseModel: 'surface form' = 'algebraic'. \
             Basic models do not accept options; use SPM instead"
        );
        assert!(reject_overrides(&BASE_MODEL_TYPE, "SPM", vec![]).is_ok());
    }
}
