//! Lithium-ion models.
//!
//! The eight public model types are re-exported here and bound into one
//! [`ModelNamespace`]. Consumers resolve types through this module rather than the
//! modules that define them:
//!
//! ```rust
//! use rsbm_models::lithium_ion;
//!
//! let dfn = lithium_ion::resolve("DFN").unwrap();
//! assert_eq!(dfn.full_name(), "Doyle-Fuller-Newman model");
//! assert!(dfn.is::<lithium_ion::DFN>());
//! ```

use rsbm_core::errors::RSBMResult;
use rsbm_core::namespace::{ModelNamespace, ModelType};
use std::sync::LazyLock;

mod base_lithium_ion_model;
mod basic_dfn;
mod basic_mpm;
mod basic_spm;
mod dfn;
mod mpm;
mod spm;
mod spme;

pub use base_lithium_ion_model::{BaseModel, BASE_MODEL_TYPE};
pub use basic_dfn::{BasicDFN, BASIC_DFN_TYPE};
pub use basic_mpm::{BasicMPM, BASIC_MPM_TYPE};
pub use basic_spm::{BasicSPM, BASIC_SPM_TYPE};
pub use dfn::{DFN, DFN_TYPE};
pub use mpm::{MPM, MPM_TYPE};
pub use spm::{SPM, SPM_TYPE};
pub use spme::{SPMe, SPME_TYPE};

/// Family name under which the lithium-ion model types register.
pub const FAMILY: &str = "lithium_ion";

/// Public names of the namespace, in declaration order.
pub const PUBLIC_NAMES: [&str; 8] = [
    "BaseModel",
    "SPM",
    "SPMe",
    "DFN",
    "BasicDFN",
    "BasicSPM",
    "BasicMPM",
    "MPM",
];

/// Build a fresh lithium-ion namespace from the registered model types.
///
/// # Errors
///
/// Fails if any of [`PUBLIC_NAMES`] has no registered type or more than one.
pub fn try_namespace() -> RSBMResult<ModelNamespace> {
    ModelNamespace::from_inventory(FAMILY, &PUBLIC_NAMES)
}

static NAMESPACE: LazyLock<ModelNamespace> =
    LazyLock::new(|| try_namespace().unwrap_or_else(|e| panic!("{e}")));

/// The process-wide lithium-ion namespace.
///
/// Built on first access.
///
/// # Panics
///
/// Panics with the construction error if the namespace is incomplete.
pub fn namespace() -> &'static ModelNamespace {
    &NAMESPACE
}

/// Resolve a public name in the process-wide namespace.
pub fn resolve(name: &str) -> RSBMResult<&'static ModelType> {
    namespace().resolve(name)
}

/// Public names of the process-wide namespace, in declaration order.
pub fn list_available() -> Vec<&'static str> {
    namespace().list_available()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rsbm_core::errors::{ConstructionError, RSBMError};
    use rsbm_core::model::ModelClass;
    use rsbm_core::namespace::ModelRegistration;

    #[test]
    fn test_list_available_order() {
        assert_eq!(
            list_available(),
            vec!["BaseModel", "SPM", "SPMe", "DFN", "BasicDFN", "BasicSPM", "BasicMPM", "MPM"]
        );
        assert_eq!(list_available(), list_available());
    }

    #[test]
    fn test_every_name_resolves_to_itself() {
        for name in PUBLIC_NAMES {
            let model_type = resolve(name).unwrap();
            assert_eq!(model_type.name(), name);
            assert_eq!(model_type.family(), FAMILY);
        }
    }

    #[test]
    fn test_resolve_returns_defining_module_static() {
        assert!(std::ptr::eq(resolve("DFN").unwrap(), &dfn::DFN_TYPE));
        assert!(std::ptr::eq(resolve("SPMe").unwrap(), SPMe::model_class()));
        assert!(std::ptr::eq(
            resolve("BaseModel").unwrap(),
            BaseModel::model_class()
        ));
    }

    #[test]
    fn test_handles_map_to_concrete_types() {
        assert!(resolve("BaseModel").unwrap().is::<BaseModel>());
        assert!(resolve("SPM").unwrap().is::<SPM>());
        assert!(resolve("SPMe").unwrap().is::<SPMe>());
        assert!(resolve("DFN").unwrap().is::<DFN>());
        assert!(resolve("BasicDFN").unwrap().is::<BasicDFN>());
        assert!(resolve("BasicSPM").unwrap().is::<BasicSPM>());
        assert!(resolve("BasicMPM").unwrap().is::<BasicMPM>());
        assert!(resolve("MPM").unwrap().is::<MPM>());
    }

    #[test]
    fn test_source_locations() {
        assert_eq!(
            SPM_TYPE.source_location(),
            "rsbm_models::lithium_ion::spm"
        );
        assert_eq!(
            BASIC_MPM_TYPE.source_location(),
            "rsbm_models::lithium_ion::basic_mpm"
        );
    }

    #[test]
    fn test_unknown_name() {
        let err = resolve("NotAModel").unwrap_err();
        assert!(matches!(err, RSBMError::UnknownModel { ref name, .. } if name == "NotAModel"));
    }

    #[test]
    fn test_missing_spm_fails_construction() {
        let registrations = inventory::iter::<ModelRegistration>
            .into_iter()
            .filter(|r| !std::ptr::eq(r.model_type(), &SPM_TYPE));
        let result = ModelNamespace::build(FAMILY, &PUBLIC_NAMES, registrations);

        match result.unwrap_err() {
            RSBMError::Construction(ConstructionError::Missing { names, .. }) => {
                assert_eq!(names, vec!["SPM"]);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_fresh_namespaces_agree() {
        let first = try_namespace().unwrap();
        let second = try_namespace().unwrap();
        assert_eq!(first.list_available(), second.list_available());
        assert_eq!(first.list_available(), namespace().list_available());
    }
}
