//! Model namespaces: one stable set of public names for a family of model types.
//!
//! Each model module declares a static [`ModelType`] with [`define_model_type!`],
//! which also submits a [`ModelRegistration`] to `inventory`. A [`ModelNamespace`]
//! is then built once from those registrations and a fixed list of expected public
//! names. Construction either binds every expected name or fails as a whole, so a
//! caller never sees a partial catalog.
//!
//! After construction the namespace is immutable and can be shared freely between
//! threads.

use crate::errors::{ConstructionError, RSBMError, RSBMResult};
use crate::model::{BatteryModel, ModelClass};
use crate::options::ModelOptions;
use std::any::TypeId;
use std::collections::{HashMap, HashSet};
use std::fmt;
use tracing::{debug, warn};

/// Constructor stored in a [`ModelType`].
pub type ModelConstructor = fn(ModelOptions) -> RSBMResult<Box<dyn BatteryModel>>;

fn type_id_of<T: 'static>() -> TypeId {
    TypeId::of::<T>()
}

fn construct<T: ModelClass>(options: ModelOptions) -> RSBMResult<Box<dyn BatteryModel>> {
    Ok(Box::new(T::with_options(options)?))
}

/// Static handle for one model type.
///
/// Handles are only ever used as `&'static ModelType`. Two handles refer to the same
/// type exactly when they are the same static, which can be checked with
/// [`std::ptr::eq`].
#[derive(Clone, Copy)]
pub struct ModelType {
    name: &'static str,
    full_name: &'static str,
    family: &'static str,
    source_location: &'static str,
    description: &'static str,
    type_id: fn() -> TypeId,
    constructor: ModelConstructor,
}

impl ModelType {
    /// Create the handle for the Rust type `T`.
    ///
    /// Prefer [`define_model_type!`], which fills in `source_location` and registers
    /// the handle.
    pub const fn new<T: ModelClass>(
        name: &'static str,
        full_name: &'static str,
        family: &'static str,
        source_location: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            full_name,
            family,
            source_location,
            description,
            type_id: type_id_of::<T>,
            constructor: construct::<T>,
        }
    }

    /// Public name, e.g. `"SPMe"`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Descriptive name, e.g. `"Single Particle Model with electrolyte"`.
    pub fn full_name(&self) -> &'static str {
        self.full_name
    }

    pub fn family(&self) -> &'static str {
        self.family
    }

    /// Module path of the defining module.
    pub fn source_location(&self) -> &'static str {
        self.source_location
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    /// `TypeId` of the concrete Rust type behind this handle.
    pub fn type_id(&self) -> TypeId {
        (self.type_id)()
    }

    /// Check if this handle describes the Rust type `T`.
    pub fn is<T: 'static>(&self) -> bool {
        self.type_id() == TypeId::of::<T>()
    }

    /// Build a model instance with the given option overrides.
    pub fn build(&self, options: ModelOptions) -> RSBMResult<Box<dyn BatteryModel>> {
        (self.constructor)(options)
    }

    /// Build a model instance with the type's default options.
    pub fn build_default(&self) -> RSBMResult<Box<dyn BatteryModel>> {
        self.build(ModelOptions::default())
    }
}

impl fmt::Debug for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelType")
            .field("name", &self.name)
            .field("family", &self.family)
            .field("source_location", &self.source_location)
            .finish()
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.full_name)
    }
}

/// A model type submitted for inclusion in a namespace.
#[derive(Debug, Clone, Copy)]
pub struct ModelRegistration {
    model_type: &'static ModelType,
}

impl ModelRegistration {
    pub const fn new(model_type: &'static ModelType) -> Self {
        Self { model_type }
    }

    pub fn model_type(&self) -> &'static ModelType {
        self.model_type
    }
}

inventory::collect!(ModelRegistration);

/// Declare the static handle of a model type and register it.
///
/// ```rust,ignore
/// define_model_type!(
///     SPM_TYPE,
///     SPM,
///     family = "lithium_ion",
///     name = "SPM",
///     full_name = "Single Particle Model",
///     description = "Electrodes reduced to one representative particle each",
/// );
/// ```
#[macro_export]
macro_rules! define_model_type {
    (
        $static_name:ident,
        $model:ty,
        family = $family:expr,
        name = $name:expr,
        full_name = $full_name:expr,
        description = $desc:expr $(,)?
    ) => {
        #[doc = concat!("Static model type handle for ", $name)]
        pub static $static_name: $crate::namespace::ModelType =
            $crate::namespace::ModelType::new::<$model>(
                $name,
                $full_name,
                $family,
                module_path!(),
                $desc,
            );

        ::inventory::submit! { $crate::namespace::ModelRegistration::new(&$static_name) }
    };
}

pub use crate::define_model_type;

/// An immutable mapping from public names to model types.
#[derive(Debug, Clone)]
pub struct ModelNamespace {
    family: &'static str,
    entries: Vec<&'static ModelType>,
    index: HashMap<&'static str, usize>,
}

impl ModelNamespace {
    /// Bind every name in `expected` to the registration of `family` that claims it.
    ///
    /// Registrations of other families are skipped. Registrations of this family with
    /// a name outside `expected` are ignored with a warning.
    ///
    /// # Errors
    ///
    /// - [`ConstructionError::Missing`] listing, in `expected` order, every name
    ///   without a registration
    /// - [`ConstructionError::Duplicate`] if two registrations claim the same name
    /// - [`ConstructionError::Aliased`] if two names are bound to the same Rust type
    /// - [`ConstructionError::RepeatedName`] if `expected` lists a name twice
    pub fn build<'r, I>(
        family: &'static str,
        expected: &[&'static str],
        registrations: I,
    ) -> RSBMResult<Self>
    where
        I: IntoIterator<Item = &'r ModelRegistration>,
    {
        let mut declared = HashSet::with_capacity(expected.len());
        if let Some(name) = expected.iter().find(|name| !declared.insert(**name)) {
            return Err(ConstructionError::RepeatedName {
                family: family.to_string(),
                name: name.to_string(),
            }
            .into());
        }

        let mut candidates: HashMap<&'static str, Vec<&'static ModelType>> = HashMap::new();
        for registration in registrations {
            let model_type = registration.model_type();
            if model_type.family() != family {
                continue;
            }
            if !expected.contains(&model_type.name()) {
                warn!(
                    family = family,
                    model = model_type.name(),
                    source = model_type.source_location(),
                    "Ignoring model type that is not part of the namespace"
                );
                continue;
            }
            candidates
                .entry(model_type.name())
                .or_default()
                .push(model_type);
        }

        let missing: Vec<String> = expected
            .iter()
            .filter(|name| !candidates.contains_key(*name))
            .map(|name| name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ConstructionError::Missing {
                family: family.to_string(),
                names: missing,
            }
            .into());
        }

        let mut entries = Vec::with_capacity(expected.len());
        let mut index = HashMap::with_capacity(expected.len());
        let mut bound_types: HashMap<TypeId, &'static str> = HashMap::with_capacity(expected.len());
        for name in expected {
            let found = &candidates[name];
            if found.len() > 1 {
                let mut sources: Vec<String> = found
                    .iter()
                    .map(|t| t.source_location().to_string())
                    .collect();
                sources.sort();
                return Err(ConstructionError::Duplicate {
                    family: family.to_string(),
                    name: name.to_string(),
                    sources,
                }
                .into());
            }
            if let Some(first) = bound_types.insert(found[0].type_id(), *name) {
                return Err(ConstructionError::Aliased {
                    family: family.to_string(),
                    names: vec![first.to_string(), name.to_string()],
                }
                .into());
            }
            index.insert(*name, entries.len());
            entries.push(found[0]);
        }

        debug!(
            family = family,
            models = entries.len(),
            "Built model namespace"
        );
        Ok(Self {
            family,
            entries,
            index,
        })
    }

    /// Build from every registration linked into the program.
    pub fn from_inventory(family: &'static str, expected: &[&'static str]) -> RSBMResult<Self> {
        Self::build(family, expected, inventory::iter::<ModelRegistration>)
    }

    pub fn family(&self) -> &'static str {
        self.family
    }

    /// Get the model type bound to `name`.
    ///
    /// # Errors
    ///
    /// [`RSBMError::UnknownModel`] if `name` is not one of the public names.
    pub fn resolve(&self, name: &str) -> RSBMResult<&'static ModelType> {
        match self.index.get(name) {
            Some(&i) => Ok(self.entries[i]),
            None => Err(RSBMError::UnknownModel {
                name: name.to_string(),
                available: self.list_available().iter().map(|n| n.to_string()).collect(),
            }),
        }
    }

    /// Public names in declaration order.
    pub fn list_available(&self) -> Vec<&'static str> {
        self.entries.iter().map(|t| t.name()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Model types in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &'static ModelType> + '_ {
        self.entries.iter().copied()
    }
}
