//! Battery variables and their metadata.
//!
//! Models refer to their outputs by name, e.g. `"Voltage [V]"`. The unit, domain and
//! description behind each name are kept in [`VARIABLE_REGISTRY`].
//!
//! ```rust
//! use rsbm_core::variable::VARIABLE_REGISTRY;
//!
//! let var = VARIABLE_REGISTRY.get("Voltage [V]").unwrap();
//! assert_eq!(var.unit, "V");
//! ```

use crate::errors::{RSBMError, RSBMResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{LazyLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Region of the cell over which a variable is defined.
///
/// Scalar cell-level quantities use [`Domain::Cell`]. Particle domains are the
/// radial coordinate inside an electrode particle and particle-size domains are
/// the size coordinate of a particle-size distribution.
#[cfg_attr(feature = "python", pyo3::pyclass)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Domain {
    Cell,
    NegativeElectrode,
    Separator,
    PositiveElectrode,
    NegativeParticle,
    PositiveParticle,
    NegativeParticleSize,
    PositiveParticleSize,
    /// Negative electrode, separator and positive electrode together.
    Electrolyte,
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Domain::Cell => "cell",
            Domain::NegativeElectrode => "negative electrode",
            Domain::Separator => "separator",
            Domain::PositiveElectrode => "positive electrode",
            Domain::NegativeParticle => "negative particle",
            Domain::PositiveParticle => "positive particle",
            Domain::NegativeParticleSize => "negative particle size",
            Domain::PositiveParticleSize => "positive particle size",
            Domain::Electrolyte => "electrolyte",
        };
        write!(f, "{name}")
    }
}

/// Definition of a variable with its metadata.
///
/// # Example
///
/// ```rust
/// use rsbm_core::variable::{Domain, VariableDefinition};
///
/// let voltage = VariableDefinition::new("Voltage [V]", "V", Domain::Cell, "Terminal voltage");
/// assert_eq!(voltage.domain, Domain::Cell);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDefinition {
    /// Unique identifier for the variable (e.g., "Electrolyte concentration [mol.m-3]")
    pub name: String,
    /// Canonical unit for the variable (e.g., "mol.m-3")
    pub unit: String,
    pub domain: Domain,
    /// Human-readable description
    pub description: String,
}

impl VariableDefinition {
    pub fn new(
        name: impl Into<String>,
        unit: impl Into<String>,
        domain: Domain,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            domain,
            description: description.into(),
        }
    }
}

/// A variable declared in a `static` with [`define_static_variable!`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticVariableDefinition {
    pub name: &'static str,
    pub unit: &'static str,
    pub domain: Domain,
    pub description: &'static str,
}

impl StaticVariableDefinition {
    pub const fn new(
        name: &'static str,
        unit: &'static str,
        domain: Domain,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            unit,
            domain,
            description,
        }
    }
}

impl From<&StaticVariableDefinition> for VariableDefinition {
    fn from(var: &StaticVariableDefinition) -> Self {
        VariableDefinition::new(var.name, var.unit, var.domain, var.description)
    }
}

inventory::collect!(StaticVariableDefinition);

/// Declare a battery variable in a `static` and submit it to the registry.
///
/// ```rust
/// use rsbm_core::define_static_variable;
/// use rsbm_core::variable::Domain;
///
/// define_static_variable!(
///     VAR_SEPARATOR_POROSITY,
///     name = "Separator porosity [-]",
///     unit = "-",
///     domain = Domain::Separator,
///     description = "Volume fraction of electrolyte in the separator",
/// );
/// ```
#[macro_export]
macro_rules! define_static_variable {
    (
        $static_name:ident,
        name = $name:expr,
        unit = $unit:expr,
        domain = $domain:expr,
        description = $desc:expr $(,)?
    ) => {
        #[doc = concat!("Battery variable ", $name)]
        pub static $static_name: $crate::variable::StaticVariableDefinition =
            $crate::variable::StaticVariableDefinition::new($name, $unit, $domain, $desc);

        ::inventory::submit! { $static_name }
    };
}

pub use crate::define_static_variable;

fn statics() -> impl Iterator<Item = &'static StaticVariableDefinition> {
    inventory::iter::<StaticVariableDefinition>.into_iter()
}

/// Lookup of variable metadata by name.
///
/// Statically declared variables always take part. Variables added with
/// [`VariableRegistry::register`] live alongside them and may be cleared again.
pub struct VariableRegistry {
    runtime: RwLock<HashMap<String, VariableDefinition>>,
}

impl VariableRegistry {
    pub fn new() -> Self {
        Self {
            runtime: RwLock::new(HashMap::new()),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, VariableDefinition>> {
        self.runtime.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, VariableDefinition>> {
        self.runtime.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add a variable that is not declared statically.
    ///
    /// # Errors
    ///
    /// [`RSBMError::VariableAlreadyRegistered`] if the name is taken, either by a
    /// static declaration or an earlier call.
    pub fn register(&self, var: VariableDefinition) -> RSBMResult<()> {
        if statics().any(|s| s.name == var.name) {
            return Err(RSBMError::VariableAlreadyRegistered {
                name: var.name,
                origin: "static",
            });
        }

        let mut runtime = self.write();
        if runtime.contains_key(&var.name) {
            return Err(RSBMError::VariableAlreadyRegistered {
                name: var.name,
                origin: "runtime",
            });
        }
        runtime.insert(var.name.clone(), var);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<VariableDefinition> {
        match statics().find(|s| s.name == name) {
            Some(var) => Some(var.into()),
            None => self.read().get(name).cloned(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Every known variable, sorted by name.
    pub fn list(&self) -> Vec<VariableDefinition> {
        let mut vars: Vec<VariableDefinition> = statics().map(VariableDefinition::from).collect();
        vars.extend(self.read().values().cloned());
        vars.sort_by(|a, b| a.name.cmp(&b.name));
        vars
    }

    /// Variables defined over `domain`, sorted by name.
    pub fn in_domain(&self, domain: Domain) -> Vec<VariableDefinition> {
        self.list()
            .into_iter()
            .filter(|v| v.domain == domain)
            .collect()
    }

    pub fn len(&self) -> usize {
        statics().count() + self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forget runtime registrations. Static declarations stay.
    pub fn clear_runtime(&self) {
        self.write().clear();
    }
}

impl Default for VariableRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide variable registry.
pub static VARIABLE_REGISTRY: LazyLock<VariableRegistry> = LazyLock::new(VariableRegistry::new);
