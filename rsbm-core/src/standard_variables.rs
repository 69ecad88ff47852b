//! Standard variable definitions for lithium-ion models.
//!
//! These variables are registered at compile-time using the [`define_static_variable!`]
//! macro and are available in the global [`VARIABLE_REGISTRY`](crate::variable::VARIABLE_REGISTRY).
//!
//! Names carry their unit in square brackets, e.g. `Voltage [V]`. Quantities
//! averaged through the thickness of the cell are prefixed with `X-averaged`.
//!
//! ```rust
//! use rsbm_core::standard_variables::VAR_VOLTAGE;
//! use rsbm_core::variable::VARIABLE_REGISTRY;
//!
//! assert_eq!(VAR_VOLTAGE.name, "Voltage [V]");
//! assert!(VARIABLE_REGISTRY.contains(VAR_VOLTAGE.name));
//! ```

use crate::define_static_variable;
use crate::variable::Domain;

// ============================================================================
// Cell Variables
// ============================================================================

define_static_variable!(
    VAR_TIME,
    name = "Time [s]",
    unit = "s",
    domain = Domain::Cell,
    description = "Simulation time",
);

define_static_variable!(
    VAR_CURRENT,
    name = "Current [A]",
    unit = "A",
    domain = Domain::Cell,
    description = "Applied current, positive on discharge",
);

define_static_variable!(
    VAR_VOLTAGE,
    name = "Voltage [V]",
    unit = "V",
    domain = Domain::Cell,
    description = "Terminal voltage of the cell",
);

define_static_variable!(
    VAR_DISCHARGE_CAPACITY,
    name = "Discharge capacity [A.h]",
    unit = "A.h",
    domain = Domain::Cell,
    description = "Charge passed since the start of the simulation",
);

define_static_variable!(
    VAR_CELL_TEMPERATURE,
    name = "Volume-averaged cell temperature [K]",
    unit = "K",
    domain = Domain::Cell,
    description = "Cell temperature averaged over the cell volume",
);

// ============================================================================
// Particle Variables
// ============================================================================

define_static_variable!(
    VAR_XAVG_NEGATIVE_PARTICLE_CONCENTRATION,
    name = "X-averaged negative particle concentration [mol.m-3]",
    unit = "mol.m-3",
    domain = Domain::NegativeParticle,
    description = "Lithium concentration in the representative negative particle",
);

define_static_variable!(
    VAR_XAVG_POSITIVE_PARTICLE_CONCENTRATION,
    name = "X-averaged positive particle concentration [mol.m-3]",
    unit = "mol.m-3",
    domain = Domain::PositiveParticle,
    description = "Lithium concentration in the representative positive particle",
);

define_static_variable!(
    VAR_NEGATIVE_PARTICLE_CONCENTRATION,
    name = "Negative particle concentration [mol.m-3]",
    unit = "mol.m-3",
    domain = Domain::NegativeParticle,
    description = "Lithium concentration in negative particles at every electrode position",
);

define_static_variable!(
    VAR_POSITIVE_PARTICLE_CONCENTRATION,
    name = "Positive particle concentration [mol.m-3]",
    unit = "mol.m-3",
    domain = Domain::PositiveParticle,
    description = "Lithium concentration in positive particles at every electrode position",
);

define_static_variable!(
    VAR_NEGATIVE_PARTICLE_SIZE_DISTRIBUTION,
    name = "X-averaged negative particle surface concentration distribution [mol.m-3]",
    unit = "mol.m-3",
    domain = Domain::NegativeParticleSize,
    description = "Surface concentration of negative particles as a function of particle radius",
);

define_static_variable!(
    VAR_POSITIVE_PARTICLE_SIZE_DISTRIBUTION,
    name = "X-averaged positive particle surface concentration distribution [mol.m-3]",
    unit = "mol.m-3",
    domain = Domain::PositiveParticleSize,
    description = "Surface concentration of positive particles as a function of particle radius",
);

// ============================================================================
// Electrolyte and Electrode Variables
// ============================================================================

define_static_variable!(
    VAR_ELECTROLYTE_CONCENTRATION,
    name = "Electrolyte concentration [mol.m-3]",
    unit = "mol.m-3",
    domain = Domain::Electrolyte,
    description = "Lithium-ion concentration in the electrolyte",
);

define_static_variable!(
    VAR_ELECTROLYTE_POTENTIAL,
    name = "Electrolyte potential [V]",
    unit = "V",
    domain = Domain::Electrolyte,
    description = "Electric potential of the electrolyte",
);

define_static_variable!(
    VAR_NEGATIVE_ELECTRODE_POTENTIAL,
    name = "Negative electrode potential [V]",
    unit = "V",
    domain = Domain::NegativeElectrode,
    description = "Electric potential of the negative electrode solid phase",
);

define_static_variable!(
    VAR_POSITIVE_ELECTRODE_POTENTIAL,
    name = "Positive electrode potential [V]",
    unit = "V",
    domain = Domain::PositiveElectrode,
    description = "Electric potential of the positive electrode solid phase",
);
