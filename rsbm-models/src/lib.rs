//! Battery model types for RSBM
//!
//! Model families are exposed as namespaces: each family module re-exports its model
//! types and binds them to a fixed list of public names.
//!
//! - `lithium_ion`: BaseModel, SPM, SPMe, DFN, BasicDFN, BasicSPM, BasicMPM, MPM

pub mod lithium_ion;
#[cfg(feature = "python")]
pub mod python;
