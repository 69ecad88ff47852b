pub mod config;
pub mod errors;
pub mod model;
pub mod namespace;
pub mod options;
#[cfg(feature = "python")]
pub mod python;
pub mod standard_variables;
pub mod variable;
