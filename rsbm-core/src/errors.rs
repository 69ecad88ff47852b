use thiserror::Error;

/// Failures while assembling a model namespace.
///
/// A namespace is either complete or not constructed at all, so these are fatal to
/// whatever bootstrap code requested the namespace.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    #[error("Model namespace '{family}' is incomplete: no model type registered for {}", .names.join(", "))]
    Missing { family: String, names: Vec<String> },
    #[error("Model namespace '{family}' has conflicting registrations for '{name}': {}", .sources.join(", "))]
    Duplicate {
        family: String,
        name: String,
        sources: Vec<String>,
    },
    #[error("Model namespace '{family}' binds one model type to several names: {}", .names.join(", "))]
    Aliased { family: String, names: Vec<String> },
    #[error("Model namespace '{family}' declares the name '{name}' more than once")]
    RepeatedName { family: String, name: String },
}

/// Error type for invalid operations.
#[derive(Error, Debug)]
pub enum RSBMError {
    #[error("Variable '{name}' is already registered ({origin})")]
    VariableAlreadyRegistered { name: String, origin: &'static str },
    #[error("Unknown model '{name}'. Available models: {}", .available.join(", "))]
    UnknownModel {
        name: String,
        available: Vec<String>,
    },
    #[error(transparent)]
    Construction(#[from] ConstructionError),
    #[error("Invalid option for {model}: '{option}' = '{value}'. {reason}")]
    InvalidOption {
        model: String,
        option: String,
        value: String,
        reason: String,
    },
    #[error("Could not parse model configuration: {0}")]
    Config(String),
    #[error("Could not read model configuration: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type for `Result<T, RSBMError>`.
pub type RSBMResult<T> = Result<T, RSBMError>;
