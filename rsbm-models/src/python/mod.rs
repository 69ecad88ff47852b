use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::{pymodule, Bound, PyResult};

use rsbm_core::python::PyModelType;

use crate::lithium_ion;

/// Public model names in declaration order.
#[pyfunction]
pub fn list_available() -> Vec<&'static str> {
    lithium_ion::list_available()
}

/// Resolve a public model name to its model type.
///
/// Raises `ValueError` for names outside the namespace.
#[pyfunction]
pub fn resolve(name: &str) -> PyResult<PyModelType> {
    lithium_ion::resolve(name)
        .map(PyModelType)
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

#[pymodule]
#[pyo3(name = "lithium_ion")]
pub fn lithium_ion_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(list_available, m)?)?;
    m.add_function(wrap_pyfunction!(resolve, m)?)?;
    for model_type in lithium_ion::namespace().iter() {
        m.add(model_type.name(), PyModelType(model_type))?;
    }
    Ok(())
}
