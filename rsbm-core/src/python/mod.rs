//! Python wrappers for model type handles and model instances.

use crate::model::BatteryModel;
use crate::namespace::ModelType;
use crate::options::ModelOptions;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Python wrapper for a model type handle.
#[pyclass(name = "ModelType", module = "rsbm._lib.core", frozen)]
#[derive(Clone)]
pub struct PyModelType(pub &'static ModelType);

#[pymethods]
impl PyModelType {
    /// Public name of the model type.
    #[getter]
    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    #[getter]
    pub fn full_name(&self) -> &'static str {
        self.0.full_name()
    }

    #[getter]
    pub fn source_location(&self) -> &'static str {
        self.0.source_location()
    }

    #[getter]
    pub fn description(&self) -> &'static str {
        self.0.description()
    }

    /// Build a model instance.
    ///
    /// `options` is a dict using the option names as keys, e.g.
    /// `{"thermal": "lumped", "particle size": "distribution"}`.
    #[pyo3(signature = (options=None))]
    pub fn build(&self, options: Option<Bound<'_, PyAny>>) -> PyResult<PyBatteryModel> {
        let options = match options {
            Some(options) => pythonize::depythonize::<ModelOptions>(&options)
                .map_err(|e| PyValueError::new_err(format!("{}", e)))?,
            None => ModelOptions::default(),
        };
        self.0
            .build(options)
            .map(PyBatteryModel)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn __repr__(&self) -> String {
        format!("<ModelType {}>", self.0)
    }

    fn __eq__(&self, other: &PyModelType) -> bool {
        std::ptr::eq(self.0, other.0)
    }

    fn __hash__(&self) -> u64 {
        self.0 as *const ModelType as usize as u64
    }
}

/// Python wrapper for a model instance.
#[pyclass(name = "BatteryModel", module = "rsbm._lib.core")]
pub struct PyBatteryModel(pub Box<dyn BatteryModel>);

#[pymethods]
impl PyBatteryModel {
    #[getter]
    pub fn name(&self) -> String {
        self.0.name().to_string()
    }

    #[setter]
    pub fn set_name(&mut self, name: String) {
        self.0.set_name(name);
    }

    #[getter]
    pub fn model_type(&self) -> PyModelType {
        PyModelType(self.0.model_type())
    }

    /// Resolved options as a dict.
    pub fn options(&self, py: Python<'_>) -> PyResult<PyObject> {
        pythonize::pythonize(py, self.0.options())
            .map_err(|e| PyValueError::new_err(format!("{}", e)))
    }

    /// Names of the variables this model defines.
    pub fn variable_names(&self) -> Vec<&'static str> {
        self.0.variables().iter().map(|v| v.name).collect()
    }

    /// `(slot, submodel)` pairs in composition order.
    pub fn submodels(&self) -> Vec<(&'static str, String)> {
        self.0
            .submodels()
            .iter()
            .map(|s| (s.slot(), format!("{:?}", s)))
            .collect()
    }

    fn __repr__(&self) -> String {
        format!("<{} '{}'>", self.0.model_type().name(), self.0.name())
    }
}

#[pymodule]
pub fn core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyModelType>()?;
    m.add_class::<PyBatteryModel>()?;
    Ok(())
}
