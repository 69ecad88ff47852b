//! RSBM: battery model catalogs.
//!
//! Re-exports the core machinery and the model families, and hosts the Python
//! extension module when built with the `python` feature.

pub use rsbm_core;
pub use rsbm_models;
pub use rsbm_models::lithium_ion;

#[cfg(feature = "python")]
mod python {
    use pyo3::prelude::*;
    use pyo3::wrap_pymodule;
    use rsbm_core::python::core;
    use rsbm_models::python::lithium_ion_module;

    #[pymodule]
    #[pyo3(name = "_lib")]
    fn rsbm(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add("__version__", env!("CARGO_PKG_VERSION"))?;
        m.add_wrapped(wrap_pymodule!(core))?;
        m.add_wrapped(wrap_pymodule!(lithium_ion_module))?;

        set_path(m, "rsbm._lib.core", "core")?;
        set_path(m, "rsbm._lib.lithium_ion", "lithium_ion")?;

        Ok(())
    }

    fn set_path(m: &Bound<'_, PyModule>, path: &str, module: &str) -> PyResult<()> {
        let code = format!(
            "\
import sys
sys.modules['{path}'] = {module}
    "
        );
        m.py().run_bound(&code, None, Some(&m.dict()))
    }
}
