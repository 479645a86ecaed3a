use pyo3::prelude::*;

// Module declarations
mod maps;
mod resolution;
mod symmetries;
mod utils;

use maps::py_weighted_correlation;
use resolution::py_compute_resolution;
use symmetries::{py_laue_operators, PySymmetryIndexTable};
use utils::version;

/// Python module definition
#[pymodule]
fn diffuse_maps_py(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySymmetryIndexTable>()?;

    // Map functions
    m.add_function(wrap_pyfunction!(py_compute_resolution, m)?)?;
    m.add_function(wrap_pyfunction!(py_weighted_correlation, m)?)?;
    m.add_function(wrap_pyfunction!(py_laue_operators, m)?)?;
    m.add_function(wrap_pyfunction!(version, m)?)?;

    // Module metadata
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
