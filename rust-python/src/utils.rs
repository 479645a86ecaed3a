/// Utility functions for the diffuse-maps Python module
use diffuse_maps::DiffuseError;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Get the version of the diffuse-maps library
#[pyfunction]
pub fn version() -> &'static str {
    diffuse_maps::VERSION
}

pub(crate) fn to_py_err(err: DiffuseError) -> PyErr {
    PyValueError::new_err(err.to_string())
}
