use diffuse_maps::maps::weighted_correlation;
use pyo3::prelude::*;

use crate::utils::to_py_err;

/// Multiplicity-weighted Pearson correlation over voxels positive in both maps
#[pyfunction]
#[pyo3(name = "weighted_correlation", signature = (map1, map2, multiplicities=None))]
pub fn py_weighted_correlation(
    map1: Vec<f64>,
    map2: Vec<f64>,
    multiplicities: Option<Vec<usize>>,
) -> PyResult<f64> {
    weighted_correlation(&map1, &map2, multiplicities.as_deref()).map_err(to_py_err)
}
