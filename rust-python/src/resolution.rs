use diffuse_maps::resolution::{CellConstants, ResolutionCalculator, SpaceGroupTable};
use nalgebra::Vector3;
use pyo3::prelude::*;

use crate::utils::to_py_err;

/// d-spacing of every (h, k, l) triple.
///
/// Returns an empty list for space groups outside the supported families.
/// `trigonal=True` extends the hexagonal family down to space group 143.
#[pyfunction]
#[pyo3(name = "compute_resolution", signature = (space_group, cell, scattering_vectors, trigonal=false))]
pub fn py_compute_resolution(
    space_group: u16,
    cell: Vec<f64>,
    scattering_vectors: Vec<[f64; 3]>,
    trigonal: bool,
) -> PyResult<Vec<f64>> {
    let cell = CellConstants::from_slice(&cell).map_err(to_py_err)?;
    let vectors: Vec<Vector3<f64>> = scattering_vectors.into_iter().map(Vector3::from).collect();

    let table = if trigonal {
        SpaceGroupTable::default().with_trigonal()
    } else {
        SpaceGroupTable::default()
    };
    Ok(ResolutionCalculator::new(table).compute(space_group, &cell, &vectors))
}
