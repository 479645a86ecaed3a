use diffuse_maps::grid::Bins;
use diffuse_maps::maps::symmetrize;
use diffuse_maps::symmetries::{
    generate_symmetry_indices, index_operators, rotation_from_rows, LaueClass,
    SymmetryIndexTable, SymmetryOperatorSet,
};
use pyo3::exceptions::{PyKeyError, PyValueError};
use pyo3::prelude::*;

use crate::utils::to_py_err;

/// Python wrapper for a symmetry index table
#[pyclass(name = "SymmetryIndexTable")]
pub struct PySymmetryIndexTable {
    pub(crate) inner: SymmetryIndexTable,
    grid: Vec<[f64; 3]>,
}

#[pymethods]
impl PySymmetryIndexTable {
    /// Build the table for positional operators (second half = Friedel mates
    /// of the first half) on the grid spanned by `h`, `k`, `l`.
    #[staticmethod]
    #[pyo3(signature = (operators, h, k, l, subsampling=1.0))]
    fn generate(
        operators: Vec<[[f64; 3]; 3]>,
        h: Vec<f64>,
        k: Vec<f64>,
        l: Vec<f64>,
        subsampling: f64,
    ) -> PyResult<Self> {
        let operators = SymmetryOperatorSet::from_positional(
            operators.iter().map(rotation_from_rows).collect(),
        )
        .map_err(to_py_err)?;
        let bins = Bins::new(h, k, l).map_err(to_py_err)?;
        let (inner, grid) =
            generate_symmetry_indices(&operators, &bins, subsampling).map_err(to_py_err)?;

        Ok(PySymmetryIndexTable {
            inner,
            grid: grid.vectors().iter().map(|v| [v.x, v.y, v.z]).collect(),
        })
    }

    /// Scattering vectors in canonical order
    fn grid(&self) -> Vec<[f64; 3]> {
        self.grid.clone()
    }

    fn multiplicities(&self) -> Vec<usize> {
        self.inner.multiplicities().to_vec()
    }

    /// Index array of operator `key`
    fn indices(&self, key: usize) -> PyResult<Vec<usize>> {
        self.inner
            .indices(key)
            .map(|indices| indices.to_vec())
            .ok_or_else(|| PyKeyError::new_err(format!("No operator with key {}", key)))
    }

    #[pyo3(signature = (input_map, from_asu=false))]
    fn symmetrize(&self, input_map: Vec<f64>, from_asu: bool) -> PyResult<Vec<f64>> {
        symmetrize(&input_map, &self.inner, from_asu).map_err(to_py_err)
    }

    fn to_json(&self) -> PyResult<String> {
        self.inner.to_json().map_err(to_py_err)
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "SymmetryIndexTable(operators={}, voxels={})",
            self.inner.len(),
            self.inner.grid_size()
        )
    }
}

/// Positional operator matrices (row-major) of a Laue class given by its symbol,
/// ready for `SymmetryIndexTable.generate`.
///
/// Raises `ValueError` for trigonal and hexagonal classes, which cannot index a
/// Cartesian grid.
#[pyfunction]
#[pyo3(name = "laue_operators")]
pub fn py_laue_operators(symbol: &str) -> PyResult<Vec<[[f64; 3]; 3]>> {
    let class: LaueClass = symbol.parse().map_err(PyValueError::new_err)?;
    Ok(index_operators(class)
        .map_err(to_py_err)?
        .operations()
        .iter()
        .map(|op| {
            let r = op.rotation;
            [
                [r[(0, 0)], r[(0, 1)], r[(0, 2)]],
                [r[(1, 0)], r[(1, 1)], r[(1, 2)]],
                [r[(2, 0)], r[(2, 1)], r[(2, 2)]],
            ]
        })
        .collect())
}
