#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::DiffuseError;
use crate::interfaces::SymmetrizeMode;
use crate::symmetries::symmetry_indices::{OperatorIndices, SymmetryIndexTable};
use crate::Result;

/// Symmetrize a map with the index table built for its grid.
///
/// With `from_asu == false` the input is an unsymmetrized unit-cell map and
/// every voxel becomes the mean of its non-zero symmetry equivalents. With
/// `from_asu == true` the input holds asymmetric-unit data only and the
/// equivalents under the non-Friedel operators are summed.
///
/// The input is never modified; the result is a new map of the same length.
pub fn symmetrize(input_map: &[f64], table: &SymmetryIndexTable, from_asu: bool) -> Result<Vec<f64>> {
    symmetrize_with(input_map, table, SymmetrizeMode::from_asu(from_asu))
}

/// [`symmetrize`] with an explicit mode.
pub fn symmetrize_with(
    input_map: &[f64],
    table: &SymmetryIndexTable,
    mode: SymmetrizeMode,
) -> Result<Vec<f64>> {
    if input_map.len() != table.grid_size() {
        return Err(DiffuseError::ShapeMismatch {
            what: "intensity map",
            expected: table.grid_size(),
            actual: input_map.len(),
        });
    }

    let output = match mode {
        SymmetrizeMode::UnitCell => {
            let entries: Vec<&OperatorIndices> = table.entries().iter().collect();
            per_voxel(input_map.len(), |voxel| average_nonzero(input_map, &entries, voxel))
        }
        SymmetrizeMode::AsymmetricUnit => {
            let entries: Vec<&OperatorIndices> = table.non_friedel_entries().collect();
            per_voxel(input_map.len(), |voxel| {
                entries
                    .iter()
                    .map(|entry| input_map[entry.indices[voxel]])
                    .sum()
            })
        }
    };
    Ok(output)
}

// Zeros mark unmeasured voxels and do not count towards the mean
fn average_nonzero(input_map: &[f64], entries: &[&OperatorIndices], voxel: usize) -> f64 {
    let mut sum = 0.0;
    let mut count = entries.len();
    for entry in entries {
        let value = input_map[entry.indices[voxel]];
        sum += value;
        if value == 0.0 {
            count -= 1;
        }
    }
    if count != 0 {
        sum / count as f64
    } else {
        sum
    }
}

fn per_voxel<F>(len: usize, f: F) -> Vec<f64>
where
    F: Fn(usize) -> f64 + Sync + Send,
{
    #[cfg(feature = "parallel")]
    let output = (0..len).into_par_iter().map(f).collect();
    #[cfg(not(feature = "parallel"))]
    let output = (0..len).map(f).collect();

    output
}
