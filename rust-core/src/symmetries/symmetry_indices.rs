use log::debug;
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::DiffuseError;
use crate::grid::bins::Bins;
use crate::grid::voxel_grid::{ravel_cube, VoxelGrid};
use crate::symmetries::symmetry_operations::{SymmetryOperation, SymmetryOperatorSet};
use crate::Result;

/// Index array of one operator.
///
/// `indices[i]` is the grid voxel whose image under the operator has the i-th
/// smallest flat index, so gathering a map through `indices` moves every value
/// onto its symmetry mate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatorIndices {
    pub key: usize,
    pub friedel: bool,
    pub indices: Vec<usize>,
}

/// Symmetry-equivalent voxel indices for every operator, plus multiplicities.
///
/// Building a table is the expensive step; it depends only on the operators,
/// bins and subsampling, so one table serves every map on the same grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymmetryIndexTable {
    grid_size: usize,
    entries: Vec<OperatorIndices>,
    multiplicities: Vec<usize>,
}

impl SymmetryIndexTable {
    /// Assemble a table from per-operator index arrays; multiplicities are derived.
    pub fn from_entries(grid_size: usize, entries: Vec<OperatorIndices>) -> Result<Self> {
        let multiplicities = compute_multiplicities(&entries, grid_size);
        let table = SymmetryIndexTable {
            grid_size,
            entries,
            multiplicities,
        };
        table.validate()?;
        Ok(table)
    }

    /// Number of voxels every index array addresses
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Number of operators
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[OperatorIndices] {
        &self.entries
    }

    pub fn indices(&self, key: usize) -> Option<&[usize]> {
        self.entries.get(key).map(|entry| entry.indices.as_slice())
    }

    pub fn multiplicities(&self) -> &[usize] {
        &self.multiplicities
    }

    /// Entries of operators that are not Friedel mates
    pub fn non_friedel_entries(&self) -> impl Iterator<Item = &OperatorIndices> {
        self.entries.iter().filter(|entry| !entry.friedel)
    }

    /// Check internal consistency; tables read from a cache go through this.
    pub fn validate(&self) -> Result<()> {
        if self.entries.is_empty() {
            return Err(DiffuseError::NoOperators);
        }
        for (position, entry) in self.entries.iter().enumerate() {
            if entry.key != position {
                return Err(DiffuseError::MalformedTable(format!(
                    "entry at position {} carries key {}",
                    position, entry.key
                )));
            }
            if entry.indices.len() != self.grid_size {
                return Err(DiffuseError::ShapeMismatch {
                    what: "operator index array",
                    expected: self.grid_size,
                    actual: entry.indices.len(),
                });
            }
            if let Some(&index) = entry.indices.iter().find(|&&i| i >= self.grid_size) {
                return Err(DiffuseError::IndexOutOfRange {
                    key: entry.key,
                    index,
                    grid_size: self.grid_size,
                });
            }
        }
        if self.multiplicities.len() != self.grid_size {
            return Err(DiffuseError::ShapeMismatch {
                what: "multiplicity array",
                expected: self.grid_size,
                actual: self.multiplicities.len(),
            });
        }
        let n_ops = self.entries.len();
        if let Some((voxel, &value)) = self
            .multiplicities
            .iter()
            .enumerate()
            .find(|(_, &m)| m == 0 || m > n_ops)
        {
            return Err(DiffuseError::InvalidMultiplicity { voxel, value });
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| DiffuseError::MalformedTable(e.to_string()))
    }

    /// Load a cached table. Multiplicities are derived data, so the stored
    /// ones must match what the index arrays give.
    pub fn from_json(json: &str) -> Result<Self> {
        let table: SymmetryIndexTable =
            serde_json::from_str(json).map_err(|e| DiffuseError::MalformedTable(e.to_string()))?;
        table.validate()?;

        let derived = compute_multiplicities(&table.entries, table.grid_size);
        if let Some(voxel) = derived
            .iter()
            .zip(&table.multiplicities)
            .position(|(expected, stored)| expected != stored)
        {
            return Err(DiffuseError::MalformedTable(format!(
                "stored multiplicity {} at voxel {} disagrees with the index arrays ({})",
                table.multiplicities[voxel], voxel, derived[voxel]
            )));
        }
        Ok(table)
    }
}

/// Compute symmetry-equivalent voxel indices for every operator on the grid
/// spanned by `bins`.
///
/// Rotated vectors are shifted by the grid's platform, scaled by `subsampling`,
/// rounded half-to-even and raveled into a cube of side `extent`. Rounding is
/// lossy: distinct vectors may land on the same flat index, which is what
/// produces multiplicities below the operator count.
pub fn generate_symmetry_indices(
    operators: &SymmetryOperatorSet,
    bins: &Bins,
    subsampling: f64,
) -> Result<(SymmetryIndexTable, VoxelGrid)> {
    if !(subsampling.is_finite() && subsampling > 0.0) {
        return Err(DiffuseError::InvalidSubsampling(subsampling));
    }
    if operators.is_empty() {
        return Err(DiffuseError::NoOperators);
    }

    let grid = VoxelGrid::new(bins)?;
    debug!(
        "Indexing {} voxels (extent {}, platform {}) under {} operators",
        grid.len(),
        grid.extent(),
        grid.platform(),
        operators.len()
    );

    let index_operator = |(key, operation): (usize, &SymmetryOperation)| -> Result<OperatorIndices> {
        let flat = flat_indices(key, operation, &grid, subsampling)?;
        Ok(OperatorIndices {
            key,
            friedel: operation.friedel,
            indices: argsort(&flat),
        })
    };

    #[cfg(feature = "parallel")]
    let entries = operators
        .operations()
        .par_iter()
        .enumerate()
        .map(index_operator)
        .collect::<Result<Vec<_>>>()?;
    #[cfg(not(feature = "parallel"))]
    let entries = operators
        .iter()
        .map(index_operator)
        .collect::<Result<Vec<_>>>()?;

    let table = SymmetryIndexTable::from_entries(grid.len(), entries)?;
    Ok((table, grid))
}

/// Flat cube index of every rotated grid vector under one operator.
pub fn flat_indices(
    key: usize,
    operation: &SymmetryOperation,
    grid: &VoxelGrid,
    subsampling: f64,
) -> Result<Vec<usize>> {
    let extent = grid.extent();
    let platform = grid.platform();

    grid.vectors()
        .iter()
        .enumerate()
        .map(|(voxel, hkl)| {
            let bumped = (operation.apply(hkl).add_scalar(platform) * subsampling)
                .map(|x| x.round_ties_even());
            let coordinate = [bumped.x as i64, bumped.y as i64, bumped.z as i64];
            let in_cube = bumped.iter().all(|x| x.is_finite())
                && coordinate.iter().all(|&c| c >= 0 && (c as usize) < extent);
            if !in_cube {
                return Err(DiffuseError::OutsideIndexSpace {
                    key,
                    voxel,
                    coordinate,
                    extent,
                });
            }
            Ok(ravel_cube(
                [
                    coordinate[0] as usize,
                    coordinate[1] as usize,
                    coordinate[2] as usize,
                ],
                extent,
            ))
        })
        .collect()
}

/// Stable ordering that sorts `values`; ties keep grid order.
fn argsort(values: &[usize]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by_key(|&i| values[i]);
    order
}

/// Number of distinct indices each voxel collects across all operators.
pub fn compute_multiplicities(entries: &[OperatorIndices], grid_size: usize) -> Vec<usize> {
    let count_distinct = |voxel: usize| -> usize {
        let mut column: Vec<usize> = entries
            .iter()
            .filter_map(|entry| entry.indices.get(voxel).copied())
            .collect();
        column.sort_unstable();
        column.dedup();
        column.len()
    };

    #[cfg(feature = "parallel")]
    let multiplicities = (0..grid_size).into_par_iter().map(count_distinct).collect();
    #[cfg(not(feature = "parallel"))]
    let multiplicities = (0..grid_size).map(count_distinct).collect();

    multiplicities
}
