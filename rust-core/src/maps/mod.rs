// Maps module: symmetrization and comparison of intensity maps
// Maps are flat f64 slices aligned to the canonical voxel order of the grid

// ======================== MODULE DECLARATIONS ========================
pub mod correlation;
pub mod symmetrize;

mod _tests_symmetrize;

// ======================== SYMMETRIZATION ========================
pub use symmetrize::{
    symmetrize,      // fn(input_map: &[f64], table: &SymmetryIndexTable, from_asu: bool) -> Result<Vec<f64>>
    symmetrize_with, // fn(input_map: &[f64], table: &SymmetryIndexTable, mode: SymmetrizeMode) -> Result<Vec<f64>>
};

// ======================== CORRELATION ========================
pub use correlation::weighted_correlation; // fn(map1: &[f64], map2: &[f64], multiplicities: Option<&[usize]>) -> Result<f64>
