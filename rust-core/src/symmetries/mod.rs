// Symmetries module: point-group operators and symmetry-equivalent voxel indices
// This module turns a set of Laue-class operators into index tables over the voxel grid

// ======================== MODULE DECLARATIONS ========================
pub mod symmetry_indices;
pub mod symmetry_operations;
pub mod symmetry_point_groups;


// ======================== SYMMETRY OPERATIONS ========================
pub use symmetry_operations::{
    SymmetryOperation,    // struct - rotation acting on (h, k, l) plus explicit Friedel flag
    SymmetryOperatorSet,  // struct - ordered operator set keyed 0..N
    rotation_from_rows,   // fn(rows: &[[f64; 3]; 3]) -> Matrix3<f64> - row-major matrix from nested arrays
};
// SymmetryOperatorSet impl methods:
//   new(operations: Vec<SymmetryOperation>) -> Result<Self>           - explicit Friedel flags
//   from_positional(rotations: Vec<Matrix3<f64>>) -> Result<Self>     - second half are validated Friedel mates
//   with_friedel_mates(rotations: Vec<Matrix3<f64>>) -> Result<Self>  - appends -R for every rotation
//   non_friedel_keys(&self) -> Vec<usize>                             - keys used for ASU summation

// ======================== LAUE CLASSES ========================
pub use symmetry_point_groups::{
    LaueClass,             // enum - the eleven Laue classes (-1 ... m-3m)
    laue_group_operators,  // fn(class: LaueClass) -> SymmetryOperatorSet - proper rotations then Friedel mates
    index_operators,       // fn(class: LaueClass) -> Result<SymmetryOperatorSet> - Cartesian-grid classes only
    proper_rotations,      // fn(class: LaueClass) -> Vec<Matrix3<i32>> - rotation subgroup by generator closure
};

// ======================== SYMMETRY INDEX TABLES ========================
pub use symmetry_indices::{
    OperatorIndices,            // struct - index array of one operator
    SymmetryIndexTable,         // struct - index arrays for all operators plus multiplicities
    compute_multiplicities,     // fn(entries: &[OperatorIndices], grid_size: usize) -> Vec<usize>
    flat_indices,               // fn(key, operation, grid, subsampling) -> Result<Vec<usize>> - raveled rotated voxels
    generate_symmetry_indices,  // fn(operators, bins, subsampling) -> Result<(SymmetryIndexTable, VoxelGrid)>
};
