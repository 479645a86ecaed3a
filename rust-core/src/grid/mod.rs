// Grid module: bin centers, the canonical voxel grid and q-space meshes
// This module defines the voxel ordering that every map and index table is aligned to

// ======================== MODULE DECLARATIONS ========================
pub mod bins;
pub mod reciprocal_mesh;
pub mod voxel_grid;

// Test modules
mod _tests_grid;

// ======================== BINS ========================
pub use bins::Bins; // struct - ordered bin centers for the h, k and l axes
// Bins impl methods:
//   new(h: Vec<f64>, k: Vec<f64>, l: Vec<f64>) -> Result<Self>     - validated construction
//   centered(max_index: u32, subsampling: u32) -> Result<Self>     - symmetric bins -max..=max in steps of 1/subsampling
//   validate(&self) -> Result<()>                                  - non-empty, finite axes
//   axis(&self, axis: Axis) -> &[f64]                              - bin centers of one axis
//   shape(&self) -> [usize; 3]                                     - axis lengths
//   extent(&self) -> usize                                         - longest axis length
//   platform(&self) -> f64                                         - largest absolute bin center

// ======================== VOXEL GRID ========================
pub use voxel_grid::VoxelGrid; // struct - Cartesian product of the bins, h slowest, l fastest
// VoxelGrid impl methods:
//   new(bins: &Bins) -> Result<Self>                               - builds the grid
//   vectors(&self) -> &[Vector3<f64>]                              - scattering vectors in canonical order
//   flat_index(&self, ih, ik, il) -> usize                         - grid-order flat index
//   axis_indices(&self, index: usize) -> [usize; 3]                - inverse of flat_index
//   ravel_cube / unravel_cube                                      - row-major mapping into the extent cube

// ======================== RECIPROCAL-SPACE MESH ========================
pub use reciprocal_mesh::{
    Projection,        // enum - central projection (X, Y, Z)
    ProjectionMesh,    // struct - meshgrid pair for a projection
    ReciprocalAxes,    // struct - q values along h, k, l
    projection_mesh,   // fn(a_matrix: &Matrix3<f64>, bins: &Bins, projection: Projection) -> Result<ProjectionMesh>
    reciprocal_axes,   // fn(a_matrix: &Matrix3<f64>, bins: &Bins) -> Result<ReciprocalAxes>
};
