// Resolution module: d-spacings of scattering vectors from unit-cell geometry
// Formula selection goes through a configurable space-group table

// ======================== MODULE DECLARATIONS ========================
pub mod cell_constants;
pub mod d_spacing;
pub mod space_group_table;

// Test modules
mod _tests_resolution;

// ======================== CELL CONSTANTS ========================
pub use cell_constants::CellConstants; // struct - a, b, c and α, β, γ in degrees

// ======================== SPACE-GROUP TABLE ========================
pub use space_group_table::{
    CrystalFamily,   // enum - d-spacing formula family (Orthogonal, Hexagonal, Monoclinic)
    SpaceGroupRange, // struct - inclusive space-group range mapped to a family
    SpaceGroupTable, // struct - ordered ranges; hexagonal lower bound configurable
};

// ======================== D-SPACINGS ========================
pub use d_spacing::{
    ResolutionCalculator,          // struct - d-spacings with a custom space-group table
    compute_resolution,            // fn(space_group: u16, cell: &CellConstants, vectors: &[Vector3<f64>]) -> Vec<f64>
    inverse_d_spacing,             // fn(family: CrystalFamily, cell: &CellConstants, hkl: &Vector3<f64>) -> f64
    scattering_vectors_from_flat,  // fn(values: &[f64]) -> Result<Vec<Vector3<f64>>>
};
