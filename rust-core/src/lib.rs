//! Diffuse-scattering map library
//!
//! This library provides the numeric core for working with three-dimensional
//! reciprocal-space diffuse-scattering maps: symmetry-equivalent voxel indices,
//! map symmetrization, multiplicities, d-spacings and weighted map correlation.

pub mod config;
pub mod error;
pub mod grid;
pub mod interfaces;
pub mod maps;
pub mod resolution;
pub mod symmetries;

pub use error::DiffuseError;

/// Common result type used throughout the library
pub type Result<T> = std::result::Result<T, DiffuseError>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
