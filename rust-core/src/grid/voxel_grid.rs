use nalgebra::Vector3;

use crate::grid::bins::Bins;
use crate::interfaces::Axis;
use crate::Result;

/// The Cartesian product of the h, k and l bins.
///
/// Voxels are stored row-major with h varying slowest and l fastest; this
/// flattening is the canonical voxel order for every map and index table.
#[derive(Debug, Clone)]
pub struct VoxelGrid {
    bins: Bins,
    vectors: Vec<Vector3<f64>>,
    extent: usize,
    platform: f64,
}

impl VoxelGrid {
    /// Build the grid from validated bins.
    pub fn new(bins: &Bins) -> Result<Self> {
        bins.validate()?;

        let mut vectors = Vec::with_capacity(bins.voxel_count());
        for &h in bins.axis(Axis::H) {
            for &k in bins.axis(Axis::K) {
                for &l in bins.axis(Axis::L) {
                    vectors.push(Vector3::new(h, k, l));
                }
            }
        }

        Ok(VoxelGrid {
            bins: bins.clone(),
            vectors,
            extent: bins.extent(),
            platform: bins.platform(),
        })
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn bins(&self) -> &Bins {
        &self.bins
    }

    /// Scattering vectors (h, k, l) in canonical order
    pub fn vectors(&self) -> &[Vector3<f64>] {
        &self.vectors
    }

    /// Side length of the cubic index space
    pub fn extent(&self) -> usize {
        self.extent
    }

    /// Shift that makes every (rotated) coordinate non-negative
    pub fn platform(&self) -> f64 {
        self.platform
    }

    pub fn shape(&self) -> [usize; 3] {
        self.bins.shape()
    }

    /// Flat position of the voxel at axis indices (ih, ik, il) in grid order.
    pub fn flat_index(&self, ih: usize, ik: usize, il: usize) -> usize {
        let [_, nk, nl] = self.shape();
        (ih * nk + ik) * nl + il
    }

    /// Axis indices (ih, ik, il) of the voxel at flat position `index`.
    pub fn axis_indices(&self, index: usize) -> [usize; 3] {
        let [_, nk, nl] = self.shape();
        [index / (nk * nl), (index / nl) % nk, index % nl]
    }

    /// Row-major flat index into the cube of side `extent`.
    pub fn ravel_cube(&self, coordinate: [usize; 3]) -> usize {
        ravel_cube(coordinate, self.extent)
    }

    /// Inverse of [`VoxelGrid::ravel_cube`].
    pub fn unravel_cube(&self, index: usize) -> [usize; 3] {
        unravel_cube(index, self.extent)
    }
}

pub(crate) fn ravel_cube(coordinate: [usize; 3], extent: usize) -> usize {
    (coordinate[0] * extent + coordinate[1]) * extent + coordinate[2]
}

pub(crate) fn unravel_cube(index: usize, extent: usize) -> [usize; 3] {
    [
        index / (extent * extent),
        (index / extent) % extent,
        index % extent,
    ]
}
