use serde::{Deserialize, Serialize};

use crate::error::DiffuseError;
use crate::interfaces::Axis;
use crate::Result;

/// Bin centers along the three reciprocal-space axes.
///
/// Deserializes from the collaborator format `{"h": [...], "k": [...], "l": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bins {
    h: Vec<f64>,
    k: Vec<f64>,
    l: Vec<f64>,
}

impl Bins {
    /// Create bins from the three ordered axis sequences.
    pub fn new(h: Vec<f64>, k: Vec<f64>, l: Vec<f64>) -> Result<Self> {
        let bins = Bins { h, k, l };
        bins.validate()?;
        Ok(bins)
    }

    /// Symmetric bins from `-max_index` to `max_index` in steps of `1 / subsampling`,
    /// identical on all three axes.
    pub fn centered(max_index: u32, subsampling: u32) -> Result<Self> {
        if subsampling == 0 {
            return Err(DiffuseError::InvalidSubsampling(0.0));
        }
        let n = (max_index as usize)
            .checked_mul(2)
            .and_then(|n| n.checked_mul(subsampling as usize))
            .and_then(|n| n.checked_add(1))
            .ok_or(DiffuseError::GridTooLarge {
                max_index,
                subsampling,
            })?;
        let step = 1.0 / subsampling as f64;
        let centers: Vec<f64> = (0..n)
            .map(|i| -(max_index as f64) + i as f64 * step)
            .collect();
        Self::new(centers.clone(), centers.clone(), centers)
    }

    /// Check that every axis is non-empty and finite. Deserialized bins skip the
    /// constructor, so callers reading bins from disk should run this.
    pub fn validate(&self) -> Result<()> {
        for axis in Axis::ALL {
            let centers = self.axis(axis);
            if centers.is_empty() {
                return Err(DiffuseError::EmptyAxis(axis));
            }
            if let Some(position) = centers.iter().position(|x| !x.is_finite()) {
                return Err(DiffuseError::NonFiniteBin { axis, position });
            }
        }
        Ok(())
    }

    pub fn axis(&self, axis: Axis) -> &[f64] {
        match axis {
            Axis::H => &self.h,
            Axis::K => &self.k,
            Axis::L => &self.l,
        }
    }

    /// Number of bins along (h, k, l)
    pub fn shape(&self) -> [usize; 3] {
        [self.h.len(), self.k.len(), self.l.len()]
    }

    /// Total number of voxels spanned by the bins
    pub fn voxel_count(&self) -> usize {
        self.h.len() * self.k.len() * self.l.len()
    }

    /// Largest axis length; side of the cubic index space.
    pub fn extent(&self) -> usize {
        self.shape().into_iter().max().unwrap_or(0)
    }

    /// Largest absolute bin-center value over all axes.
    pub fn platform(&self) -> f64 {
        Axis::ALL
            .iter()
            .flat_map(|&axis| self.axis(axis).iter())
            .fold(0.0_f64, |acc, x| acc.max(x.abs()))
    }
}
