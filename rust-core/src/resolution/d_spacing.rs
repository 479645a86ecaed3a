use log::warn;
use nalgebra::Vector3;

use crate::config::RESOLUTION_FLOOR;
use crate::error::DiffuseError;
use crate::resolution::cell_constants::CellConstants;
use crate::resolution::space_group_table::{CrystalFamily, SpaceGroupTable};
use crate::Result;

/// d-spacing calculator with a configurable space-group table.
#[derive(Debug, Clone, Default)]
pub struct ResolutionCalculator {
    table: SpaceGroupTable,
}

impl ResolutionCalculator {
    pub fn new(table: SpaceGroupTable) -> Self {
        ResolutionCalculator { table }
    }

    pub fn table(&self) -> &SpaceGroupTable {
        &self.table
    }

    /// d-spacing of every scattering vector, in input order.
    ///
    /// An unsupported space group yields an empty vector and a warning; check
    /// for emptiness before indexing into the result.
    pub fn compute(
        &self,
        space_group: u16,
        cell: &CellConstants,
        scattering_vectors: &[Vector3<f64>],
    ) -> Vec<f64> {
        match self.try_compute(space_group, cell, scattering_vectors) {
            Ok(d_spacings) => d_spacings,
            Err(e) => {
                warn!("{}; resolution bins have to be supplied manually", e);
                Vec::new()
            }
        }
    }

    /// Like [`ResolutionCalculator::compute`], but an unsupported space group is an error.
    pub fn try_compute(
        &self,
        space_group: u16,
        cell: &CellConstants,
        scattering_vectors: &[Vector3<f64>],
    ) -> Result<Vec<f64>> {
        let family = self
            .table
            .classify(space_group)
            .ok_or(DiffuseError::UnsupportedSpaceGroup(space_group))?;

        Ok(scattering_vectors
            .iter()
            .map(|hkl| {
                let inv_d = inverse_d_spacing(family, cell, hkl);
                // The origin has 1/d = 0; keep its resolution large but finite
                let inv_d = if inv_d == 0.0 { RESOLUTION_FLOOR } else { inv_d };
                1.0 / inv_d
            })
            .collect())
    }
}

/// d-spacings with the default space-group table.
pub fn compute_resolution(
    space_group: u16,
    cell: &CellConstants,
    scattering_vectors: &[Vector3<f64>],
) -> Vec<f64> {
    ResolutionCalculator::default().compute(space_group, cell, scattering_vectors)
}

/// 1/d for one scattering vector.
pub fn inverse_d_spacing(family: CrystalFamily, cell: &CellConstants, hkl: &Vector3<f64>) -> f64 {
    let (h, k, l) = (hkl.x, hkl.y, hkl.z);
    let CellConstants { a, b, c, .. } = *cell;

    match family {
        CrystalFamily::Orthogonal => ((h / a).powi(2) + (k / b).powi(2) + (l / c).powi(2)).sqrt(),
        CrystalFamily::Hexagonal => {
            (4.0 * (h * h + h * k + k * k) / (3.0 * a * a) + (l / c).powi(2)).sqrt()
        }
        CrystalFamily::Monoclinic => {
            let beta = cell.beta.to_radians();
            let sin_beta = beta.sin();
            ((h / (a * sin_beta)).powi(2)
                + (k / b).powi(2)
                + (l / (c * sin_beta)).powi(2)
                + 2.0 * h * l * beta.cos() / (a * c * sin_beta.powi(2)))
            .sqrt()
        }
    }
}

/// Interpret a flat buffer as consecutive (h, k, l) triples.
pub fn scattering_vectors_from_flat(values: &[f64]) -> Result<Vec<Vector3<f64>>> {
    if values.len() % 3 != 0 {
        return Err(DiffuseError::ShapeMismatch {
            what: "scattering vector buffer",
            expected: values.len() - values.len() % 3 + 3,
            actual: values.len(),
        });
    }
    Ok(values
        .chunks_exact(3)
        .map(|hkl| Vector3::new(hkl[0], hkl[1], hkl[2]))
        .collect())
}
