use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::config::SINGULAR_TOLERANCE;
use crate::error::DiffuseError;
use crate::grid::bins::Bins;
use crate::interfaces::Axis;
use crate::Result;

/// Central projections of the voxel grid, named by the axis they look down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Projection {
    /// Looking down h: columns follow l, rows follow k
    X,
    /// Looking down k: columns follow l, rows follow h
    Y,
    /// Looking down l: columns follow k, rows follow h
    Z,
}

/// Bin centers converted to momentum transfer |q| along each axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReciprocalAxes {
    pub q_h: Vec<f64>,
    pub q_k: Vec<f64>,
    pub q_l: Vec<f64>,
}

/// Meshgrid pair for one projection: `x[i][j] = columns[j]`, `y[i][j] = rows[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionMesh {
    pub x: Vec<Vec<f64>>,
    pub y: Vec<Vec<f64>>,
}

/// Scale the bins by the diagonal of the inverse orientation matrix, q = 2π A⁻¹ᵢᵢ s.
pub fn reciprocal_axes(a_matrix: &Matrix3<f64>, bins: &Bins) -> Result<ReciprocalAxes> {
    if a_matrix.determinant().abs() < SINGULAR_TOLERANCE {
        return Err(DiffuseError::SingularMatrix);
    }
    let a_inv = a_matrix.try_inverse().ok_or(DiffuseError::SingularMatrix)?;

    let scale = |axis: Axis, diag: usize| -> Vec<f64> {
        bins.axis(axis)
            .iter()
            .map(|s| 2.0 * PI * a_inv[(diag, diag)] * s)
            .collect()
    };

    Ok(ReciprocalAxes {
        q_h: scale(Axis::H, 0),
        q_k: scale(Axis::K, 1),
        q_l: scale(Axis::L, 2),
    })
}

/// Build the q-space meshgrid for one central projection.
pub fn projection_mesh(
    a_matrix: &Matrix3<f64>,
    bins: &Bins,
    projection: Projection,
) -> Result<ProjectionMesh> {
    let axes = reciprocal_axes(a_matrix, bins)?;
    let (columns, rows) = match projection {
        Projection::X => (&axes.q_l, &axes.q_k),
        Projection::Y => (&axes.q_l, &axes.q_h),
        Projection::Z => (&axes.q_k, &axes.q_h),
    };
    Ok(meshgrid(columns, rows))
}

fn meshgrid(columns: &[f64], rows: &[f64]) -> ProjectionMesh {
    let x = rows.iter().map(|_| columns.to_vec()).collect();
    let y = rows.iter().map(|&r| vec![r; columns.len()]).collect();
    ProjectionMesh { x, y }
}
