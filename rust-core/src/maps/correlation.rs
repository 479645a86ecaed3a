use crate::error::DiffuseError;
use crate::Result;

/// Multiplicity-weighted Pearson correlation between two symmetrized maps.
///
/// Only voxels where both maps are strictly positive take part. Each voxel is
/// weighted by `1 / multiplicity`, renormalized over the selected voxels, so a
/// symmetry-unique reflection counts once no matter how many grid voxels it
/// occupies. Without multiplicities all voxels weigh the same.
///
/// # Errors
/// * `ShapeMismatch` if the maps or the multiplicities differ in length
/// * `InvalidMultiplicity` for a multiplicity of zero
/// * `InsufficientOverlap` if fewer than two voxels are positive in both maps
/// * `ZeroVariance` if either map is constant over the selected voxels
pub fn weighted_correlation(
    map1: &[f64],
    map2: &[f64],
    multiplicities: Option<&[usize]>,
) -> Result<f64> {
    if map2.len() != map1.len() {
        return Err(DiffuseError::ShapeMismatch {
            what: "second map",
            expected: map1.len(),
            actual: map2.len(),
        });
    }
    if let Some(mult) = multiplicities {
        if mult.len() != map1.len() {
            return Err(DiffuseError::ShapeMismatch {
                what: "multiplicity array",
                expected: map1.len(),
                actual: mult.len(),
            });
        }
        if let Some(voxel) = mult.iter().position(|&m| m == 0) {
            return Err(DiffuseError::InvalidMultiplicity { voxel, value: 0 });
        }
    }

    let mut x = Vec::new();
    let mut y = Vec::new();
    let mut weights = Vec::new();
    for (voxel, (&a, &b)) in map1.iter().zip(map2).enumerate() {
        if a > 0.0 && b > 0.0 {
            x.push(a);
            y.push(b);
            weights.push(multiplicities.map_or(1.0, |m| 1.0 / m[voxel] as f64));
        }
    }
    if x.len() < 2 {
        return Err(DiffuseError::InsufficientOverlap(x.len()));
    }

    let total: f64 = weights.iter().sum();
    weights.iter_mut().for_each(|w| *w /= total);

    let var_x = weighted_covariance(&x, &x, &weights);
    let var_y = weighted_covariance(&y, &y, &weights);
    if is_constant(&x) || var_x <= 0.0 {
        return Err(DiffuseError::ZeroVariance("first map"));
    }
    if is_constant(&y) || var_y <= 0.0 {
        return Err(DiffuseError::ZeroVariance("second map"));
    }

    Ok(weighted_covariance(&x, &y, &weights) / (var_x * var_y).sqrt())
}

// Rounding in the weighted mean leaves a tiny positive variance for constant maps
fn is_constant(values: &[f64]) -> bool {
    values.windows(2).all(|pair| pair[0] == pair[1])
}

/// Weighted mean; `weights` must sum to one.
fn weighted_mean(values: &[f64], weights: &[f64]) -> f64 {
    values.iter().zip(weights).map(|(v, w)| v * w).sum()
}

fn weighted_covariance(x: &[f64], y: &[f64], weights: &[f64]) -> f64 {
    let mean_x = weighted_mean(x, weights);
    let mean_y = weighted_mean(y, weights);
    x.iter()
        .zip(y)
        .zip(weights)
        .map(|((a, b), w)| w * (a - mean_x) * (b - mean_y))
        .sum()
}
