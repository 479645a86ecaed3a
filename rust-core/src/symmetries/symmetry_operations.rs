use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::config::FRIEDEL_TOLERANCE;
use crate::error::DiffuseError;
use crate::Result;

/// A single point-group operation acting on Miller indices (h, k, l).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymmetryOperation {
    /// Rotation or rotoinversion matrix
    pub rotation: Matrix3<f64>,
    /// Marks the inversion partner (-R) of a proper operator
    pub friedel: bool,
}

impl SymmetryOperation {
    /// Create a new symmetry operation
    pub fn new(rotation: Matrix3<f64>, friedel: bool) -> Self {
        Self { rotation, friedel }
    }

    /// Create identity operation
    pub fn identity() -> Self {
        Self::new(Matrix3::identity(), false)
    }

    /// Apply the operation to a scattering vector
    pub fn apply(&self, hkl: &Vector3<f64>) -> Vector3<f64> {
        self.rotation * hkl
    }

    /// The operation composed with inversion, with the Friedel flag flipped
    pub fn friedel_mate(&self) -> Self {
        Self::new(-self.rotation, !self.friedel)
    }

    pub fn determinant(&self) -> f64 {
        self.rotation.determinant()
    }

    /// Check if this is the identity operation
    pub fn is_identity(&self) -> bool {
        (self.rotation - Matrix3::identity()).amax() < FRIEDEL_TOLERANCE
    }
}

/// Ordered operator set, keyed by position `0..N`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymmetryOperatorSet {
    operations: Vec<SymmetryOperation>,
}

impl SymmetryOperatorSet {
    /// Operator set with explicit Friedel flags.
    ///
    /// Every flagged operator must be the inversion (-R) of some unflagged
    /// operator R in the same set.
    pub fn new(operations: Vec<SymmetryOperation>) -> Result<Self> {
        if operations.is_empty() {
            return Err(DiffuseError::NoOperators);
        }
        for (key, op) in operations.iter().enumerate().filter(|(_, op)| op.friedel) {
            let paired = operations
                .iter()
                .filter(|other| !other.friedel)
                .any(|other| (op.rotation + other.rotation).amax() <= FRIEDEL_TOLERANCE);
            if !paired {
                return Err(DiffuseError::UnpairedFriedelMate(key));
            }
        }
        Ok(Self { operations })
    }

    /// Operator set following the positional convention: operator `k + N/2` is
    /// the Friedel mate of operator `k`. The pairing is checked, not assumed.
    pub fn from_positional(rotations: Vec<Matrix3<f64>>) -> Result<Self> {
        let n = rotations.len();
        if n == 0 {
            return Err(DiffuseError::NoOperators);
        }
        if n % 2 != 0 {
            return Err(DiffuseError::UnpairedOperators(n));
        }

        let half = n / 2;
        for key in half..n {
            let partner = key - half;
            if (rotations[key] + rotations[partner]).amax() > FRIEDEL_TOLERANCE {
                return Err(DiffuseError::FriedelMismatch { key, partner });
            }
        }

        let operations = rotations
            .into_iter()
            .enumerate()
            .map(|(key, rotation)| SymmetryOperation::new(rotation, key >= half))
            .collect();
        Ok(Self { operations })
    }

    /// Operator set from the non-Friedel operators; their mates are appended in
    /// the same order.
    pub fn with_friedel_mates(rotations: Vec<Matrix3<f64>>) -> Result<Self> {
        if rotations.is_empty() {
            return Err(DiffuseError::NoOperators);
        }
        Ok(Self::from_proper_unchecked(rotations))
    }

    pub(crate) fn from_proper_unchecked(rotations: Vec<Matrix3<f64>>) -> Self {
        let proper: Vec<SymmetryOperation> = rotations
            .into_iter()
            .map(|rotation| SymmetryOperation::new(rotation, false))
            .collect();
        let mates: Vec<SymmetryOperation> = proper.iter().map(|op| op.friedel_mate()).collect();
        Self {
            operations: proper.into_iter().chain(mates).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn get(&self, key: usize) -> Option<&SymmetryOperation> {
        self.operations.get(key)
    }

    pub fn operations(&self) -> &[SymmetryOperation] {
        &self.operations
    }

    /// (key, operation) pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &SymmetryOperation)> {
        self.operations.iter().enumerate()
    }

    /// Keys of the operators that are not Friedel mates
    pub fn non_friedel_keys(&self) -> Vec<usize> {
        self.iter()
            .filter(|(_, op)| !op.friedel)
            .map(|(key, _)| key)
            .collect()
    }
}

/// Build a rotation from row-major nested arrays, as supplied by collaborators.
pub fn rotation_from_rows(rows: &[[f64; 3]; 3]) -> Matrix3<f64> {
    Matrix3::new(
        rows[0][0], rows[0][1], rows[0][2],
        rows[1][0], rows[1][1], rows[1][2],
        rows[2][0], rows[2][1], rows[2][2],
    )
}
