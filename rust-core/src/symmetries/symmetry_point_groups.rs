use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DiffuseError;
use crate::symmetries::symmetry_operations::SymmetryOperatorSet;

/// The eleven Laue classes. Diffraction intensities carry the symmetry of the
/// crystal's point group plus inversion, so these are the symmetries a
/// diffuse map is folded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LaueClass {
    Triclinic,            // -1
    Monoclinic,           // 2/m, unique axis b
    Orthorhombic,         // mmm
    TetragonalLow,        // 4/m
    TetragonalHigh,       // 4/mmm
    TrigonalLow,          // -3
    TrigonalHigh,         // -3m (-3m1 setting)
    HexagonalLow,         // 6/m
    HexagonalHigh,        // 6/mmm
    CubicLow,             // m-3
    CubicHigh,            // m-3m
}

impl LaueClass {
    pub const ALL: [LaueClass; 11] = [
        LaueClass::Triclinic,
        LaueClass::Monoclinic,
        LaueClass::Orthorhombic,
        LaueClass::TetragonalLow,
        LaueClass::TetragonalHigh,
        LaueClass::TrigonalLow,
        LaueClass::TrigonalHigh,
        LaueClass::HexagonalLow,
        LaueClass::HexagonalHigh,
        LaueClass::CubicLow,
        LaueClass::CubicHigh,
    ];

    /// Hermann–Mauguin symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            LaueClass::Triclinic => "-1",
            LaueClass::Monoclinic => "2/m",
            LaueClass::Orthorhombic => "mmm",
            LaueClass::TetragonalLow => "4/m",
            LaueClass::TetragonalHigh => "4/mmm",
            LaueClass::TrigonalLow => "-3",
            LaueClass::TrigonalHigh => "-3m",
            LaueClass::HexagonalLow => "6/m",
            LaueClass::HexagonalHigh => "6/mmm",
            LaueClass::CubicLow => "m-3",
            LaueClass::CubicHigh => "m-3m",
        }
    }

    /// Number of operators including Friedel mates
    pub fn order(&self) -> usize {
        2 * proper_rotations(*self).len()
    }

    /// Whether the operators act in the hexagonal reciprocal basis
    pub fn uses_hexagonal_axes(&self) -> bool {
        matches!(
            self,
            LaueClass::TrigonalLow
                | LaueClass::TrigonalHigh
                | LaueClass::HexagonalLow
                | LaueClass::HexagonalHigh
        )
    }
}

impl fmt::Display for LaueClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for LaueClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LaueClass::ALL
            .iter()
            .copied()
            .find(|class| class.symbol() == s.trim())
            .ok_or_else(|| format!("Unknown Laue class '{}'", s))
    }
}

// Generators acting on (h, k, l) column vectors
fn two_fold_z() -> Matrix3<i32> {
    Matrix3::new(
        -1,  0, 0,
         0, -1, 0,
         0,  0, 1,
    )
}

fn two_fold_y() -> Matrix3<i32> {
    Matrix3::new(
        -1, 0,  0,
         0, 1,  0,
         0, 0, -1,
    )
}

fn two_fold_x() -> Matrix3<i32> {
    Matrix3::new(
        1,  0,  0,
        0, -1,  0,
        0,  0, -1,
    )
}

fn four_fold_z() -> Matrix3<i32> {
    Matrix3::new(
        0, -1, 0,
        1,  0, 0,
        0,  0, 1,
    )
}

// 3-fold along [111], cyclic permutation of h, k, l
fn three_fold_body_diagonal() -> Matrix3<i32> {
    Matrix3::new(
        0, 0, 1,
        1, 0, 0,
        0, 1, 0,
    )
}

// Hexagonal reciprocal basis: (h, k) -> (-h-k, h)
fn three_fold_hexagonal() -> Matrix3<i32> {
    Matrix3::new(
        -1, -1, 0,
         1,  0, 0,
         0,  0, 1,
    )
}

// Hexagonal reciprocal basis: (h, k) -> (-k, h+k)
fn six_fold_hexagonal() -> Matrix3<i32> {
    Matrix3::new(
        0, -1, 0,
        1,  1, 0,
        0,  0, 1,
    )
}

// Hexagonal reciprocal basis: (h, k, l) -> (k, h, -l)
fn two_fold_hexagonal_diagonal() -> Matrix3<i32> {
    Matrix3::new(
        0, 1,  0,
        1, 0,  0,
        0, 0, -1,
    )
}

fn generators(class: LaueClass) -> Vec<Matrix3<i32>> {
    match class {
        LaueClass::Triclinic => vec![],
        LaueClass::Monoclinic => vec![two_fold_y()],
        LaueClass::Orthorhombic => vec![two_fold_z(), two_fold_y()],
        LaueClass::TetragonalLow => vec![four_fold_z()],
        LaueClass::TetragonalHigh => vec![four_fold_z(), two_fold_x()],
        LaueClass::TrigonalLow => vec![three_fold_hexagonal()],
        LaueClass::TrigonalHigh => vec![three_fold_hexagonal(), two_fold_hexagonal_diagonal()],
        LaueClass::HexagonalLow => vec![six_fold_hexagonal()],
        LaueClass::HexagonalHigh => vec![six_fold_hexagonal(), two_fold_hexagonal_diagonal()],
        LaueClass::CubicLow => vec![two_fold_z(), three_fold_body_diagonal()],
        LaueClass::CubicHigh => vec![four_fold_z(), three_fold_body_diagonal()],
    }
}

/// Close a set of generators into the full rotation group, identity first.
///
/// Elements appear in breadth-first order of generator products, so the
/// result is deterministic for a given generator list.
fn close_group(generators: &[Matrix3<i32>]) -> Vec<Matrix3<i32>> {
    let mut elements = vec![Matrix3::<i32>::identity()];
    let mut frontier = 0;
    while frontier < elements.len() {
        let current = elements[frontier];
        for generator in generators {
            let product = generator * current;
            if !elements.contains(&product) {
                elements.push(product);
            }
        }
        frontier += 1;
    }
    elements
}

/// Proper rotations (determinant +1) of the Laue class.
pub fn proper_rotations(class: LaueClass) -> Vec<Matrix3<i32>> {
    close_group(&generators(class))
}

/// Full Laue-class operator set: proper rotations first, their Friedel mates
/// (-R) second, in the same order.
pub fn laue_group_operators(class: LaueClass) -> SymmetryOperatorSet {
    let rotations = proper_rotations(class)
        .into_iter()
        .map(|r| r.map(|x| x as f64))
        .collect();
    SymmetryOperatorSet::from_proper_unchecked(rotations)
}

/// Operators for building an index table over a Cartesian (h, k, l) grid.
///
/// Trigonal and hexagonal classes act in the hexagonal reciprocal basis, where
/// (h, k) -> (-h-k, h) leaves every square h-k grid, so they are rejected.
pub fn index_operators(class: LaueClass) -> crate::Result<SymmetryOperatorSet> {
    if class.uses_hexagonal_axes() {
        return Err(DiffuseError::HexagonalAxesUnsupported(class.symbol()));
    }
    Ok(laue_group_operators(class))
}
