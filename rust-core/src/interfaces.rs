// Definitions that are used throughout all modules

use serde::{Deserialize, Serialize};
use std::fmt;

// Reciprocal-space axis of the voxel grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    H,
    K,
    L,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::H, Axis::K, Axis::L];

    pub fn label(&self) -> &'static str {
        match self {
            Axis::H => "h",
            Axis::K => "k",
            Axis::L => "l",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// How a raw map is folded onto its symmetry mates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SymmetrizeMode {
    /// Unsymmetrized unit-cell map: average the non-zero equivalents
    UnitCell,
    /// Asymmetric-unit map: sum the non-Friedel equivalents
    AsymmetricUnit,
}

impl SymmetrizeMode {
    pub fn from_asu(from_asu: bool) -> Self {
        if from_asu {
            SymmetrizeMode::AsymmetricUnit
        } else {
            SymmetrizeMode::UnitCell
        }
    }
}
