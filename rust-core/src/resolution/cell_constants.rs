use serde::{Deserialize, Serialize};

use crate::error::DiffuseError;
use crate::Result;

/// Unit-cell constants: edge lengths a, b, c and angles α, β, γ in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellConstants {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
}

impl CellConstants {
    pub fn new(a: f64, b: f64, c: f64, alpha: f64, beta: f64, gamma: f64) -> Result<Self> {
        let cell = CellConstants {
            a,
            b,
            c,
            alpha,
            beta,
            gamma,
        };
        cell.validate()?;
        Ok(cell)
    }

    /// Cell constants in the order (a, b, c, α, β, γ).
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        match values {
            &[a, b, c, alpha, beta, gamma] => Self::new(a, b, c, alpha, beta, gamma),
            _ => Err(DiffuseError::ShapeMismatch {
                what: "cell constants",
                expected: 6,
                actual: values.len(),
            }),
        }
    }

    /// Cubic cell with edge `a`
    pub fn cubic(a: f64) -> Result<Self> {
        Self::new(a, a, a, 90.0, 90.0, 90.0)
    }

    pub fn as_array(&self) -> [f64; 6] {
        [self.a, self.b, self.c, self.alpha, self.beta, self.gamma]
    }

    /// Lengths must be positive; angles must lie strictly between 0° and 180°.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("a", self.a), ("b", self.b), ("c", self.c)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(DiffuseError::InvalidCellConstant { name, value });
            }
        }
        for (name, value) in [("alpha", self.alpha), ("beta", self.beta), ("gamma", self.gamma)] {
            if !(value.is_finite() && value > 0.0 && value < 180.0) {
                return Err(DiffuseError::InvalidCellAngle { name, value });
            }
        }
        Ok(())
    }
}
