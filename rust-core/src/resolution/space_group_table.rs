use serde::{Deserialize, Serialize};

use crate::config::{
    CUBIC_RANGE, HEXAGONAL_LOWER_BOUND, HEXAGONAL_UPPER_BOUND, MONOCLINIC_RANGE,
    ORTHORHOMBIC_TETRAGONAL_RANGE, TRIGONAL_LOWER_BOUND,
};

/// Closed-form d-spacing formula families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CrystalFamily {
    /// Orthorhombic, tetragonal and cubic: all cell angles 90°
    Orthogonal,
    /// Hexagonal axes: a = b, γ = 120°
    Hexagonal,
    /// Unique axis b, β ≠ 90°
    Monoclinic,
}

/// Inclusive range of space-group numbers handled by one formula family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceGroupRange {
    pub first: u16,
    pub last: u16,
    pub family: CrystalFamily,
}

impl SpaceGroupRange {
    pub fn new(first: u16, last: u16, family: CrystalFamily) -> Self {
        SpaceGroupRange {
            first,
            last,
            family,
        }
    }

    pub fn contains(&self, space_group: u16) -> bool {
        (self.first..=self.last).contains(&space_group)
    }
}

/// Ordered mapping from space-group number to formula family; the first
/// matching range wins.
///
/// The hexagonal lower bound is left configurable: whether trigonal groups
/// 143–167 (in hexagonal axes) should use the hexagonal formula is unsettled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceGroupTable {
    rules: Vec<SpaceGroupRange>,
}

impl Default for SpaceGroupTable {
    fn default() -> Self {
        SpaceGroupTable {
            rules: vec![
                SpaceGroupRange::new(
                    ORTHORHOMBIC_TETRAGONAL_RANGE.0,
                    ORTHORHOMBIC_TETRAGONAL_RANGE.1,
                    CrystalFamily::Orthogonal,
                ),
                SpaceGroupRange::new(CUBIC_RANGE.0, CUBIC_RANGE.1, CrystalFamily::Orthogonal),
                SpaceGroupRange::new(
                    HEXAGONAL_LOWER_BOUND,
                    HEXAGONAL_UPPER_BOUND,
                    CrystalFamily::Hexagonal,
                ),
                SpaceGroupRange::new(MONOCLINIC_RANGE.0, MONOCLINIC_RANGE.1, CrystalFamily::Monoclinic),
            ],
        }
    }
}

impl SpaceGroupTable {
    pub fn new(rules: Vec<SpaceGroupRange>) -> Self {
        SpaceGroupTable { rules }
    }

    pub fn rules(&self) -> &[SpaceGroupRange] {
        &self.rules
    }

    /// Move the lower bound of every hexagonal range.
    pub fn with_hexagonal_lower_bound(mut self, bound: u16) -> Self {
        for rule in self
            .rules
            .iter_mut()
            .filter(|rule| rule.family == CrystalFamily::Hexagonal)
        {
            rule.first = bound;
        }
        self
    }

    /// Extend the hexagonal formula to the trigonal groups (143 onwards).
    pub fn with_trigonal(self) -> Self {
        self.with_hexagonal_lower_bound(TRIGONAL_LOWER_BOUND)
    }

    pub fn classify(&self, space_group: u16) -> Option<CrystalFamily> {
        self.rules
            .iter()
            .find(|rule| rule.contains(space_group))
            .map(|rule| rule.family)
    }
}
