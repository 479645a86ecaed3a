// Constants

// Resolution
pub const RESOLUTION_FLOOR: f64 = 1e-5; // Replaces 1/d == 0 (the origin) before inversion

// Space-group ranges (inclusive) for the closed-form d-spacing formulas
pub const ORTHORHOMBIC_TETRAGONAL_RANGE: (u16, u16) = (16, 142);
pub const CUBIC_RANGE: (u16, u16) = (195, 230);
pub const HEXAGONAL_UPPER_BOUND: u16 = 194;
pub const HEXAGONAL_LOWER_BOUND: u16 = 168; // Default; trigonal groups start at 143
pub const TRIGONAL_LOWER_BOUND: u16 = 143;
pub const MONOCLINIC_RANGE: (u16, u16) = (3, 15);

// Tolerances
pub const FRIEDEL_TOLERANCE: f64 = 1e-8; // For checking R' == -R between Friedel mates
pub const SINGULAR_TOLERANCE: f64 = 1e-12; // For orientation matrix inversion
