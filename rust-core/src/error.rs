use crate::interfaces::Axis;

/// Errors raised by the diffuse-map core.
///
/// Every variant is a local computation error: bad input shape, an unsupported
/// parameter value or degenerate statistics. None of them are retryable.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DiffuseError {
    #[error("{what}: expected {expected} values, got {actual}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("bin axis '{0}' has no bin centers")]
    EmptyAxis(Axis),

    #[error("bin axis '{axis}' contains a non-finite bin center at position {position}")]
    NonFiniteBin { axis: Axis, position: usize },

    #[error("subsampling must be positive and finite, got {0}")]
    InvalidSubsampling(f64),

    #[error("{max_index} bins at subsampling {subsampling} exceed the addressable grid size")]
    GridTooLarge { max_index: u32, subsampling: u32 },

    #[error("no symmetry operators were supplied")]
    NoOperators,

    #[error("cannot split {0} operators into Friedel pairs")]
    UnpairedOperators(usize),

    #[error("operator {key} is marked as the Friedel mate of operator {partner} but is not its inversion")]
    FriedelMismatch { key: usize, partner: usize },

    #[error("operator {0} is flagged as a Friedel mate, but no unflagged operator is its inversion")]
    UnpairedFriedelMate(usize),

    #[error("Laue class {0} acts in hexagonal axes; its orbits leave the cubic index space of a Cartesian grid")]
    HexagonalAxesUnsupported(&'static str),

    #[error("operator {key} maps voxel {voxel} to {coordinate:?}, outside the index cube of side {extent}")]
    OutsideIndexSpace {
        key: usize,
        voxel: usize,
        coordinate: [i64; 3],
        extent: usize,
    },

    #[error("index table entry {key} points at voxel {index}, but the grid holds {grid_size} voxels")]
    IndexOutOfRange {
        key: usize,
        index: usize,
        grid_size: usize,
    },

    #[error("multiplicity at voxel {voxel} must be at least 1, got {value}")]
    InvalidMultiplicity { voxel: usize, value: usize },

    #[error("correlation needs at least 2 voxels that are positive in both maps, found {0}")]
    InsufficientOverlap(usize),

    #[error("weighted variance of {0} vanishes over the shared voxels")]
    ZeroVariance(&'static str),

    #[error("space group {0} is not covered by any resolution rule")]
    UnsupportedSpaceGroup(u16),

    #[error("cell length {name} must be positive and finite, got {value}")]
    InvalidCellConstant { name: &'static str, value: f64 },

    #[error("cell angle {name} must lie strictly between 0 and 180 degrees, got {value}")]
    InvalidCellAngle { name: &'static str, value: f64 },

    #[error("orientation matrix is singular")]
    SingularMatrix,

    #[error("malformed index table: {0}")]
    MalformedTable(String),
}
