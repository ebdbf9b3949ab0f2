//! Usage errors reported by the arm and the arm model

/// Error raised when a call violates a precondition of the kinematic chain or the
/// sphere model. All variants are caller defects: nothing is retried, clamped or
/// partially returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KinematicsError {
    /// Joint vector length does not match the degrees of freedom of the chain.
    DimensionMismatch { expected: usize, found: usize },

    /// Sphere index past the configured sphere count, or sphere attached to
    /// a link the chain does not have.
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },

    /// DH parameter array of a length inconsistent with the declared DOF count.
    ConstructionMismatch {
        parameter: &'static str,
        expected: usize,
        found: usize,
    },
}

impl std::fmt::Display for KinematicsError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            KinematicsError::DimensionMismatch { expected, found } =>
                write!(f, "Dimension Mismatch: expected {} joint values, found {}", expected, found),
            KinematicsError::IndexOutOfRange { what, index, len } =>
                write!(f, "Index Out Of Range: {} index {} is not below {}", what, index, len),
            KinematicsError::ConstructionMismatch { parameter, expected, found } =>
                write!(f, "Construction Mismatch: '{}' expected {}, found {}", parameter, expected, found),
        }
    }
}

impl std::error::Error for KinematicsError {}

/// Fails with `DimensionMismatch` unless `qs` has exactly `dof` values.
pub(crate) fn check_joints(qs: &[f64], dof: usize) -> Result<(), KinematicsError> {
    if qs.len() != dof {
        return Err(KinematicsError::DimensionMismatch { expected: dof, found: qs.len() });
    }
    Ok(())
}
