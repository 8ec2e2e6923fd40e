//! Error type shared by the point utilities and the curve models.
//!
//! Only programming errors are reported here (bad indices, inconsistent
//! array lengths, invalid configuration). Not finding a point within the
//! picking threshold is a normal outcome and is expressed as `None`/`false`.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CurveError {
    #[error("index {index} of the point is out of bounds (len {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("coordinate arrays differ in length: expected {expected}, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("sample step must be finite and strictly positive")]
    InvalidStep,

    #[error("a Bezier curve needs at least one sampling step")]
    InvalidSteps,

    #[error("invalid interpolation parameters: xmin must not exceed xmax and step must be positive")]
    InvalidParameters,
}
