use thiserror::Error;

use crate::root_finding::NewtonError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EoqError {
    #[error("invalid `{name}`: got {got}")]
    InvalidParameter { name: &'static str, got: f64 },

    #[error("invalid initial order quantity q0={q0}; must be finite and > 0")]
    InvalidGuess { q0: f64 },

    #[error("newton converged to non-positive order quantity q={q}; try a smaller q0")]
    NonPositiveQuantity { q: f64 },

    #[error(transparent)]
    RootFinding(#[from] NewtonError),
}
