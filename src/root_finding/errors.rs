//! Root-finding error types.  
//! 
//! ┌ [`RootFindingError`] : invalid global parameters (e.g. max_iter)  
//! │
//! └ [`ToleranceError`]   : invalid stopping tolerance  
//!
//! Both are wrapped by [`NewtonError`](super::newton::NewtonError) 
//! through `#[from]`, so config setters compose with `?`. 


use thiserror::Error; 


/// Root-finding configuration errors.  
/// 
/// └ Invalid global configuration (e.g. max_iter < 1)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RootFindingError {
    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },
}


/// Tolerance configuration errors.  
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ToleranceError { 
    #[error("invalid `tol`: must be finite and > 0. got {got}")]
    InvalidTol { got: f64 },
}
