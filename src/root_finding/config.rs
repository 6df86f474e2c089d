//! Configuration for the Newton root finder.  
//! 
//! [`NewtonCfg`] — fields  
//! ├ `tol`       : stopping threshold, strict (`< tol`)  
//! ├ `max_iter`  : hard cap on Newton steps  
//! └ `criterion` : quantity compared against `tol` ([`StoppingCriterion`])  
//!
//! [`NewtonCfg::new`] initializes configuration with default values. 
//! Setters validate eagerly, so an invalid config never reaches the loop.


use super::errors::{RootFindingError, ToleranceError}; 
use super::tolerances::StoppingCriterion; 


pub const DEFAULT_TOL      : f64   = 1e-6;
pub const DEFAULT_MAX_ITER : usize = 20;


/// Newton configuration.
///
/// # Construction
/// - Use [`NewtonCfg::new`] then optional setters.
///
/// # Defaults
/// - `tol`       : [`DEFAULT_TOL`]
/// - `max_iter`  : [`DEFAULT_MAX_ITER`]
/// - `criterion` : [`StoppingCriterion::FunctionValue`]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NewtonCfg {
    tol       : f64,
    max_iter  : usize,
    criterion : StoppingCriterion,
}

impl Default for NewtonCfg { 
    fn default() -> Self { 
        Self::new()
    }
}

impl NewtonCfg {
    #[must_use]
    pub fn new() -> Self { 
        Self { 
            tol       : DEFAULT_TOL, 
            max_iter  : DEFAULT_MAX_ITER, 
            criterion : StoppingCriterion::FunctionValue, 
        }
    }

    // getters  
    pub fn tol(&self)       -> f64 { self.tol }
    pub fn max_iter(&self)  -> usize { self.max_iter }
    pub fn criterion(&self) -> StoppingCriterion { self.criterion }

    // setters 
    pub fn set_tol(mut self, v: f64) -> Result<Self, ToleranceError> { 
        if !v.is_finite() || v <= 0.0 { 
            return Err(ToleranceError::InvalidTol { got: v });
        }
        self.tol = v; 
        Ok(self) 
    }
    pub fn set_max_iter(mut self, v: usize) -> Result<Self, RootFindingError> { 
        if v == 0 { 
            return Err(RootFindingError::InvalidMaxIter { got: v });
        }
        self.max_iter = v; 
        Ok(self) 
    }
    #[must_use]
    pub fn set_criterion(mut self, v: StoppingCriterion) -> Self { 
        self.criterion = v; 
        self 
    }
}
