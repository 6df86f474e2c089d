//! Stopping criteria for the Newton iteration.
//!
//! `StoppingCriterion` : which quantity is compared against `tol`  
//! - `FunctionValue` : `|f(x_next)| < tol` (default)  
//! - `StepSize`      : `|x_next - x| < tol`  
//!
//! Both comparisons are strict. A criterion that fires reports the
//! matching [`ToleranceSatisfied`] variant.

use super::report::ToleranceSatisfied;


/// Quantity tested against `tol` after every Newton step.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StoppingCriterion { 
    #[default]
    FunctionValue, 
    StepSize, 
}

impl StoppingCriterion { 
    /// Returns the satisfied tolerance if the step `x -> x_next` 
    /// (with `fx_next = f(x_next)`) meets this criterion, else `None`.
    pub(crate) fn check(
        self, 
        x       : f64, 
        x_next  : f64, 
        fx_next : f64, 
        tol     : f64
    ) -> Option<ToleranceSatisfied> { 
        match self { 
            StoppingCriterion::FunctionValue if fx_next.abs() < tol 
                => Some(ToleranceSatisfied::AbsFxReached), 
            StoppingCriterion::StepSize if (x_next - x).abs() < tol 
                => Some(ToleranceSatisfied::StepSizeReached), 
            _   => None, 
        }
    }
}
