//! Defines the [`NewtonReport`] struct returned by the Newton root finder. 


/// Which tolerance condition was satisfied.
/// - [`ToleranceSatisfied::AbsFxReached`]    
///     - |f(x_n)| < tol 
/// - [`ToleranceSatisfied::StepSizeReached`]
///     - |x_n - x_{n - 1}| < tol 
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ToleranceSatisfied { 
    AbsFxReached, 
    StepSizeReached, 
}


/// Where the derivative values came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DerivativeSource { 
    Analytic, 
    FiniteDifference, 
}


/// Final report of a converged Newton run.  
/// 
/// [`NewtonReport`]
/// - `iterates`            : `x0, x1, ..., root` in visiting order  
/// - `f_root`              : function value at the root  
/// - `evaluations`         : total evaluations (f and f')  
/// - `tolerance_satisfied` : which tolerance was met ([`ToleranceSatisfied`]) 
/// - `derivative`          : analytic or finite-difference ([`DerivativeSource`])  
///
/// `iterates` always holds at least two values: the guess and one step.
#[derive(Debug, Clone, PartialEq)] 
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NewtonReport {
    iterates            : Vec<f64>, 
    f_root              : f64, 
    evaluations         : usize, 
    tolerance_satisfied : ToleranceSatisfied, 
    derivative          : DerivativeSource, 
}

impl NewtonReport { 
    pub(crate) fn new(
        iterates            : Vec<f64>, 
        f_root              : f64, 
        evaluations         : usize, 
        tolerance_satisfied : ToleranceSatisfied, 
        derivative          : DerivativeSource, 
    ) -> Self { 
        debug_assert!(iterates.len() >= 2);
        Self { iterates, f_root, evaluations, tolerance_satisfied, derivative }
    }

    /// Best root estimate, the last iterate.
    pub fn root(&self) -> f64 { 
        self.iterates[self.iterates.len() - 1]
    }
    pub fn f_root(&self)      -> f64 { self.f_root }
    pub fn iterates(&self)    -> &[f64] { &self.iterates }
    /// Number of Newton steps taken.
    pub fn iterations(&self)  -> usize { self.iterates.len() - 1 }
    pub fn evaluations(&self) -> usize { self.evaluations }
    pub fn tolerance_satisfied(&self) -> ToleranceSatisfied { self.tolerance_satisfied }
    pub fn derivative(&self)  -> DerivativeSource { self.derivative }

    pub fn into_iterates(self) -> Vec<f64> { 
        self.iterates 
    }
}
