//! Derivative evaluation for the Newton step.  
//!
//! - analytic : user-supplied `df(x)`  
//! - fallback : central finite-difference of `f` with ULP rescue  
//!
//! Neither path inspects the returned value; a zero derivative is 
//! rejected by the caller before the step is formed.

use super::newton::NewtonError;
use super::report::DerivativeSource;


/// Derivative supplier for a Newton run. 
pub(crate) enum Derivative<G> { 
    Analytic(G), 
    FiniteDifference, 
}

impl<G> Derivative<G> where G: FnMut(f64) -> f64 { 
    pub(crate) fn from_option(df: Option<G>) -> Self { 
        match df { 
            Some(g) => Derivative::Analytic(g), 
            None    => Derivative::FiniteDifference, 
        }
    }

    pub(crate) fn source(&self) -> DerivativeSource { 
        match self { 
            Derivative::Analytic(_)      => DerivativeSource::Analytic, 
            Derivative::FiniteDifference => DerivativeSource::FiniteDifference, 
        }
    }

    /// Evaluates `f'(x)`, counting every call into `f` or `df`.
    pub(crate) fn eval<F>(
        &mut self, 
        f: &mut F, 
        x: f64, 
        evals: &mut usize
    ) -> Result<f64, NewtonError> where F: FnMut(f64) -> f64 { 
        match self { 
            Derivative::Analytic(df) => { 
                *evals += 1; 
                Ok(df(x)) 
            }
            Derivative::FiniteDifference => central_difference(f, x, evals), 
        }
    }
}


/// ULP helpers for finite-difference fallback near representability edges 
#[inline] 
fn next_up(x: f64) -> f64 { 
    if x.is_nan() || x == f64::INFINITY { return x; }
    // smallest positive subnormal 
    if x == 0.0 { return f64::from_bits(1); } 
    
    let bits = x.to_bits(); 
    let bumped = if x > 0.0 { bits + 1 } else { bits - 1 }; 
    f64::from_bits(bumped)
}
#[inline] 
fn next_down(x: f64) -> f64 { 
    if x.is_nan() || x == f64::NEG_INFINITY { return x; } 
    // largest negative subnormal 
    if x == 0.0 { return -f64::from_bits(1); } 

    let bits = x.to_bits(); 
    let bumped = if x > 0.0 { bits - 1 } else { bits + 1 };
    f64::from_bits(bumped)
}


/// `(f(x + h) - f(x - h)) / 2h` with `h = eps^{1/3} * max(|x|, 1)`.
fn central_difference<F>(
    f: &mut F, 
    x: f64, 
    evals: &mut usize
) -> Result<f64, NewtonError> where F: FnMut(f64) -> f64 { 
    let mut h  = f64::EPSILON.cbrt() * x.abs().max(1.0); 
    let mut xp = x + h; 
    let mut xm = x - h; 

    // try rescue if representability collapses 
    if !xp.is_finite() || !xm.is_finite() || xp == x || xm == x { 
        xp = next_up(x); 
        xm = next_down(x); 
        h  = 0.5 * (xp - xm); 

        if !xp.is_finite() || !xm.is_finite() || xp == x || xm == x { 
            return Err(NewtonError::FiniteDifferenceStepUnrepresentable { x, h });
        }
    }

    *evals += 2; 
    let fxp = f(xp); 
    let fxm = f(xm); 
    Ok((fxp - fxm) / (2.0 * h))
}
