//! Annual cost model for a single item under constant demand.
//!
//! [`EoqModel`] — parameters
//! ├ `demand`       : units demanded per year (`D`)
//! ├ `order_cost`   : fixed cost per order placed (`S`)
//! ├ `holding_cost` : cost of holding one unit for a year (`H`)
//! └ `unit_cost`    : purchase price per unit (`c`, default 0)
//!
//! `TC(Q) = D c + D S / Q + H Q / 2`

use tracing::{debug, warn};

use super::errors::EoqError;
use super::report::EoqSolution;
use crate::root_finding::config::NewtonCfg;
use crate::root_finding::newton::newton;


#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EoqModel {
    demand       : f64,
    order_cost   : f64,
    holding_cost : f64,
    unit_cost    : f64,
}

fn positive(name: &'static str, v: f64) -> Result<f64, EoqError> {
    if !v.is_finite() || v <= 0.0 {
        return Err(EoqError::InvalidParameter { name, got: v });
    }
    Ok(v)
}

impl EoqModel {
    pub fn new(demand: f64, order_cost: f64, holding_cost: f64) -> Result<Self, EoqError> {
        Ok(Self {
            demand       : positive("demand", demand)?,
            order_cost   : positive("order_cost", order_cost)?,
            holding_cost : positive("holding_cost", holding_cost)?,
            unit_cost    : 0.0,
        })
    }

    pub fn with_unit_cost(mut self, v: f64) -> Result<Self, EoqError> {
        if !v.is_finite() || v < 0.0 {
            return Err(EoqError::InvalidParameter { name: "unit_cost", got: v });
        }
        self.unit_cost = v;
        Ok(self)
    }

    // getters
    pub fn demand(&self)       -> f64 { self.demand }
    pub fn order_cost(&self)   -> f64 { self.order_cost }
    pub fn holding_cost(&self) -> f64 { self.holding_cost }
    pub fn unit_cost(&self)    -> f64 { self.unit_cost }

    /// Re-checks the invariants, for models that bypassed [`EoqModel::new`]
    /// (e.g. deserialized ones).
    pub fn validate(&self) -> Result<(), EoqError> {
        positive("demand", self.demand)?;
        positive("order_cost", self.order_cost)?;
        positive("holding_cost", self.holding_cost)?;
        self.with_unit_cost(self.unit_cost)?;
        Ok(())
    }

    /// Annual cost of ordering in lots of `q`.
    pub fn total_cost(&self, q: f64) -> f64 {
        self.demand * self.unit_cost
            + self.demand * self.order_cost / q
            + self.holding_cost * q / 2.0
    }

    /// `dTC/dQ`; zero at the optimal lot size.
    pub fn marginal_cost(&self, q: f64) -> f64 {
        -self.demand * self.order_cost / (q * q) + self.holding_cost / 2.0
    }

    /// `d²TC/dQ²`
    pub fn marginal_cost_slope(&self, q: f64) -> f64 {
        2.0 * self.demand * self.order_cost / (q * q * q)
    }

    /// Wilson lot-size formula.
    pub fn closed_form_quantity(&self) -> f64 {
        (2.0 * self.demand * self.order_cost / self.holding_cost).sqrt()
    }

    /// Finds the cost-minimizing lot size by driving the marginal cost to zero
    /// with Newton's method from `q0`.
    ///
    /// The Newton map for this model sends guesses above `sqrt(3) Q*` to
    /// negative lot sizes, which is reported as
    /// [`EoqError::NonPositiveQuantity`].
    ///
    /// # Errors
    /// - [`EoqError::InvalidParameter`]    : model fails [`EoqModel::validate`]
    /// - [`EoqError::InvalidGuess`]        : `q0` not finite or `<= 0`
    /// - [`EoqError::NonPositiveQuantity`] : iteration settled on `Q <= 0`
    /// - [`EoqError::RootFinding`]         : any [`NewtonError`](crate::root_finding::NewtonError)
    pub fn optimal_order_quantity(&self, q0: f64, cfg: NewtonCfg) -> Result<EoqSolution, EoqError> {
        self.validate()?;
        if !q0.is_finite() || q0 <= 0.0 {
            return Err(EoqError::InvalidGuess { q0 });
        }

        debug!(
            demand = self.demand,
            order_cost = self.order_cost,
            holding_cost = self.holding_cost,
            q0,
            tol = cfg.tol(),
            max_iter = cfg.max_iter(),
            "solving for economic order quantity"
        );

        let report = newton(
            |q: f64| self.marginal_cost(q),
            Some(|q: f64| self.marginal_cost_slope(q)),
            q0,
            cfg,
        )
        .map_err(|err| {
            warn!(%err, q0, "economic order quantity solve failed");
            err
        })?;

        let q = report.root();
        if q <= 0.0 {
            warn!(q, q0, "newton settled on a non-positive order quantity");
            return Err(EoqError::NonPositiveQuantity { q });
        }

        debug!(q, iterations = report.iterations(), "economic order quantity converged");

        Ok(EoqSolution {
            order_quantity       : q,
            total_cost           : self.total_cost(q),
            orders_per_year      : self.demand / q,
            cycle_time           : q / self.demand,
            closed_form_quantity : self.closed_form_quantity(),
            report,
        })
    }
}
