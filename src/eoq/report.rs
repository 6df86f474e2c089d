//! Defines the [`EoqSolution`] struct returned by
//! [`EoqModel::optimal_order_quantity`](super::EoqModel::optimal_order_quantity).

use crate::root_finding::report::NewtonReport;

/// Optimal ordering policy for an [`EoqModel`](super::EoqModel).
///
/// [`EoqSolution`]
/// - `order_quantity`       : lot size `Q*` found by Newton's method  
/// - `total_cost`           : annual cost at `Q*`  
/// - `orders_per_year`      : `D / Q*`  
/// - `cycle_time`           : years between orders, `Q* / D`  
/// - `closed_form_quantity` : `sqrt(2 D S / H)`, for cross-checking  
/// - `report`               : the underlying Newton run  
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EoqSolution {
    pub order_quantity       : f64,
    pub total_cost           : f64,
    pub orders_per_year      : f64,
    pub cycle_time           : f64,
    pub closed_form_quantity : f64,
    pub report               : NewtonReport,
}

impl EoqSolution {
    /// Relative gap between the Newton and closed-form lot sizes.
    pub fn relative_error(&self) -> f64 {
        ((self.order_quantity - self.closed_form_quantity) / self.closed_form_quantity).abs()
    }
}
