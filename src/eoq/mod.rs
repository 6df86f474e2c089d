//! Economic Order Quantity (EOQ) inventory model.
//!
//! The optimal lot size zeroes the marginal annual cost, so it is found
//! with the Newton root finder and cross-checked against the closed form
//! `sqrt(2 D S / H)`.

pub mod errors; 
pub mod model; 
pub mod report; 

pub use errors::EoqError;
pub use model::EoqModel;
pub use report::EoqSolution;
