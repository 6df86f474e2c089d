// common helpers 
pub mod report; 
pub mod errors; 
pub mod config;
pub mod tolerances; 
pub mod derivative; 

// algorithms 
pub mod newton;

pub use newton::{find_root, newton, NewtonError};
