pub mod root_finding;
pub mod eoq;
