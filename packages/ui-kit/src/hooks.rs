//! Data hooks consumed by pages built from the components.

pub mod engines;
pub mod query_params;
