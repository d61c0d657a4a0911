//! Core processing building blocks: icon parameters, the RGBA resize helper,
//! and the adaptive/monochrome transforms. These are internal primitives
//! consumed by the high-level `api` module.
pub mod params;
pub mod processing;
