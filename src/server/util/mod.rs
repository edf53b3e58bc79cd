//! Small helpers shared by the service and controller layers.

pub mod normalize;
pub mod pagination;
