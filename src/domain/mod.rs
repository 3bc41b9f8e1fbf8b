// Domain layer: models and ports. No dependencies beyond std and chrono.

pub mod model;
pub mod ports;
