// Domain layer: manifest models and the ports the scanner depends on.

pub mod model;
pub mod ports;
