// Domain layer: content entities and the ports the engine talks through.

pub mod model;
pub mod ports;
