// Domain layer: descriptor model, filter policy and the ports the pipeline talks through.

pub mod model;
pub mod ports;
