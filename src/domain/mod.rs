// Domain layer: models and ports. Nothing here talks to the outside world.

pub mod model;
pub mod ports;
