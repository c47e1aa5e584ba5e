// Domain layer: records, the projected list, and the ports the loader depends on.

pub mod model;
pub mod ports;
