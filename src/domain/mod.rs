// Domain layer: calculator value types and the ports the engine runs against.

pub mod model;
pub mod ports;
