// Domain layer: wire/domain models and ports (interfaces).

pub mod model;
pub mod ports;
