// Domain layer: models and ports. No runtime dependencies beyond serde.

pub mod model;
pub mod ports;
