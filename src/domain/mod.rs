// Domain layer: models, prompt and ports. No I/O here.

pub mod model;
pub mod ports;
pub mod prompt;
