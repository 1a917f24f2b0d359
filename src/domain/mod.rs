// Domain layer: token model, ports, and the numeral services. No I/O here.

pub mod model;
pub mod ports;

pub mod services;
