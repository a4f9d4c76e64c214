// Domain layer: catalog models, the builtin service data and ports (interfaces).

pub mod catalog_data;
pub mod model;
pub mod ports;
