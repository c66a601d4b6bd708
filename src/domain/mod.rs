// Domain layer: catalog/cart models and the ports the view-model talks through.

pub mod model;
pub mod ports;
