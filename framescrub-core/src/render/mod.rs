pub mod composite;
pub mod fit;
pub mod painter;
pub mod surface;
