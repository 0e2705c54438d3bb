pub mod point;
pub mod polygon;
pub mod vector;

/// Geometric precision
const EPS: f64 = 1e-13;
