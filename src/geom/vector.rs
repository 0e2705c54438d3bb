use crate::geom::EPS;
use std::fmt;

/// A displacement or a momentum three-vector.
///
/// Positions use millimeters, momenta GeV/c; the geometry code only ever
/// relies on component ratios so the unit is up to the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector {
    pub dx: f64,
    pub dy: f64,
    pub dz: f64,
}

impl Vector {
    pub fn new(dx: f64, dy: f64, dz: f64) -> Self {
        Self { dx, dy, dz }
    }

    /// Returns the length of the vector.
    pub fn length(&self) -> f64 {
        (self.dx.powi(2) + self.dy.powi(2) + self.dz.powi(2)).sqrt()
    }

    pub fn is_close(&self, other: &Self) -> bool {
        (self.dx - other.dx).abs() < EPS
            && (self.dy - other.dy).abs() < EPS
            && (self.dz - other.dz).abs() < EPS
    }

    /// Normalizes the vector (divides by its length) and returns a copy.
    ///
    /// Returns None for a (near) zero-length vector, so degenerate momenta
    /// never lead to a division by zero.
    pub fn normalize(&self) -> Option<Self> {
        let len = self.length();
        if len < EPS {
            None
        } else {
            Some(Self {
                dx: self.dx / len,
                dy: self.dy / len,
                dz: self.dz / len,
            })
        }
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prec = f.precision().unwrap_or(2); // Default 2 decimals
        write!(
            f,
            "Vector({:.prec$}, {:.prec$}, {:.prec$})",
            self.dx,
            self.dy,
            self.dz,
            prec = prec
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length() {
        let v = Vector::new(3., 4., 0.);
        assert!((v.length() - 5.).abs() < EPS);
    }

    #[test]
    fn test_normalize() {
        let v = Vector::new(0., 0., 7.);
        let unit = v.normalize().unwrap();
        assert!(unit.is_close(&Vector::new(0., 0., 1.)));
    }

    #[test]
    fn test_normalize_zero_vector() {
        let v = Vector::new(0., 0., 0.);
        assert!(v.normalize().is_none());
    }
}
