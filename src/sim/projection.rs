use super::geometry::TowerGeometry;
use crate::{Point, Vector};

/// Longitudinal position of the detection plane [mm].
pub const DETECTOR_PLANE_Z_MM: f64 = 17800.0;
/// Particles at or below this energy are never counted as hits [GeV].
pub const ENERGY_CUT_GEV: f64 = 1.0;

/// Projects a particle's straight-line trajectory onto the detection plane
/// and classifies the transverse impact point against the tower geometry.
///
/// Returns the 1-based id of the struck tower bin, or None when any cut
/// fails. Cuts are evaluated in order and short-circuit:
/// 1. energy gate: the energy must exceed [`ENERGY_CUT_GEV`] (exactly
///    1 GeV does not pass),
/// 2. direction: the unit momentum must point toward the plane (pz = 0 or
///    a degenerate zero momentum does not pass),
/// 3. the production vertex must not lie past the plane.
///
/// The transverse extrapolation uses the raw momentum component ratios,
/// which is safe once the direction cut guarantees pz > 0.
pub fn project_and_classify(
    vertex: Point,
    momentum: Vector,
    energy: f64,
    geometry: &TowerGeometry,
) -> Option<u32> {
    if energy <= ENERGY_CUT_GEV {
        return None;
    }

    let unit = momentum.normalize()?;
    if unit.dz <= 0.0 {
        return None;
    }

    let dz = DETECTOR_PLANE_Z_MM - vertex.z;
    if dz < 0.0 {
        return None;
    }

    let x = vertex.x + dz * (momentum.dx / momentum.dz);
    let y = vertex.y + dz * (momentum.dy / momentum.dz);
    geometry.locate(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::config::RunType;

    fn ts_geometry() -> TowerGeometry {
        TowerGeometry::build(RunType::Ts).unwrap()
    }

    #[test]
    fn test_forward_photon_hits_small_tower() {
        let geo = ts_geometry();
        let hit = project_and_classify(
            Point::new(0.0, 0.0, 0.0),
            Vector::new(0.0, 0.0, 5.0),
            5.0,
            &geo,
        );
        assert_eq!(hit, Some(1));
    }

    #[test]
    fn test_projection_toward_large_tower() {
        let geo = ts_geometry();
        // Aim at the large tower center, 47.4 mm above the beam axis.
        let slope = 47.4 / DETECTOR_PLANE_Z_MM;
        let hit = project_and_classify(
            Point::new(0.0, 0.0, 0.0),
            Vector::new(0.0, slope * 5.0, 5.0),
            5.0,
            &geo,
        );
        assert_eq!(hit, Some(2));
    }

    #[test]
    fn test_energy_gate_boundary() {
        let geo = ts_geometry();
        let vertex = Point::new(0.0, 0.0, 0.0);
        let momentum = Vector::new(0.0, 0.0, 5.0);
        assert_eq!(project_and_classify(vertex, momentum, 1.0, &geo), None);
        assert_eq!(
            project_and_classify(vertex, momentum, 1.000001, &geo),
            Some(1)
        );
    }

    #[test]
    fn test_backward_particle_rejected() {
        let geo = ts_geometry();
        let hit = project_and_classify(
            Point::new(0.0, 0.0, 0.0),
            Vector::new(0.0, 0.0, -5.0),
            5.0,
            &geo,
        );
        assert_eq!(hit, None);
    }

    #[test]
    fn test_pz_zero_fails_direction_cut() {
        let geo = ts_geometry();
        let hit = project_and_classify(
            Point::new(0.0, 0.0, 0.0),
            Vector::new(5.0, 0.0, 0.0),
            5.0,
            &geo,
        );
        assert_eq!(hit, None);
    }

    #[test]
    fn test_zero_momentum_rejected_without_panicking() {
        let geo = ts_geometry();
        let hit = project_and_classify(
            Point::new(0.0, 0.0, 0.0),
            Vector::new(0.0, 0.0, 0.0),
            5.0,
            &geo,
        );
        assert_eq!(hit, None);
    }

    #[test]
    fn test_vertex_past_plane_rejected() {
        let geo = ts_geometry();
        let hit = project_and_classify(
            Point::new(0.0, 0.0, DETECTOR_PLANE_Z_MM + 1.0),
            Vector::new(0.0, 0.0, 5.0),
            5.0,
            &geo,
        );
        assert_eq!(hit, None);
    }

    #[test]
    fn test_transverse_miss() {
        let geo = ts_geometry();
        let hit = project_and_classify(
            Point::new(0.0, 0.0, 0.0),
            Vector::new(5.0, 0.0, 5.0),
            10.0,
            &geo,
        );
        assert_eq!(hit, None);
    }
}
