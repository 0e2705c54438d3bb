use anyhow::{Result, bail};

use super::config::RunType;
use crate::{Point, Polygon};

/// Small (TS) tower side length [mm].
const TS_DET_SIZE_MM: f64 = 20.0;
/// Large (TL) tower side length [mm].
const TL_DET_SIZE_MM: f64 = 40.0;
/// Symmetric trim subtracted from each tower half-side [mm].
const DET_BOUND_CUT_MM: f64 = 0.0;
/// Distance between the TS and TL tower centers [mm].
const TS_TO_TL_DIST_MM: f64 = 47.4;

/// Transverse footprints of the two calorimeter towers at the detection
/// plane.
///
/// Bin 1 is the small tower, bin 2 the large one. Each footprint is the
/// tower square rotated by 45 degrees (diamond orientation), centered on
/// the beam-center offset of the selected run type. The bin list is
/// immutable for the whole run.
#[derive(Debug, Clone)]
pub struct TowerGeometry {
    bins: Vec<Polygon>,
}

impl TowerGeometry {
    /// Builds the tower footprints for an acceptance-cut run type.
    ///
    /// The ALL (no-cut) run type has no geometry; asking for one is an
    /// initialization error.
    pub fn build(run_type: RunType) -> Result<Self> {
        let beam_center = match run_type {
            RunType::Tl => -47.4,
            RunType::Ts => 0.0,
            RunType::Top => 21.6,
            RunType::All => bail!("tower geometry is not defined for the ALL run type"),
        };

        let bins = vec![
            diamond(TS_DET_SIZE_MM, beam_center)?,
            diamond(TL_DET_SIZE_MM, beam_center + TS_TO_TL_DIST_MM)?,
        ];
        Ok(Self { bins })
    }

    /// Returns the 1-based id of the bin containing the transverse point
    /// (x, y), or None when the point misses both towers.
    pub fn locate(&self, x: f64, y: f64) -> Option<u32> {
        self.bins
            .iter()
            .position(|bin| bin.contains(x, y))
            .map(|i| (i + 1) as u32)
    }

    pub fn bins(&self) -> &[Polygon] {
        &self.bins
    }
}

/// Tower footprint: a square of side `det_size` rotated by 45 degrees,
/// so the vertices sit at (+-d, 0) and (0, +-d) around the tower center,
/// with d the half-diagonal.
fn diamond(det_size: f64, center_y: f64) -> Result<Polygon> {
    let d = std::f64::consts::SQRT_2 * (det_size - DET_BOUND_CUT_MM * 2.0) / 2.0;
    Polygon::new(vec![
        Point::new(d, center_y, 0.0),
        Point::new(0.0, center_y + d, 0.0),
        Point::new(-d, center_y, 0.0),
        Point::new(0.0, center_y - d, 0.0),
    ])
}
