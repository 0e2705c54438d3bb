use anyhow::Result;

use super::config::RunType;
use super::event::Event;
use super::geometry::TowerGeometry;
use super::projection::project_and_classify;
use super::vertex::VertexOffset;
use crate::Point;

/// Charged particles produced before this z position [mm] with forward
/// momentum are absorbed upstream (DX magnet) and never reach the
/// detector.
const UPSTREAM_ABSORPTION_Z_MM: f64 = 15000.0;

/// Event-level accept/reject decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub accepted: bool,
    /// Number of particles whose projected trajectory struck a tower bin.
    pub hits: u32,
}

/// Per-event acceptance filter.
///
/// For the acceptance-cut run types it owns the tower geometry and accepts
/// an event iff at least one particle survives all cuts and strikes a
/// tower. In ALL mode it holds no geometry at all and accepts everything.
pub struct AcceptanceFilter {
    geometry: Option<TowerGeometry>,
}

impl AcceptanceFilter {
    pub fn new(run_type: RunType) -> Result<Self> {
        let geometry = match run_type {
            RunType::All => None,
            cut => Some(TowerGeometry::build(cut)?),
        };
        Ok(Self { geometry })
    }

    /// Decides whether one event is kept.
    ///
    /// The hit counter starts at 0 for every event. Particles are visited
    /// in generation order:
    /// - leptons and neutrinos (11 < |pdg| < 19) never contribute,
    /// - charged particles produced before the upstream absorption window
    ///   with pz > 0 are skipped,
    /// - everything else is projected onto the detection plane with the
    ///   event's vertex offset applied.
    pub fn filter_event(&self, event: &Event, offset: VertexOffset) -> Decision {
        let Some(geometry) = &self.geometry else {
            // No-cut mode: no geometry queries at all.
            return Decision {
                accepted: true,
                hits: 0,
            };
        };

        let mut hits = 0;
        for particle in &event.particles {
            if is_lepton_band(particle.pdg_id) {
                continue;
            }

            let vz = particle.vertex.z + offset.dz;
            if !is_neutral(particle.pdg_id)
                && vz < UPSTREAM_ABSORPTION_Z_MM
                && particle.momentum.dz > 0.0
            {
                continue;
            }

            let vertex = Point::new(
                particle.vertex.x + offset.dx,
                particle.vertex.y + offset.dy,
                vz,
            );
            if project_and_classify(vertex, particle.momentum, particle.energy, geometry).is_some()
            {
                hits += 1;
            }
        }

        Decision {
            accepted: hits > 0,
            hits,
        }
    }
}

/// Leptons and neutrinos in the PDG band 12..=18; they neither contribute
/// to nor block acceptance.
fn is_lepton_band(pdg_id: i32) -> bool {
    let pdg = pdg_id.abs();
    11 < pdg && pdg < 19
}

/// Electrical neutrality of the common final-state species.
///
/// Species missing from the table are treated as charged; this default is
/// deliberate and must stay, the acceptance is defined by it.
pub fn is_neutral(pdg_id: i32) -> bool {
    match pdg_id.abs() {
        2212 => false, // p
        11 => false,   // e
        321 => false,  // charged K
        211 => false,  // charged pi
        2112 => true,  // n
        130 => true,   // K0_L
        22 => true,    // gamma
        _ => false,
    }
}
