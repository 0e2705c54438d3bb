use crate::{Point, Vector};

/// A single generated particle within one collision event.
///
/// Parent/child entries are 0-based indices into the owning event's
/// particle sequence (at most 2 of each); they are only meaningful within
/// that event.
#[derive(Debug, Clone)]
pub struct Particle {
    /// PDG species code.
    pub pdg_id: i32,
    /// Generator status code (final state vs intermediate).
    pub status: i32,
    /// Momentum (px, py, pz) [GeV/c].
    pub momentum: Vector,
    /// Total energy [GeV].
    pub energy: f64,
    /// Generated mass [GeV/c^2].
    pub mass: f64,
    /// Production vertex [mm], before per-event smearing.
    pub vertex: Point,
    /// Production time [mm/c].
    pub time: f64,
    pub parents: Vec<usize>,
    pub children: Vec<usize>,
}

/// One generated collision, constructed fresh per collision.
///
/// The event exclusively owns its particle sequence; particle order is the
/// generation order and index references are only valid inside this event.
#[derive(Debug, Clone)]
pub struct Event {
    /// Event sequence number.
    pub number: u64,
    /// Raw process-type classifier from the physics engine.
    pub process_type: i32,
    pub particles: Vec<Particle>,
}

impl Event {
    pub fn new(number: u64, process_type: i32) -> Self {
        Self {
            number,
            process_type,
            particles: Vec::new(),
        }
    }
}
