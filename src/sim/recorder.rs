use serde::{Deserialize, Serialize};

use super::event::Event;
use super::vertex::VertexOffset;

/// One persisted particle.
///
/// Parent/child indices use the external 1-based convention: 0 means "no
/// parent/child", any other value is the generator-level (0-based) index
/// plus one. Downstream readers must subtract 1 to recover the original
/// indices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedParticle {
    pub pdg_id: i32,
    pub status: i32,
    pub px: f64,
    pub py: f64,
    pub pz: f64,
    pub energy: f64,
    pub mass: f64,
    /// Production vertex [mm] with the event's vertex offset applied.
    pub vx: f64,
    pub vy: f64,
    pub vz: f64,
    pub time: f64,
    pub parents: [u32; 2],
    pub children: [u32; 2],
}

/// One persisted event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedEvent {
    pub number: u64,
    /// Signal process id (91..98), or -1 when the generator's process
    /// type was not recognised.
    pub process_id: i32,
    pub particles: Vec<RecordedParticle>,
}

/// Converts accepted events into persisted records and keeps the
/// cumulative passed-event tally.
///
/// Recording is a pure, order-preserving transform: the vertex offset is
/// added to every particle's production vertex, all other fields are kept
/// verbatim, and parent/child references are renumbered to the external
/// 1-based convention.
#[derive(Debug, Default)]
pub struct EventRecorder {
    passed: u64,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events recorded so far.
    pub fn passed(&self) -> u64 {
        self.passed
    }

    pub fn record(&mut self, event: &Event, offset: VertexOffset) -> RecordedEvent {
        let particles = event
            .particles
            .iter()
            .map(|p| RecordedParticle {
                pdg_id: p.pdg_id,
                status: p.status,
                px: p.momentum.dx,
                py: p.momentum.dy,
                pz: p.momentum.dz,
                energy: p.energy,
                mass: p.mass,
                vx: p.vertex.x + offset.dx,
                vy: p.vertex.y + offset.dy,
                vz: p.vertex.z + offset.dz,
                time: p.time,
                parents: shift_indices(&p.parents),
                children: shift_indices(&p.children),
            })
            .collect();

        self.passed += 1;
        RecordedEvent {
            number: event.number,
            process_id: process_id_for(event.process_type),
            particles,
        }
    }
}

/// 0-based internal indices -> 1-based external slots, 0 = unset.
fn shift_indices(indices: &[usize]) -> [u32; 2] {
    let mut out = [0u32; 2];
    for (slot, &idx) in out.iter_mut().zip(indices.iter()) {
        *slot = idx as u32 + 1;
    }
    out
}

/// Maps the generator's process-type classifier to the signal process id
/// used in the output (negative classifiers mark the same process with a
/// mini plasma core, except -4).
///
/// An unrecognised classifier is not fatal: a diagnostic is emitted and
/// the event is recorded with the sentinel id -1.
pub fn process_id_for(process_type: i32) -> i32 {
    match process_type {
        0 => 91,                         // elastic
        1 => 95,                         // ND
        -1 => 96,                        // ND with core
        2 | -2 => 94,                    // DD
        3 | -3 => 97,                    // CD
        4 => 92,                         // SD (projectile excitation)
        -4 => 93,                        // SD (target excitation)
        10 | 11 | 12 | 13 | 14 => 98,    // pion exchange
        -11 | -12 | -13 | -14 => 98,     // pion exchange with core
        other => {
            eprintln!("process type {other} not recognised, recording process id -1");
            -1
        }
    }
}
