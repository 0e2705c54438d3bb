//! Event acceptance simulation for the forward calorimeter.
//!
//! The physics generator is an external collaborator behind the
//! [`EventSource`](simulation::EventSource) seam; this module owns vertex
//! smearing, tower geometry, per-particle acceptance cuts, the event-level
//! accept/reject decision and the conversion to persisted records.

pub mod config;
pub mod event;
pub mod filter;
pub mod geometry;
pub mod projection;
pub mod recorder;
pub mod simulation;
pub mod vertex;

pub use config::{Model, RunConfig, RunType};
pub use event::{Event, Particle};
pub use filter::AcceptanceFilter;
pub use geometry::TowerGeometry;
pub use recorder::{EventRecorder, RecordedEvent, RecordedParticle};
pub use simulation::{EventSource, Generated, GeneratorStats, RunHeader, RunSummary, Simulation};
pub use vertex::{VertexFluctuation, VertexOffset};
