pub mod geom;
pub mod io;
pub mod sim;

// Prelude
pub use geom::point::Point;
pub use geom::polygon::Polygon;
pub use geom::vector::Vector;
pub use sim::config::{Model, RunConfig, RunType};
pub use sim::event::{Event, Particle};
pub use sim::filter::AcceptanceFilter;
pub use sim::geometry::TowerGeometry;
pub use sim::recorder::{EventRecorder, RecordedEvent};
pub use sim::simulation::{EventSource, Generated, GeneratorStats, RunSummary, Simulation};
pub use sim::vertex::{VertexFluctuation, VertexOffset};
