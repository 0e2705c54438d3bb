use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::config::RunConfig;
use super::event::Event;
use super::filter::AcceptanceFilter;
use super::recorder::{EventRecorder, RecordedEvent};
use super::vertex::VertexFluctuation;

/// Generator summary statistics, forwarded to the output unmodified.
///
/// Cross sections are in mb. The core never interprets these values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratorStats {
    pub sigma_pair_tot: f64,
    pub sigma_pair_inel: f64,
    pub sigma_pair_el: f64,
    pub sigma_tot: f64,
    pub sigma_inel: f64,
    pub sigma_el: f64,
}

/// Two-field run header, written once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunHeader {
    pub run_type: i32,
    pub model: i32,
}

/// What the generator produced for one collision request.
#[derive(Debug)]
pub enum Generated {
    Collision(Event),
    /// The generator ran dry; the run ends normally.
    Finished,
}

/// Seam to the external physics generator.
///
/// One call per collision. An `Err` means the generator could not deliver
/// an event; its internal state is not resumable from this layer, so the
/// error is fatal for the run (no retry).
pub trait EventSource {
    fn next_collision(&mut self) -> Result<Generated>;

    /// Pass-through summary statistics, read once at the end of the run.
    fn stats(&self) -> GeneratorStats;
}

/// Sink for the run header and accepted events.
///
/// Opened once at initialization, finalized once at the end; a mid-run
/// write failure is fatal.
pub trait RecordSink {
    fn write_header(&mut self, header: &RunHeader) -> Result<()>;
    fn write_event(&mut self, event: &RecordedEvent) -> Result<()>;
    fn finish(&mut self, stats: &GeneratorStats) -> Result<()>;
}

/// Counters for a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Collisions consumed from the generator.
    pub collisions: u64,
    /// Events accepted and recorded.
    pub passed: u64,
}

/// The single-threaded, one-collision-at-a-time processing loop.
///
/// Per collision: draw the vertex offset, run the acceptance filter, and
/// record the event if it is kept. The loop stops once the configured
/// number of accepted events has been recorded or the generator is
/// exhausted.
pub struct Simulation {
    config: RunConfig,
    filter: AcceptanceFilter,
    fluctuation: VertexFluctuation,
    recorder: EventRecorder,
}

impl Simulation {
    pub fn new(config: RunConfig) -> Result<Self> {
        let filter = AcceptanceFilter::new(config.run_type)?;
        let fluctuation = VertexFluctuation::new(config.run_type, config.seed)?;
        Ok(Self {
            config,
            filter,
            fluctuation,
            recorder: EventRecorder::new(),
        })
    }

    pub fn run<S, K>(mut self, source: &mut S, sink: &mut K) -> Result<RunSummary>
    where
        S: EventSource,
        K: RecordSink,
    {
        sink.write_header(&RunHeader {
            run_type: self.config.run_type.index(),
            model: self.config.model.index(),
        })?;

        let mut collisions: u64 = 0;
        loop {
            let event = match source.next_collision()? {
                Generated::Collision(event) => event,
                Generated::Finished => break,
            };
            collisions += 1;
            if collisions % 1000 == 0 {
                println!(
                    "collision {collisions}, {} events passed",
                    self.recorder.passed()
                );
            }

            // Exactly one offset per event, also for rejected ones, so the
            // offset sequence only depends on the seed.
            let offset = self.fluctuation.sample();
            let decision = self.filter.filter_event(&event, offset);
            if decision.accepted {
                let record = self.recorder.record(&event, offset);
                sink.write_event(&record)?;
            }

            if self.recorder.passed() >= self.config.n_events {
                break;
            }
        }

        sink.finish(&source.stats())?;
        Ok(RunSummary {
            collisions,
            passed: self.recorder.passed(),
        })
    }
}
