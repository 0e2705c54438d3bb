//! JSON-lines record output.
//!
//! One JSON object per line: first the run header, then one object per
//! accepted event, and finally the pass-through generator statistics.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::sim::recorder::RecordedEvent;
use crate::sim::simulation::{GeneratorStats, RecordSink, RunHeader};

/// A [`RecordSink`] writing JSON lines to any `Write` target.
pub struct JsonLinesSink<W: Write> {
    out: W,
}

impl JsonLinesSink<BufWriter<File>> {
    /// Opens the output file once; it stays open for the whole run.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("cannot create output file {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the sink and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line<T: serde::Serialize>(&mut self, value: &T) -> Result<()> {
        serde_json::to_writer(&mut self.out, value).context("serializing record")?;
        self.out.write_all(b"\n").context("writing record")?;
        Ok(())
    }
}

impl<W: Write> RecordSink for JsonLinesSink<W> {
    fn write_header(&mut self, header: &RunHeader) -> Result<()> {
        self.write_line(header)
    }

    fn write_event(&mut self, event: &RecordedEvent) -> Result<()> {
        self.write_line(event)
    }

    fn finish(&mut self, stats: &GeneratorStats) -> Result<()> {
        self.write_line(stats)?;
        self.out.flush().context("flushing record output")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::recorder::RecordedParticle;

    #[test]
    fn test_lines_round_trip() {
        let mut sink = JsonLinesSink::new(Vec::new());
        let header = RunHeader {
            run_type: 1,
            model: 3,
        };
        let event = RecordedEvent {
            number: 7,
            process_id: 95,
            particles: vec![RecordedParticle {
                pdg_id: 22,
                status: 1,
                px: 0.0,
                py: 0.0,
                pz: 5.0,
                energy: 5.0,
                mass: 0.0,
                vx: 0.25,
                vy: 1.9,
                vz: -120.0,
                time: 0.0,
                parents: [0, 0],
                children: [0, 0],
            }],
        };
        sink.write_header(&header).unwrap();
        sink.write_event(&event).unwrap();
        sink.finish(&GeneratorStats::default()).unwrap();

        let out = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);

        let header_back: RunHeader = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(header_back, header);
        let event_back: RecordedEvent = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(event_back, event);
        let stats_back: GeneratorStats = serde_json::from_str(lines[2]).unwrap();
        assert_eq!(stats_back, GeneratorStats::default());
    }
}
