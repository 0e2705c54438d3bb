use anyhow::Result;
use rhicfgen::io::JsonLinesSink;
use rhicfgen::{
    Event, EventSource, Generated, GeneratorStats, Model, Particle, Point, RunConfig, RunType,
    Simulation, Vector,
};

/// Toy stand-in for the physics generator: one forward photon per
/// collision, with a slowly varying transverse kick so only part of the
/// collisions point at the towers.
struct PhotonGun {
    fired: u64,
    rounds: u64,
}

impl EventSource for PhotonGun {
    fn next_collision(&mut self) -> Result<Generated> {
        if self.fired == self.rounds {
            return Ok(Generated::Finished);
        }
        let kick = (self.fired % 100) as f64 * 0.0005;
        let mut event = Event::new(self.fired, 1);
        event.particles.push(Particle {
            pdg_id: 22,
            status: 1,
            momentum: Vector::new(kick * 5.0, 0.0, 5.0),
            energy: 5.0,
            mass: 0.0,
            vertex: Point::new(0.0, 0.0, 0.0),
            time: 0.0,
            parents: vec![],
            children: vec![],
        });
        self.fired += 1;
        Ok(Generated::Collision(event))
    }

    fn stats(&self) -> GeneratorStats {
        GeneratorStats::default()
    }
}

fn main() -> Result<()> {
    let config = RunConfig {
        run_type: RunType::parse("TS")?,
        model: Model::from_code(0)?,
        seed: 20260829,
        n_events: 100,
        job_index: None,
    };
    let output = format!("{}.jsonl", config.output_stem());

    let mut sink = JsonLinesSink::create(&output)?;
    let mut source = PhotonGun {
        fired: 0,
        rounds: 100_000,
    };
    let summary = Simulation::new(config)?.run(&mut source, &mut sink)?;

    println!(
        "successfully processed {} events in {} collisions -> {}",
        summary.passed, summary.collisions, output
    );
    Ok(())
}
