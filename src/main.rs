use anyhow::Result;
use stable_fluids::{Emitter, FluidSim, Oscillation, Region, SimParams, Vec2};

fn main() -> Result<()> {
    let mut sim = FluidSim::new(SimParams::default())?;
    let emitter = Emitter {
        region: Region::new(4, 4, 7, 7),
        density: 100.0,
        velocity: Vec2::new(1.0, 2.0),
        oscillation: Oscillation::Steady,
    };
    for tick in 0..30u64 {
        emitter.apply(&mut sim, tick)?;
        sim.step();
        let total = sim.density().sum();
        let (lo, hi) = sim.density().min_max();
        let speed = sim.velocity().max_abs();
        println!(
            "tick {tick:2}  density sum {total:10.2}  range [{lo:8.3}, {hi:8.3}]  max |v| {speed:6.3}"
        );
    }
    Ok(())
}
