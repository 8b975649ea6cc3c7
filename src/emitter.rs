use crate::{error::ConfigError, grid::Region, sim::FluidSim, vec2::Vec2};
use serde::{Deserialize, Serialize};

/// Modulation of an emitter's velocity vector over ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Oscillation {
    Steady,
    Circle,
    Sway,
}

impl Oscillation {
    pub fn modulate(self, velocity: Vec2, tick: u64) -> Vec2 {
        let t = 0.5 * tick as f32;
        match self {
            Oscillation::Steady => velocity,
            Oscillation::Circle => Vec2::new(velocity.x * t.cos(), velocity.y * t.sin()),
            Oscillation::Sway => Vec2::new(velocity.x * t.sin(), velocity.y),
        }
    }
}

/// A density/velocity source injected before each tick: adds `density` over
/// `region` and writes the modulated velocity at the region's anchor cell.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Emitter {
    pub region: Region,
    pub density: f32,
    pub velocity: Vec2,
    pub oscillation: Oscillation,
}

impl Emitter {
    pub fn apply(&self, sim: &mut FluidSim, tick: u64) -> Result<(), ConfigError> {
        sim.add_density(self.region, self.density)?;
        let velocity = self.oscillation.modulate(self.velocity, tick);
        sim.set_velocity(self.region.x0, self.region.y0, velocity)
    }
}
