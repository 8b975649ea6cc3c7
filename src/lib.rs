mod boundary;
mod emitter;
mod error;
mod field;
mod grid;
mod sim;
mod solver;
mod vec2;
mod vec_field;

pub use boundary::Bounded;
pub use emitter::{Emitter, Oscillation};
pub use error::ConfigError;
pub use field::ScalarField;
pub use grid::{Grid, Region};
pub use sim::{
    advect_scalar, advect_vector, diffuse_scalar, diffuse_vector, divergence, project, FluidSim,
    SimParams,
};
pub use solver::{lin_solve, Stencil};
pub use vec2::Vec2;
pub use vec_field::VectorField;
