use crate::{
    boundary::Bounded,
    error::ConfigError,
    field::ScalarField,
    grid::{Grid, Region},
    solver::lin_solve,
    vec2::Vec2,
    vec_field::VectorField,
};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimParams {
    pub size: usize,
    pub dt: f32,
    pub diff: f32,
    pub visc: f32,
    pub iters: usize,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            size: 60,
            dt: 0.2,
            diff: 0.0,
            visc: 0.0,
            iters: 2,
        }
    }
}

pub struct FluidSim {
    grid: Grid,
    params: SimParams,
    obstacles: Vec<Region>,
    density: ScalarField,
    density_prev: ScalarField,
    velocity: VectorField,
    velocity_prev: VectorField,
}

impl FluidSim {
    pub fn new(params: SimParams) -> Result<Self, ConfigError> {
        Self::with_obstacles(params, Vec::new())
    }

    pub fn with_obstacles(
        params: SimParams,
        obstacles: Vec<Region>,
    ) -> Result<Self, ConfigError> {
        if params.size < 3 {
            return Err(ConfigError::GridSize(params.size));
        }
        if params.iters == 0 {
            return Err(ConfigError::Iterations);
        }
        let grid = Grid::new(params.size);
        for region in &obstacles {
            if !region.fits(grid) {
                return Err(ConfigError::RegionOutOfBounds {
                    region: *region,
                    size: grid.size(),
                });
            }
        }
        Ok(Self {
            grid,
            params,
            obstacles,
            density: ScalarField::new(grid),
            density_prev: ScalarField::new(grid),
            velocity: VectorField::new(grid),
            velocity_prev: VectorField::new(grid),
        })
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn params(&self) -> SimParams {
        self.params
    }

    pub fn obstacles(&self) -> &[Region] {
        &self.obstacles
    }

    pub fn density(&self) -> &ScalarField {
        &self.density
    }

    pub fn velocity(&self) -> &VectorField {
        &self.velocity
    }

    pub fn add_density(&mut self, region: Region, amount: f32) -> Result<(), ConfigError> {
        if !region.fits(self.grid) {
            return Err(ConfigError::RegionOutOfBounds {
                region,
                size: self.grid.size(),
            });
        }
        self.density.add_region(region, amount);
        Ok(())
    }

    pub fn set_velocity(&mut self, x: usize, y: usize, value: Vec2) -> Result<(), ConfigError> {
        if !self.grid.contains(x, y) {
            return Err(ConfigError::CellOutOfBounds {
                x,
                y,
                size: self.grid.size(),
            });
        }
        self.velocity.set(x, y, value);
        Ok(())
    }

    pub fn step(&mut self) {
        let SimParams {
            dt,
            diff,
            visc,
            iters,
            ..
        } = self.params;

        diffuse_vector(
            &mut self.velocity_prev,
            &self.velocity,
            visc,
            dt,
            iters,
            &self.obstacles,
        );
        project(
            &mut self.velocity_prev,
            &mut self.velocity,
            iters,
            &self.obstacles,
        );
        advect_vector(&mut self.velocity, &self.velocity_prev, dt, &self.obstacles);
        project(
            &mut self.velocity,
            &mut self.velocity_prev,
            iters,
            &self.obstacles,
        );
        diffuse_scalar(
            &mut self.density_prev,
            &self.density,
            diff,
            dt,
            iters,
            &self.obstacles,
        );
        advect_scalar(
            &mut self.density,
            &self.density_prev,
            &self.velocity,
            dt,
            &self.obstacles,
        );
    }
}

pub fn diffuse_scalar(
    dest: &mut ScalarField,
    source: &ScalarField,
    diff: f32,
    dt: f32,
    iters: usize,
    obstacles: &[Region],
) {
    if diff == 0.0 {
        dest.clone_from(source);
        return;
    }
    let n = dest.grid().size() as f32;
    let a = dt * diff * (n - 2.0) * (n - 2.0);
    lin_solve(dest, source, a, 1.0 + 6.0 * a, iters, obstacles);
}

pub fn diffuse_vector(
    dest: &mut VectorField,
    source: &VectorField,
    visc: f32,
    dt: f32,
    iters: usize,
    obstacles: &[Region],
) {
    if visc == 0.0 {
        dest.clone_from(source);
        return;
    }
    let n = dest.grid().size() as f32;
    let a = dt * visc * (n - 2.0) * (n - 2.0);
    lin_solve(dest, source, a, 1.0 + 6.0 * a, iters, obstacles);
}

/// Pressure lives in `scratch.x`, divergence in `scratch.y`.
pub fn project(
    velocity: &mut VectorField,
    scratch: &mut VectorField,
    iters: usize,
    obstacles: &[Region],
) {
    let n = velocity.grid().size();
    let nf = n as f32;
    let (p, div) = scratch.components_mut();
    for y in 1..n - 1 {
        for x in 1..n - 1 {
            let value = -0.5
                * (velocity.x().get(x + 1, y) - velocity.x().get(x - 1, y)
                    + velocity.y().get(x, y + 1)
                    - velocity.y().get(x, y - 1))
                / nf;
            div.set(x, y, value);
        }
    }
    p.fill(0.0);
    div.apply_boundaries(obstacles);
    p.apply_boundaries(obstacles);
    lin_solve(p, div, 1.0, 6.0, iters, obstacles);
    for y in 1..n - 1 {
        for x in 1..n - 1 {
            let grad_x = 0.5 * (p.get(x + 1, y) - p.get(x - 1, y)) * nf;
            let grad_y = 0.5 * (p.get(x, y + 1) - p.get(x, y - 1)) * nf;
            velocity.x_mut().add(x, y, -grad_x);
            velocity.y_mut().add(x, y, -grad_y);
        }
    }
    velocity.apply_boundaries(obstacles);
}

/// Interior central-difference divergence, same scaling as `project`.
pub fn divergence(velocity: &VectorField) -> ScalarField {
    let grid = velocity.grid();
    let n = grid.size();
    let nf = n as f32;
    let mut out = ScalarField::new(grid);
    for y in 1..n - 1 {
        for x in 1..n - 1 {
            let value = -0.5
                * (velocity.x().get(x + 1, y) - velocity.x().get(x - 1, y)
                    + velocity.y().get(x, y + 1)
                    - velocity.y().get(x, y - 1))
                / nf;
            out.set(x, y, value);
        }
    }
    out
}

fn advect_component(
    dest: &mut ScalarField,
    source: &ScalarField,
    velocity: &VectorField,
    dt: f32,
) {
    let n = dest.grid().size();
    let nf = n as f32;
    let dt0 = dt * (nf - 2.0);
    let max = nf - 1.5;
    for y in 1..n - 1 {
        for x in 1..n - 1 {
            let v = velocity.get(x, y);
            let sx = (x as f32 - dt0 * v.x).clamp(0.5, max);
            let sy = (y as f32 - dt0 * v.y).clamp(0.5, max);
            let x0 = sx.floor();
            let y0 = sy.floor();
            let s1 = sx - x0;
            let s0 = 1.0 - s1;
            let t1 = sy - y0;
            let t0 = 1.0 - t1;
            let x0i = x0 as usize;
            let y0i = y0 as usize;
            let x1i = x0i + 1;
            let y1i = y0i + 1;
            assert!(
                x1i < n && y1i < n,
                "backtrace escaped the grid at ({x}, {y})"
            );
            let value = s0 * (t0 * source.get(x0i, y0i) + t1 * source.get(x0i, y1i))
                + s1 * (t0 * source.get(x1i, y0i) + t1 * source.get(x1i, y1i));
            dest.set(x, y, value);
        }
    }
}

pub fn advect_scalar(
    dest: &mut ScalarField,
    source: &ScalarField,
    velocity: &VectorField,
    dt: f32,
    obstacles: &[Region],
) {
    advect_component(dest, source, velocity, dt);
    dest.apply_boundaries(obstacles);
}

/// Both components of `source` are carried along `source` itself.
pub fn advect_vector(
    dest: &mut VectorField,
    source: &VectorField,
    dt: f32,
    obstacles: &[Region],
) {
    {
        let (dest_x, dest_y) = dest.components_mut();
        advect_component(dest_x, source.x(), source, dt);
        advect_component(dest_y, source.y(), source, dt);
    }
    dest.apply_boundaries(obstacles);
}
