use crate::{boundary::Bounded, field::ScalarField, grid::Region, vec_field::VectorField};

/// One simultaneous 5-point stencil update over the interior, reading
/// neighbor values from the previous sweep.
pub trait Stencil: Bounded + Clone {
    fn relax_sweep(&mut self, prev: &Self, source: &Self, a: f32, inv_c: f32);
}

impl Stencil for ScalarField {
    fn relax_sweep(&mut self, prev: &Self, source: &Self, a: f32, inv_c: f32) {
        let n = self.grid().size();
        for y in 1..n - 1 {
            for x in 1..n - 1 {
                let neighbors = prev.get(x + 1, y)
                    + prev.get(x - 1, y)
                    + prev.get(x, y + 1)
                    + prev.get(x, y - 1);
                self.set(x, y, (source.get(x, y) + a * neighbors) * inv_c);
            }
        }
    }
}

impl Stencil for VectorField {
    fn relax_sweep(&mut self, prev: &Self, source: &Self, a: f32, inv_c: f32) {
        self.x_mut().relax_sweep(prev.x(), source.x(), a, inv_c);
        self.y_mut().relax_sweep(prev.y(), source.y(), a, inv_c);
    }
}

/// Exactly `iters` sweeps, no convergence check. The boundary policy runs
/// after every sweep so the next sweep reads fresh border values.
pub fn lin_solve<F: Stencil>(
    x: &mut F,
    x0: &F,
    a: f32,
    c: f32,
    iters: usize,
    obstacles: &[Region],
) {
    assert!(c != 0.0, "zero center weight in lin_solve");
    let inv_c = 1.0 / c;
    let mut prev = x.clone();
    for _ in 0..iters {
        prev.clone_from(x);
        x.relax_sweep(&prev, x0, a, inv_c);
        x.apply_boundaries(obstacles);
    }
}
