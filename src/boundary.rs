use crate::{field::ScalarField, grid::Region, vec_field::VectorField};

/// Fix the outer ring, then the corners, then zero obstacle-covered cells.
pub trait Bounded {
    fn apply_boundaries(&mut self, obstacles: &[Region]);
}

impl Bounded for ScalarField {
    fn apply_boundaries(&mut self, obstacles: &[Region]) {
        let n = self.grid().size();
        for x in 1..n - 1 {
            let near = self.get(x, 1);
            self.set(x, 0, near);
            let far = self.get(x, n - 2);
            self.set(x, n - 1, far);
        }
        for y in 1..n - 1 {
            let near = self.get(1, y);
            self.set(0, y, near);
            let far = self.get(n - 2, y);
            self.set(n - 1, y, far);
        }
        fix_corners(self);
        mask_obstacles(self, obstacles);
    }
}

impl Bounded for VectorField {
    fn apply_boundaries(&mut self, obstacles: &[Region]) {
        let n = self.grid().size();
        for y in 0..n {
            let left = self.x().get(0, y);
            self.x_mut().set(0, y, -left);
            let right = self.x().get(n - 1, y);
            self.x_mut().set(n - 1, y, -right);
        }
        for x in 0..n {
            let bottom = self.y().get(x, 0);
            self.y_mut().set(x, 0, -bottom);
            let top = self.y().get(x, n - 1);
            self.y_mut().set(x, n - 1, -top);
        }
        let (x, y) = self.components_mut();
        fix_corners(x);
        fix_corners(y);
        mask_obstacles(x, obstacles);
        mask_obstacles(y, obstacles);
    }
}

fn fix_corners(field: &mut ScalarField) {
    let n = field.grid().size();
    field.set(0, 0, 0.5 * (field.get(1, 0) + field.get(0, 1)));
    field.set(n - 1, 0, 0.5 * (field.get(n - 2, 0) + field.get(n - 1, 1)));
    field.set(0, n - 1, 0.5 * (field.get(1, n - 1) + field.get(0, n - 2)));
    field.set(
        n - 1,
        n - 1,
        0.5 * (field.get(n - 2, n - 1) + field.get(n - 1, n - 2)),
    );
}

fn mask_obstacles(field: &mut ScalarField, obstacles: &[Region]) {
    for region in obstacles {
        debug_assert!(region.fits(field.grid()), "obstacle outside grid");
        for y in region.y0..region.y1 {
            for x in region.x0..region.x1 {
                field.set(x, y, 0.0);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{grid::Grid, vec2::Vec2};

    #[test]
    fn scalar_edges_copy_adjacent_interior() {
        let mut field = ScalarField::from_fn(Grid::new(5), |x, y| (x * 10 + y) as f32);
        field.apply_boundaries(&[]);
        for i in 1..4 {
            assert_eq!(field.get(i, 0), field.get(i, 1));
            assert_eq!(field.get(i, 4), field.get(i, 3));
            assert_eq!(field.get(0, i), field.get(1, i));
            assert_eq!(field.get(4, i), field.get(3, i));
        }
    }

    #[test]
    fn vector_edges_negate_normal_component_only() {
        let grid = Grid::new(6);
        let before = VectorField::from_fn(grid, |x, y| Vec2::new((x + 1) as f32, (y + 2) as f32));
        let mut field = before.clone();
        field.apply_boundaries(&[]);
        let n = grid.size();
        for i in 1..n - 1 {
            assert_eq!(field.x().get(0, i), -before.x().get(0, i));
            assert_eq!(field.x().get(n - 1, i), -before.x().get(n - 1, i));
            assert_eq!(field.y().get(i, 0), -before.y().get(i, 0));
            assert_eq!(field.y().get(i, n - 1), -before.y().get(i, n - 1));
            // tangential components along the same edges are untouched
            assert_eq!(field.y().get(0, i), before.y().get(0, i));
            assert_eq!(field.y().get(n - 1, i), before.y().get(n - 1, i));
            assert_eq!(field.x().get(i, 0), before.x().get(i, 0));
            assert_eq!(field.x().get(i, n - 1), before.x().get(i, n - 1));
        }
    }

    #[test]
    fn corners_average_orthogonal_neighbors() {
        let grid = Grid::new(5);
        let n = grid.size();
        let mut scalar = ScalarField::from_fn(grid, |x, y| (x * 7 + y * 3) as f32);
        scalar.apply_boundaries(&[]);
        assert_eq!(scalar.get(0, 0), 0.5 * (scalar.get(1, 0) + scalar.get(0, 1)));
        assert_eq!(
            scalar.get(n - 1, 0),
            0.5 * (scalar.get(n - 2, 0) + scalar.get(n - 1, 1))
        );
        assert_eq!(
            scalar.get(0, n - 1),
            0.5 * (scalar.get(1, n - 1) + scalar.get(0, n - 2))
        );
        assert_eq!(
            scalar.get(n - 1, n - 1),
            0.5 * (scalar.get(n - 2, n - 1) + scalar.get(n - 1, n - 2))
        );

        let mut vector = VectorField::from_fn(grid, |x, y| Vec2::new(x as f32, -(y as f32)));
        vector.apply_boundaries(&[]);
        for comp in [vector.x(), vector.y()] {
            assert_eq!(comp.get(0, 0), 0.5 * (comp.get(1, 0) + comp.get(0, 1)));
            assert_eq!(
                comp.get(n - 1, n - 1),
                0.5 * (comp.get(n - 2, n - 1) + comp.get(n - 1, n - 2))
            );
        }
    }

    #[test]
    fn obstacles_zero_covered_cells() {
        let grid = Grid::new(8);
        let obstacles = [Region::new(2, 3, 5, 6)];
        let mut scalar = ScalarField::from_fn(grid, |_, _| 9.0);
        scalar.apply_boundaries(&obstacles);
        for y in 3..6 {
            for x in 2..5 {
                assert_eq!(scalar.get(x, y), 0.0);
            }
        }
        assert_eq!(scalar.get(5, 3), 9.0);
        assert_eq!(scalar.get(2, 6), 9.0);

        let mut vector = VectorField::from_fn(grid, |_, _| Vec2::new(1.0, -2.0));
        vector.apply_boundaries(&obstacles);
        assert_eq!(vector.get(3, 4), Vec2::zero());
        assert_eq!(vector.get(5, 4), Vec2::new(1.0, -2.0));
    }
}
