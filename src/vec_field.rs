use crate::{field::ScalarField, grid::Grid, vec2::Vec2};

#[derive(Clone, Debug, PartialEq)]
pub struct VectorField {
    x: ScalarField,
    y: ScalarField,
}

impl VectorField {
    pub fn new(grid: Grid) -> Self {
        Self {
            x: ScalarField::new(grid),
            y: ScalarField::new(grid),
        }
    }

    pub fn from_fn(grid: Grid, f: impl Fn(usize, usize) -> Vec2) -> Self {
        let x = ScalarField::from_fn(grid, |i, j| f(i, j).x);
        let y = ScalarField::from_fn(grid, |i, j| f(i, j).y);
        Self { x, y }
    }

    pub fn from_components(x: ScalarField, y: ScalarField) -> Self {
        assert_eq!(x.grid(), y.grid(), "component grid mismatch");
        Self { x, y }
    }

    pub fn grid(&self) -> Grid {
        self.x.grid()
    }

    pub fn get(&self, x: usize, y: usize) -> Vec2 {
        Vec2::new(self.x.get(x, y), self.y.get(x, y))
    }

    pub fn set(&mut self, x: usize, y: usize, value: Vec2) {
        self.x.set(x, y, value.x);
        self.y.set(x, y, value.y);
    }

    pub fn x(&self) -> &ScalarField {
        &self.x
    }

    pub fn y(&self) -> &ScalarField {
        &self.y
    }

    pub fn x_mut(&mut self) -> &mut ScalarField {
        &mut self.x
    }

    pub fn y_mut(&mut self) -> &mut ScalarField {
        &mut self.y
    }

    pub fn components_mut(&mut self) -> (&mut ScalarField, &mut ScalarField) {
        (&mut self.x, &mut self.y)
    }

    pub fn clone_from(&mut self, other: &Self) {
        self.x.clone_from(&other.x);
        self.y.clone_from(&other.y);
    }

    pub fn max_abs(&self) -> f32 {
        self.x.max_abs().max(self.y.max_abs())
    }
}
