use crate::grid::{Grid, Region};

#[derive(Clone, Debug, PartialEq)]
pub struct ScalarField {
    grid: Grid,
    data: Vec<f32>,
}

impl ScalarField {
    pub fn new(grid: Grid) -> Self {
        let data = vec![0.0; grid.cells()];
        Self { grid, data }
    }

    pub fn from_fn(grid: Grid, f: impl Fn(usize, usize) -> f32) -> Self {
        let size = grid.size();
        let data = (0..grid.cells())
            .map(|i| {
                let x = i % size;
                let y = i / size;
                f(x, y)
            })
            .collect();
        Self { grid, data }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[self.grid.idx(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, value: f32) {
        let idx = self.grid.idx(x, y);
        self.data[idx] = value;
    }

    pub fn add(&mut self, x: usize, y: usize, delta: f32) {
        let idx = self.grid.idx(x, y);
        self.data[idx] += delta;
    }

    pub fn add_region(&mut self, region: Region, delta: f32) {
        assert!(region.fits(self.grid), "region outside field");
        for y in region.y0..region.y1 {
            for x in region.x0..region.x1 {
                self.add(x, y, delta);
            }
        }
    }

    pub fn fill(&mut self, value: f32) {
        self.data.fill(value);
    }

    pub fn clone_from(&mut self, other: &Self) {
        assert_eq!(self.grid, other.grid, "field grid mismatch");
        self.data.clone_from(&other.data);
    }

    pub fn sum(&self) -> f32 {
        self.data.iter().sum()
    }

    pub fn abs_sum(&self) -> f32 {
        self.data.iter().map(|value| value.abs()).sum()
    }

    pub fn max_abs(&self) -> f32 {
        self.data.iter().map(|value| value.abs()).fold(0.0_f32, f32::max)
    }

    pub fn min_max(&self) -> (f32, f32) {
        let mut iter = self.data.iter().filter(|value| value.is_finite());
        let Some(first) = iter.next() else {
            return (0.0, 0.0);
        };
        let mut min_value = *first;
        let mut max_value = *first;
        for value in iter {
            if *value < min_value {
                min_value = *value;
            }
            if *value > max_value {
                max_value = *value;
            }
        }
        (min_value, max_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_field_is_zero() {
        let field = ScalarField::new(Grid::new(4));
        assert_eq!(field.sum(), 0.0);
    }

    #[test]
    fn from_fn_maps_coords() {
        let field = ScalarField::from_fn(Grid::new(3), |x, y| (x + y * 10) as f32);
        assert_eq!(field.get(2, 1), 12.0);
        assert_eq!(field.get(0, 2), 20.0);
    }

    #[test]
    fn add_region_accumulates() {
        let mut field = ScalarField::new(Grid::new(6));
        field.add_region(Region::new(1, 2, 4, 4), 2.5);
        field.add_region(Region::new(1, 2, 4, 4), 2.5);
        assert_eq!(field.get(1, 2), 5.0);
        assert_eq!(field.get(3, 3), 5.0);
        assert_eq!(field.get(4, 2), 0.0);
        assert_eq!(field.sum(), 30.0);
    }

    #[test]
    #[should_panic(expected = "region outside field")]
    fn add_region_rejects_out_of_bounds() {
        let mut field = ScalarField::new(Grid::new(4));
        field.add_region(Region::new(2, 2, 5, 3), 1.0);
    }

    #[test]
    fn min_max_reports_bounds() {
        let field = ScalarField::from_fn(Grid::new(3), |x, y| (x + y * 3) as f32 - 4.0);
        assert_eq!(field.min_max(), (-4.0, 4.0));
    }
}
