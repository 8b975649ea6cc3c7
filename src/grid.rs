use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        assert!(size >= 3, "grid needs a border ring and an interior");
        Self { size }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cells(&self) -> usize {
        self.size * self.size
    }

    pub fn idx(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.size && y < self.size);
        y * self.size + x
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size
    }
}

/// Half-open axis-aligned cell rectangle `[x0, x1) x [y0, y1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub x0: usize,
    pub y0: usize,
    pub x1: usize,
    pub y1: usize,
}

impl Region {
    pub fn new(x0: usize, y0: usize, x1: usize, y1: usize) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn cell(x: usize, y: usize) -> Self {
        Self::new(x, y, x + 1, y + 1)
    }

    pub fn fits(&self, grid: Grid) -> bool {
        self.x0 < self.x1 && self.y0 < self.y1 && self.x1 <= grid.size() && self.y1 <= grid.size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idx_is_row_major() {
        let grid = Grid::new(4);
        assert_eq!(grid.idx(0, 0), 0);
        assert_eq!(grid.idx(3, 0), 3);
        assert_eq!(grid.idx(0, 1), 4);
        assert_eq!(grid.idx(2, 3), 14);
    }

    #[test]
    fn region_fits_checks_bounds_and_emptiness() {
        let grid = Grid::new(8);
        assert!(Region::new(0, 0, 8, 8).fits(grid));
        assert!(Region::cell(7, 7).fits(grid));
        assert!(!Region::new(0, 0, 9, 8).fits(grid));
        assert!(!Region::new(3, 3, 3, 5).fits(grid));
    }

    #[test]
    #[should_panic(expected = "border ring")]
    fn grid_rejects_degenerate_size() {
        Grid::new(2);
    }
}
