use crate::grid::Region;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid size {0} is too small, need at least 3")]
    GridSize(usize),
    #[error("solver iteration count must be positive")]
    Iterations,
    #[error("region {region:?} outside {size}x{size} grid")]
    RegionOutOfBounds { region: Region, size: usize },
    #[error("cell ({x}, {y}) outside {size}x{size} grid")]
    CellOutOfBounds { x: usize, y: usize, size: usize },
}
