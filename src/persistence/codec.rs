//! Flat grid format
//!
//! A board is stored as 16 comma-separated integers in row-major order,
//! e.g. `0,2,0,0,0,0,0,4,2,2,0,4,2,0,8,0`.

use crate::consts::{GRID_SIZE, MAX_TILE};
use crate::is_tile_value;
use crate::sim::{EMPTY_GRID, Grid};

/// Why a stored board could not be restored
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GridParseError {
    #[error("expected {expected} cells, found {found}")]
    CellCount { expected: usize, found: usize },
    #[error("cell {index}: not a number: {text:?}")]
    InvalidNumber { index: usize, text: String },
    #[error("cell {index}: {value} is not 0 or a power of two up to {max}", max = MAX_TILE)]
    InvalidTile { index: usize, value: u32 },
}

/// Row-major, comma separated
pub fn encode_grid(grid: &Grid) -> String {
    grid.iter()
        .flatten()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Split on commas and reshape into rows of four
pub fn decode_grid(text: &str) -> Result<Grid, GridParseError> {
    let parts: Vec<&str> = text.split(',').map(str::trim).collect();
    let expected = GRID_SIZE * GRID_SIZE;
    if parts.len() != expected {
        return Err(GridParseError::CellCount {
            expected,
            found: parts.len(),
        });
    }

    let mut grid = EMPTY_GRID;
    for (index, part) in parts.into_iter().enumerate() {
        let value: u32 = part.parse().map_err(|_| GridParseError::InvalidNumber {
            index,
            text: part.to_string(),
        })?;
        if value != 0 && !is_tile_value(value) {
            return Err(GridParseError::InvalidTile { index, value });
        }
        grid[index / GRID_SIZE][index % GRID_SIZE] = value;
    }
    Ok(grid)
}
