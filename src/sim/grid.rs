//! Whole-board moves
//!
//! Horizontal moves run the row transforms on each row. Vertical moves read
//! each column top-to-bottom, treat it as a row, and write it back: up is a
//! leftward move of the column, down a rightward one. Inputs are never
//! mutated, so callers can compare before/after to detect a no-op move.

use std::fmt;
use std::str::FromStr;

use super::row::{Moved, Row, is_full, move_left, move_right};
use crate::consts::GRID_SIZE;

/// Four rows of four tiles, row-major
pub type Grid = [Row; GRID_SIZE];

/// An empty board
pub const EMPTY_GRID: Grid = [[0; GRID_SIZE]; GRID_SIZE];

/// Direction tiles travel in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in the order loss detection probes them
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Up,
        Direction::Down,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// True for up/down, which work on columns
    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized direction symbol
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown direction: {0:?}")]
pub struct ParseDirectionError(pub String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

/// Column `col` read top-to-bottom.
///
/// # Panics
/// If `col` is not in `0..GRID_SIZE`.
pub fn get_column(grid: &Grid, col: usize) -> Row {
    assert!(col < GRID_SIZE, "column index {col} out of range");
    let mut column = [0; GRID_SIZE];
    for (cell, row) in column.iter_mut().zip(grid.iter()) {
        *cell = row[col];
    }
    column
}

/// Write `column` (top-to-bottom) into column `col`.
///
/// # Panics
/// If `col` is not in `0..GRID_SIZE`.
pub fn set_column(grid: &mut Grid, col: usize, column: Row) {
    assert!(col < GRID_SIZE, "column index {col} out of range");
    for (row, value) in grid.iter_mut().zip(column) {
        row[col] = value;
    }
}

/// Column `col` after moving its tiles to the top
pub fn move_up(grid: &Grid, col: usize) -> Moved<Row> {
    move_left(get_column(grid, col))
}

/// Column `col` after moving its tiles to the bottom
pub fn move_down(grid: &Grid, col: usize) -> Moved<Row> {
    move_right(get_column(grid, col))
}

/// Apply a move to every row or column, returning a fresh grid
pub fn move_all_in_direction(grid: &Grid, direction: Direction) -> Moved<Grid> {
    let mut cells = EMPTY_GRID;
    let mut points = 0;

    for i in 0..GRID_SIZE {
        let moved = match direction {
            Direction::Left => move_left(grid[i]),
            Direction::Right => move_right(grid[i]),
            Direction::Up => move_up(grid, i),
            Direction::Down => move_down(grid, i),
        };
        points += moved.points;
        if direction.is_vertical() {
            set_column(&mut cells, i, moved.cells);
        } else {
            cells[i] = moved.cells;
        }
    }

    Moved { cells, points }
}

/// Would moving in `direction` change anything?
pub fn can_move(grid: &Grid, direction: Direction) -> bool {
    move_all_in_direction(grid, direction).cells != *grid
}

/// Directions that would change the board
pub fn legal_directions(grid: &Grid) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|&d| can_move(grid, d))
        .collect()
}

/// A full board that no direction can change
pub fn is_stuck(grid: &Grid) -> bool {
    grid.iter().all(is_full) && Direction::ALL.iter().all(|&d| !can_move(grid, d))
}

/// Positions `(row, col)` of empty cells, row-major
pub fn empty_cells(grid: &Grid) -> Vec<(usize, usize)> {
    let mut cells = Vec::new();
    for (r, row) in grid.iter().enumerate() {
        for (c, &value) in row.iter().enumerate() {
            if value == 0 {
                cells.push((r, c));
            }
        }
    }
    cells
}

/// Number of occupied cells
pub fn tile_count(grid: &Grid) -> usize {
    grid.iter().flatten().filter(|&&v| v != 0).count()
}

/// Sum of all tile values
pub fn tile_sum(grid: &Grid) -> u64 {
    grid.iter().flatten().map(|&v| u64::from(v)).sum()
}

/// Largest tile on the board (0 when empty)
pub fn max_tile(grid: &Grid) -> u32 {
    grid.iter().flatten().copied().max().unwrap_or(0)
}

/// True if any cell holds `value`
pub fn contains(grid: &Grid, value: u32) -> bool {
    grid.iter().flatten().any(|&v| v == value)
}

/// One bracketed row per line, e.g. `[0,2,0,4]`
pub fn format_grid(grid: &Grid) -> String {
    grid.iter()
        .map(|row| {
            let cells: Vec<String> = row.iter().map(u32::to_string).collect();
            format!("[{}]", cells.join(","))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
