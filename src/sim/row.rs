//! Row transforms
//!
//! Every move on the board reduces to sliding and merging a single row of
//! four tiles toward its high-index end. Leftward moves are the same
//! transform applied to the reversed row.

use crate::consts::GRID_SIZE;

/// Four tile values; `0` marks an empty cell
pub type Row = [u32; GRID_SIZE];

/// Cells produced by a move, with the points scored by its merges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Moved<T> {
    pub cells: T,
    pub points: u64,
}

/// Shift all tiles toward the right, keeping their order. No merging.
pub fn slide(row: Row) -> Row {
    let mut out = [0; GRID_SIZE];
    let mut next = GRID_SIZE;
    for &value in row.iter().rev().filter(|&&v| v != 0) {
        next -= 1;
        out[next] = value;
    }
    out
}

/// Shift all tiles toward the left, keeping their order. No merging.
pub fn slide_left(row: Row) -> Row {
    reversed(slide(reversed(row)))
}

/// Merge equal neighbours, scanning right to left.
///
/// Each pair `(i, i + 1)` of equal non-zero tiles doubles into `i + 1` and
/// empties `i`. The scan only moves left, so a freshly merged tile is never
/// merged again in the same pass.
pub fn combine_adjacent(row: Row) -> Moved<Row> {
    let mut cells = row;
    let mut points = 0;
    for i in (0..GRID_SIZE - 1).rev() {
        if cells[i] != 0 && cells[i] == cells[i + 1] {
            cells[i + 1] *= 2;
            cells[i] = 0;
            points += u64::from(cells[i + 1]);
        }
    }
    Moved { cells, points }
}

/// Slide, merge, then slide again to close the gaps merges leave behind
pub fn move_right(row: Row) -> Moved<Row> {
    let merged = combine_adjacent(slide(row));
    Moved {
        cells: slide(merged.cells),
        points: merged.points,
    }
}

/// Mirror image of [`move_right`]
pub fn move_left(row: Row) -> Moved<Row> {
    let moved = move_right(reversed(row));
    Moved {
        cells: reversed(moved.cells),
        points: moved.points,
    }
}

/// True when no cell in the row is empty
#[inline]
pub fn is_full(row: &Row) -> bool {
    row.iter().all(|&v| v != 0)
}

#[inline]
fn reversed(mut row: Row) -> Row {
    row.reverse();
    row
}
