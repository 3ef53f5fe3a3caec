//! Orientation transforms that re-express every move direction as one
//! canonical row operation.
//!
//! The collapse step always pushes tiles toward the trailing end of each
//! row. A move in any other direction is handled by transposing and/or
//! reversing the grid first, collapsing, then undoing the transform. Both
//! transforms are involutions, so undoing means applying the same
//! transforms again in the opposite order.

use super::grid::Grid;
use super::Direction;

/// Index permutation for transposing a square grid, computed once per grid
/// size rather than per move.
#[derive(Debug, Clone)]
pub(crate) struct TransposeMap {
    map: Box<[usize]>,
}

impl TransposeMap {
    pub(crate) fn new(size: usize) -> Self {
        let mut map = vec![0; size * size];
        for row in 0..size {
            for col in 0..size {
                map[row * size + col] = col * size + row;
            }
        }
        TransposeMap {
            map: map.into_boxed_slice(),
        }
    }

    /// Transpose `cells` in place.
    ///
    /// The permutation pairs each index with its mirror across the main
    /// diagonal, so a single pass of swaps suffices.
    pub(crate) fn apply(&self, cells: &mut [u32]) {
        debug_assert_eq!(cells.len(), self.map.len());
        for (idx, &dst) in self.map.iter().enumerate() {
            if dst > idx {
                cells.swap(idx, dst);
            }
        }
    }
}

/// Reverse the element order within each row in place.
pub(crate) fn reverse_rows(cells: &mut [u32], size: usize) {
    for row in cells.chunks_mut(size) {
        row.reverse();
    }
}

/// Reorient `grid` so that collapsing every row toward its trailing end
/// realizes a move in `direction`.
pub(crate) fn orient(grid: &mut Grid, transpose: &TransposeMap, direction: Direction) {
    let size = grid.size();
    match direction {
        Direction::Right => {}
        Direction::Left => reverse_rows(grid.cells_mut(), size),
        Direction::Down => transpose.apply(grid.cells_mut()),
        Direction::Up => {
            transpose.apply(grid.cells_mut());
            reverse_rows(grid.cells_mut(), size);
        }
    }
}

/// Undo [`orient`], restoring board-relative coordinates.
pub(crate) fn restore(grid: &mut Grid, transpose: &TransposeMap, direction: Direction) {
    let size = grid.size();
    match direction {
        Direction::Right => {}
        Direction::Left => reverse_rows(grid.cells_mut(), size),
        Direction::Down => transpose.apply(grid.cells_mut()),
        Direction::Up => {
            reverse_rows(grid.cells_mut(), size);
            transpose.apply(grid.cells_mut());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transpose_map_is_involution() {
        let map = TransposeMap::new(3);
        let mut cells = vec![1, 2, 3, 4, 5, 6, 7, 8, 9];
        let original = cells.clone();
        map.apply(&mut cells);
        assert_eq!(cells, vec![1, 4, 7, 2, 5, 8, 3, 6, 9]);
        map.apply(&mut cells);
        assert_eq!(cells, original);
    }

    #[test]
    fn reverse_rows_in_place() {
        let mut cells = vec![1, 2, 3, 4, 5, 6];
        reverse_rows(&mut cells, 3);
        assert_eq!(cells, vec![3, 2, 1, 6, 5, 4]);
        reverse_rows(&mut cells, 3);
        assert_eq!(cells, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn orient_then_restore_round_trips() {
        let transpose = TransposeMap::new(4);
        let cells: Vec<u32> = (0..16).collect();
        for direction in Direction::ALL {
            let mut grid = Grid::from_cells(4, cells.clone());
            orient(&mut grid, &transpose, direction);
            restore(&mut grid, &transpose, direction);
            assert_eq!(grid.cells(), cells.as_slice(), "{direction:?}");
        }
    }

    #[test]
    fn up_composes_transpose_then_reverse() {
        let transpose = TransposeMap::new(2);
        let mut grid = Grid::from_cells(2, vec![1, 2, 3, 4]);
        orient(&mut grid, &transpose, Direction::Up);
        // transpose: [1,3,2,4], then each row reversed: [3,1,4,2]
        assert_eq!(grid.cells(), &[3, 1, 4, 2]);
    }
}
