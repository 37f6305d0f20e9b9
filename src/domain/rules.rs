use super::{Cell, Grid};

/// Moore-neighborhood offsets relative to (row, col), enumerated
/// clockwise starting straight up.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, 0),  // up
    (-1, 1),  // up-right
    (0, 1),   // right
    (1, 1),   // down-right
    (1, 0),   // down
    (1, -1),  // down-left
    (0, -1),  // left
    (-1, -1), // up-left
];

/// Count live cells among the 8 neighbors of (row, col). Neighbors past
/// the grid edge read as dead, so border cells simply see fewer live
/// neighbors.
pub fn count_live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    NEIGHBOR_OFFSETS
        .iter()
        .map(|&(dr, dc)| grid.get(row as isize + dr, col as isize + dc))
        .filter(|cell| cell.is_alive())
        .count() as u8
}

/// Conway's rules (B3/S23):
/// 1. Live cell with 2-3 neighbors survives
/// 2. Dead cell with exactly 3 neighbors becomes alive
/// 3. All other cases result in death
pub const fn next_cell_state(current: Cell, neighbors: u8) -> Cell {
    match (current, neighbors) {
        (Cell::Alive, 2 | 3) => Cell::Alive,
        (Cell::Dead, 3) => Cell::Alive,
        _ => Cell::Dead,
    }
}

/// Evolve one full generation. The next grid is derived entirely from
/// the unmodified prior grid, so no cell ever observes a sibling's
/// already-updated state.
pub fn next_grid(grid: &Grid) -> Grid {
    let (rows, cols) = grid.dimensions();
    let mut next = Grid::new(rows, cols);
    for (row, col, cell) in grid.iter_cells() {
        let neighbors = count_live_neighbors(grid, row, col);
        next.set(row, col, next_cell_state(cell, neighbors));
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(rows: usize, cols: usize, alive: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(rows, cols);
        for &(row, col) in alive {
            grid.set(row, col, Cell::Alive);
        }
        grid
    }

    #[test]
    fn test_underpopulation() {
        assert_eq!(next_cell_state(Cell::Alive, 0), Cell::Dead);
        assert_eq!(next_cell_state(Cell::Alive, 1), Cell::Dead);
    }

    #[test]
    fn test_survival() {
        assert_eq!(next_cell_state(Cell::Alive, 2), Cell::Alive);
        assert_eq!(next_cell_state(Cell::Alive, 3), Cell::Alive);
    }

    #[test]
    fn test_overpopulation() {
        assert_eq!(next_cell_state(Cell::Alive, 4), Cell::Dead);
        assert_eq!(next_cell_state(Cell::Alive, 8), Cell::Dead);
    }

    #[test]
    fn test_reproduction() {
        assert_eq!(next_cell_state(Cell::Dead, 3), Cell::Alive);
        assert_eq!(next_cell_state(Cell::Dead, 2), Cell::Dead);
        assert_eq!(next_cell_state(Cell::Dead, 4), Cell::Dead);
    }

    #[test]
    fn test_neighbor_count_in_the_open() {
        let grid = grid_with(5, 5, &[(1, 1), (1, 2), (1, 3), (2, 1), (3, 3)]);
        assert_eq!(count_live_neighbors(&grid, 2, 2), 5);
        assert_eq!(count_live_neighbors(&grid, 0, 0), 1);
        assert_eq!(count_live_neighbors(&grid, 4, 4), 1);
    }

    #[test]
    fn test_neighbor_count_at_the_corner_sees_dead_border() {
        let grid = grid_with(3, 3, &[(0, 1), (1, 0), (1, 1)]);
        // (0, 0) has only three in-grid neighbors; the five outside count
        // as dead.
        assert_eq!(count_live_neighbors(&grid, 0, 0), 3);
        let empty = Grid::new(3, 3);
        assert_eq!(count_live_neighbors(&empty, 0, 0), 0);
    }

    #[test]
    fn test_neighbor_count_excludes_the_cell_itself() {
        let grid = grid_with(3, 3, &[(1, 1)]);
        assert_eq!(count_live_neighbors(&grid, 1, 1), 0);
    }

    #[test]
    fn test_lone_cell_dies() {
        let grid = grid_with(5, 5, &[(2, 2)]);
        let next = next_grid(&grid);
        assert!(next.iter_cells().all(|(_, _, cell)| cell == Cell::Dead));
    }

    #[test]
    fn test_block_is_a_still_life() {
        let block = [(1, 1), (1, 2), (2, 1), (2, 2)];
        let mut grid = grid_with(4, 4, &block);
        for _ in 0..3 {
            grid = next_grid(&grid);
            for &(row, col) in &block {
                assert_eq!(grid.get(row as isize, col as isize), Cell::Alive);
            }
            let alive = grid.iter_cells().filter(|(_, _, c)| c.is_alive()).count();
            assert_eq!(alive, 4);
        }
    }

    /// A horizontal blinker must flip to vertical in one generation.
    /// Updating in place would kill the middle cell's row-neighbors
    /// before they are counted and produce a different grid, so this
    /// also pins the single-snapshot semantics.
    #[test]
    fn test_blinker_oscillates_with_period_two() {
        let horizontal = [(5, 4), (5, 5), (5, 6)];
        let vertical = [(4, 5), (5, 5), (6, 5)];
        let grid = grid_with(10, 10, &horizontal);

        let after_one = next_grid(&grid);
        for &(row, col) in &vertical {
            assert_eq!(after_one.get(row as isize, col as isize), Cell::Alive);
        }
        for &(row, col) in &[(5isize, 4isize), (5, 6)] {
            assert_eq!(after_one.get(row, col), Cell::Dead);
        }
        let alive = after_one.iter_cells().filter(|(_, _, c)| c.is_alive()).count();
        assert_eq!(alive, 3);

        let after_two = next_grid(&after_one);
        for &(row, col) in &horizontal {
            assert_eq!(after_two.get(row as isize, col as isize), Cell::Alive);
        }
        let alive = after_two.iter_cells().filter(|(_, _, c)| c.is_alive()).count();
        assert_eq!(alive, 3);
    }

    #[test]
    fn test_next_grid_keeps_dimensions() {
        let grid = Grid::new(7, 3);
        let next = next_grid(&grid);
        assert_eq!(next.dimensions(), (7, 3));
    }
}
