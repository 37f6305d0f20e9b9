use super::Cell;

/// Grid manages the 2D cell matrix, indexed by (row, col) in row-major
/// order. Dimensions are fixed for the lifetime of the grid.
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        }
    }

    /// Get grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Cell state at (row, col). Anything outside the grid, including
    /// negative coordinates, reads as Dead: the edge behaves as a
    /// permanently dead border rather than wrapping around.
    pub fn get(&self, row: isize, col: isize) -> Cell {
        if row < 0 || col < 0 || row >= self.rows as isize || col >= self.cols as isize {
            return Cell::Dead;
        }
        self.cells[self.get_index(row as usize, col as usize)]
    }

    /// Set cell at position. Out-of-range writes are ignored.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if row < self.rows && col < self.cols {
            let idx = self.get_index(row, col);
            self.cells[idx] = cell;
        }
    }

    /// Whether (row, col) addresses a cell inside the grid
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Replace every cell by invoking `generator` once per cell, in
    /// row-major order. The order is observable when the generator is
    /// stateful: a seeded random source refills the same way every time.
    pub fn fill(&mut self, mut generator: impl FnMut() -> Cell) {
        self.cells.iter_mut().for_each(|cell| *cell = generator());
    }

    /// Iterate over all cells with their positions, row-major
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..self.rows)
            .flat_map(move |row| (0..self.cols).map(move |col| (row, col)))
            .map(|(row, col)| (row, col, self.cells[self.get_index(row, col)]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_all_dead() {
        let grid = Grid::new(4, 6);
        assert_eq!(grid.dimensions(), (4, 6));
        assert!(grid.iter_cells().all(|(_, _, cell)| cell == Cell::Dead));
    }

    #[test]
    fn test_out_of_bounds_reads_as_dead() {
        let mut grid = Grid::new(3, 3);
        grid.fill(|| Cell::Alive);

        assert_eq!(grid.get(-1, 0), Cell::Dead);
        assert_eq!(grid.get(0, -1), Cell::Dead);
        assert_eq!(grid.get(3, 0), Cell::Dead);
        assert_eq!(grid.get(0, 3), Cell::Dead);
        assert_eq!(grid.get(-1, -1), Cell::Dead);
        assert_eq!(grid.get(0, 0), Cell::Alive);
    }

    #[test]
    fn test_set_and_get_roundtrip() {
        let mut grid = Grid::new(3, 5);
        grid.set(2, 4, Cell::Alive);
        assert_eq!(grid.get(2, 4), Cell::Alive);
        assert_eq!(grid.get(2, 3), Cell::Dead);
    }

    #[test]
    fn test_out_of_range_set_is_ignored() {
        let mut grid = Grid::new(2, 2);
        grid.set(2, 0, Cell::Alive);
        grid.set(0, 2, Cell::Alive);
        assert!(grid.iter_cells().all(|(_, _, cell)| cell == Cell::Dead));
    }

    #[test]
    fn test_fill_runs_in_row_major_order() {
        let mut grid = Grid::new(2, 3);
        let mut counter = 0;
        // Stateful generator: only the 4th cell visited becomes alive,
        // which is (1, 0) in row-major order.
        grid.fill(|| {
            counter += 1;
            if counter == 4 { Cell::Alive } else { Cell::Dead }
        });

        assert_eq!(grid.get(1, 0), Cell::Alive);
        let alive = grid.iter_cells().filter(|(_, _, c)| c.is_alive()).count();
        assert_eq!(alive, 1);
    }

    #[test]
    fn test_iter_cells_order_and_count() {
        let grid = Grid::new(2, 2);
        let coords: Vec<(usize, usize)> =
            grid.iter_cells().map(|(row, col, _)| (row, col)).collect();
        assert_eq!(coords, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }
}
