use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::timer::{DEFAULT_STEP_INTERVAL_MS, StepTimer};
use crate::domain::{Cell, Grid, rules};

/// Drawing boundary the simulation pushes cell updates through.
/// The canvas renderer implements this; tests substitute a recorder.
pub trait CellSurface {
    /// Paint one cell in the given state
    fn draw_cell(&mut self, row: usize, col: usize, cell: Cell);
}

/// Simulation orchestrates the session: the grid, the run/pause state
/// and the step cadence. All grid mutation funnels through here; the
/// rules module only ever reads it.
pub struct Simulation {
    pub grid: Grid,
    timer: StepTimer,
    generation: u64,
    rng: StdRng,
}

impl Simulation {
    /// Create a paused simulation with an all-dead grid
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::with_rng(rows, cols, StdRng::from_os_rng())
    }

    /// Same, with a deterministic random source for reseeding
    pub fn seeded(rows: usize, cols: usize, seed: u64) -> Self {
        Self::with_rng(rows, cols, StdRng::seed_from_u64(seed))
    }

    fn with_rng(rows: usize, cols: usize, rng: StdRng) -> Self {
        Self {
            grid: Grid::new(rows, cols),
            timer: StepTimer::new(DEFAULT_STEP_INTERVAL_MS),
            generation: 0,
            rng,
        }
    }

    /// The armed timer is the single source of truth for run/pause
    pub const fn is_running(&self) -> bool {
        self.timer.is_armed()
    }

    pub const fn interval_ms(&self) -> u64 {
        self.timer.interval_ms()
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Toggle play/pause. Resuming arms a fresh countdown at the
    /// current interval; pausing cancels the pending fire.
    pub fn toggle_running(mut self) -> Self {
        if self.timer.is_armed() {
            self.timer.cancel();
        } else {
            self.timer.arm();
        }
        self
    }

    /// Shift the step interval, clamped to the 100 ms floor. While
    /// running, the next generation waits the full new interval.
    pub fn adjust_interval(mut self, delta_ms: i64) -> Self {
        self.timer.adjust_interval(delta_ms);
        self
    }

    /// Refill the grid with a fair coin flip per cell and repaint
    /// everything, since essentially every cell may have changed.
    pub fn reseed(mut self, surface: &mut dyn CellSurface) -> Self {
        let rng = &mut self.rng;
        self.grid.fill(|| {
            if rng.random_bool(0.5) { Cell::Alive } else { Cell::Dead }
        });
        self.generation = 0;
        self.repaint_all(surface);
        self
    }

    /// Kill every cell and repaint everything. Does not pause.
    pub fn clear(mut self, surface: &mut dyn CellSurface) -> Self {
        self.grid.fill(|| Cell::Dead);
        self.generation = 0;
        self.repaint_all(surface);
        self
    }

    /// Flip a single cell and paint exactly that cell. The input layer
    /// maps pointer positions into range before calling; anything else
    /// is rejected untouched.
    pub fn toggle_cell(mut self, row: usize, col: usize, surface: &mut dyn CellSurface) -> Self {
        if !self.grid.contains(row, col) {
            return self;
        }
        let flipped = self.grid.get(row as isize, col as isize).toggled();
        self.grid.set(row, col, flipped);
        surface.draw_cell(row, col, flipped);
        self
    }

    /// Advance the cadence by one frame delta; steps a generation when
    /// the timer fires. A paused simulation ignores time entirely.
    pub fn tick(mut self, delta_seconds: f32, surface: &mut dyn CellSurface) -> Self {
        if self.timer.advance(delta_seconds) {
            self = self.step(surface);
        }
        self
    }

    /// Compute the next generation and repaint only the cells whose
    /// state changed, so visual work tracks the number of changes
    /// rather than the grid size.
    pub fn step(mut self, surface: &mut dyn CellSurface) -> Self {
        let next = rules::next_grid(&self.grid);
        for ((row, col, old), (_, _, new)) in self.grid.iter_cells().zip(next.iter_cells()) {
            if old != new {
                surface.draw_cell(row, col, new);
            }
        }
        self.grid = next;
        self.generation += 1;
        self
    }

    /// Paint every cell in its current state
    pub fn repaint_all(&self, surface: &mut dyn CellSurface) {
        for (row, col, cell) in self.grid.iter_cells() {
            surface.draw_cell(row, col, cell);
        }
    }
}
