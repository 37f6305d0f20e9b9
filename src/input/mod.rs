use macroquad::prelude::*;

use crate::application::{CellSurface, Simulation};
use crate::ui::{CELL_SIZE, ControlKind, ControlPanel, grid_area_width};

/// How far each speed control shifts the step interval
pub const SPEED_STEP_MS: i64 = 100;

/// Map a surface-local pixel position to the cell underneath it
pub fn cell_at(pos: (f32, f32)) -> (usize, usize) {
    let col = (pos.0 / CELL_SIZE) as usize;
    let row = (pos.1 / CELL_SIZE) as usize;
    (row, col)
}

/// Toggle the cell under a click on the grid area. Clicks on the panel
/// or in the partial-cell margin past the last full column/row are
/// ignored, so `toggle_cell` only ever sees in-range coordinates.
pub fn handle_grid_click(
    sim: Simulation,
    surface: &mut dyn CellSurface,
    mouse_pos: (f32, f32),
) -> Simulation {
    if !is_mouse_button_pressed(MouseButton::Left) || mouse_pos.0 >= grid_area_width() {
        return sim;
    }

    let (row, col) = cell_at(mouse_pos);
    if !sim.grid.contains(row, col) {
        return sim;
    }

    sim.toggle_cell(row, col, surface)
}

/// Dispatch panel button clicks to the matching simulation operation
pub fn process_panel_clicks(
    sim: Simulation,
    panel: &ControlPanel,
    surface: &mut dyn CellSurface,
    mouse_pos: (f32, f32),
) -> Simulation {
    match panel.clicked(mouse_pos) {
        Some(ControlKind::Toggle) => sim.toggle_running(),
        Some(ControlKind::RandomSeed) => sim.reseed(surface),
        Some(ControlKind::Clear) => sim.clear(surface),
        Some(ControlKind::SpeedUp) => sim.adjust_interval(-SPEED_STEP_MS),
        Some(ControlKind::SlowDown) => sim.adjust_interval(SPEED_STEP_MS),
        None => sim,
    }
}

/// Keyboard shortcuts mirroring the panel controls
pub fn process_keyboard_input(sim: Simulation, surface: &mut dyn CellSurface) -> Simulation {
    let sim = if is_key_pressed(KeyCode::Space) { sim.toggle_running() } else { sim };
    let sim = if is_key_pressed(KeyCode::C) { sim.clear(surface) } else { sim };
    let sim = if is_key_pressed(KeyCode::R) { sim.reseed(surface) } else { sim };
    let sim = if is_key_pressed(KeyCode::Up) { sim.adjust_interval(-SPEED_STEP_MS) } else { sim };
    if is_key_pressed(KeyCode::Down) { sim.adjust_interval(SPEED_STEP_MS) } else { sim }
}
