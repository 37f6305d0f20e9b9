mod button;
mod panel;

pub use button::Button;
pub use panel::{ConfigError, ControlKind, ControlPanel, Label, PanelBuilder};

use macroquad::prelude::{screen_height, screen_width};

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;

/// Edge length of one cell in pixels, shared by the renderer and the
/// pointer-to-cell mapping
pub const CELL_SIZE: f32 = 10.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the grid area
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the grid area
pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Derive the cell-grid dimensions from the surface pixel size: full
/// cells only, remainders floored away. A surface too small for a
/// single cell is a wiring mistake, reported before the simulator
/// starts.
pub fn derive_grid_size(
    width_px: f32,
    height_px: f32,
    cell_size: f32,
) -> Result<(usize, usize), ConfigError> {
    let rows = (height_px / cell_size) as usize;
    let cols = (width_px / cell_size) as usize;
    if rows == 0 || cols == 0 {
        return Err(ConfigError::EmptySurface {
            width_px,
            height_px,
            cell_size,
        });
    }
    Ok((rows, cols))
}

/// Build the standard control panel layout: the five control buttons
/// stacked at the top of the panel, the interval readout underneath.
pub fn default_panel() -> Result<ControlPanel, ConfigError> {
    let px = panel_x() + 10.0;
    let width = PANEL_WIDTH - 20.0;
    ControlPanel::builder()
        .control(ControlKind::Toggle, Button::new(px, 20.0, width, BUTTON_HEIGHT, "Run"))
        .control(ControlKind::RandomSeed, Button::new(px, 70.0, width, BUTTON_HEIGHT, "Random"))
        .control(ControlKind::Clear, Button::new(px, 120.0, width, BUTTON_HEIGHT, "Clear"))
        .control(ControlKind::SpeedUp, Button::new(px, 170.0, width, BUTTON_HEIGHT, "Faster"))
        .control(ControlKind::SlowDown, Button::new(px, 220.0, width, BUTTON_HEIGHT, "Slower"))
        .interval_display(Label::new(px, 290.0, 16.0))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_size_floors_partial_cells() {
        assert_eq!(derive_grid_size(820.0, 800.0, 10.0), Ok((80, 82)));
        assert_eq!(derive_grid_size(109.0, 95.0, 10.0), Ok((9, 10)));
    }

    #[test]
    fn test_surface_smaller_than_one_cell_is_a_config_error() {
        let err = derive_grid_size(9.0, 400.0, 10.0).unwrap_err();
        assert!(matches!(err, ConfigError::EmptySurface { .. }));
        assert!(derive_grid_size(400.0, 5.0, 10.0).is_err());
    }
}
