use macroquad::prelude::*;

use crate::application::{CellSurface, Simulation};
use crate::domain::Cell;
use crate::ui::{CELL_SIZE, ControlPanel, PANEL_WIDTH, panel_x};

const ALIVE_COLOR: Color = Color::new(0.0, 1.0, 0.59, 1.0);
const DEAD_COLOR: Color = Color::new(0.06, 0.06, 0.06, 1.0);

/// CanvasRenderer keeps the cell canvas in an offscreen render target
/// that persists between frames. Cells are painted into it one at a
/// time as the simulation reports changes; the frame loop blits the
/// whole texture with `present`. This is what makes incremental
/// repaint observable: an untouched cell is never redrawn.
pub struct CanvasRenderer {
    target: RenderTarget,
    camera: Camera2D,
    width_px: f32,
    height_px: f32,
}

impl CanvasRenderer {
    pub fn new(rows: usize, cols: usize) -> Self {
        let width_px = cols as f32 * CELL_SIZE;
        let height_px = rows as f32 * CELL_SIZE;

        let target = render_target(width_px as u32, height_px as u32);
        target.texture.set_filter(FilterMode::Nearest);

        let mut camera = Camera2D::from_display_rect(Rect::new(0.0, 0.0, width_px, height_px));
        camera.render_target = Some(target.clone());

        Self {
            target,
            camera,
            width_px,
            height_px,
        }
    }

    /// Blit the accumulated canvas into the grid area
    pub fn present(&self) {
        draw_texture_ex(
            &self.target.texture,
            0.0,
            0.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(self.width_px, self.height_px)),
                flip_y: true,
                ..Default::default()
            },
        );
    }
}

impl CellSurface for CanvasRenderer {
    fn draw_cell(&mut self, row: usize, col: usize, cell: Cell) {
        let color = if cell.is_alive() { ALIVE_COLOR } else { DEAD_COLOR };

        set_camera(&self.camera);
        draw_rectangle(
            col as f32 * CELL_SIZE,
            row as f32 * CELL_SIZE,
            CELL_SIZE,
            CELL_SIZE,
            color,
        );
        set_default_camera();
    }
}

/// Draw the control panel: buttons, interval readout, and session info
pub fn draw_controls(sim: &Simulation, panel: &ControlPanel, mouse_pos: (f32, f32)) {
    let px = panel_x();

    draw_rectangle(px, 0.0, PANEL_WIDTH, screen_height(), Color::from_rgba(30, 30, 30, 255));
    panel.draw(sim.is_running(), sim.interval_ms(), mouse_pos);

    let tx = px + 10.0;
    let controls = [
        ("Controls:", tx, 340.0, 14.0, WHITE),
        ("Click: Toggle cell", tx, 355.0, 12.0, GRAY),
        ("Space: Play/Pause", tx, 368.0, 12.0, GRAY),
        ("R: Random  C: Clear", tx, 381.0, 12.0, GRAY),
        ("Up/Down: Speed", tx, 394.0, 12.0, GRAY),
    ];
    controls.iter().for_each(|(text, x, y, size, color)| {
        draw_text(text, *x, *y, *size, *color);
    });

    let (rows, cols) = sim.grid.dimensions();
    draw_text(
        &format!("Grid: {rows}x{cols}"),
        tx,
        430.0,
        12.0,
        Color::from_rgba(150, 150, 150, 255),
    );

    let labels = [
        ("Generation:", tx, 470.0, 16.0, WHITE),
        (
            &format!("{}", sim.generation()),
            tx,
            490.0,
            20.0,
            Color::from_rgba(0, 255, 150, 255),
        ),
        ("Status:", tx, 525.0, 16.0, WHITE),
        (
            if sim.is_running() { "Running" } else { "Paused" },
            tx,
            545.0,
            16.0,
            if sim.is_running() {
                Color::from_rgba(0, 255, 0, 255)
            } else {
                Color::from_rgba(255, 165, 0, 255)
            },
        ),
    ];
    labels.iter().for_each(|(text, x, y, size, color)| {
        draw_text(text, *x, *y, *size, *color);
    });
}
