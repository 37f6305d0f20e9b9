use std::sync::OnceLock;

use clap::Parser;
use macroquad::prelude::*;

use life_canvas::Simulation;
use life_canvas::input;
use life_canvas::rendering::{self, CanvasRenderer};
use life_canvas::ui::{self, CELL_SIZE};

/// Conway's Game of Life on an interactive canvas grid
#[derive(Clone, Debug, Parser)]
#[command(author, version, about)]
struct SimArgs {
    /// Window width in pixels (grid area plus control panel)
    #[arg(long, default_value_t = 1000)]
    width: u32,

    /// Window height in pixels
    #[arg(long, default_value_t = 800)]
    height: u32,

    /// Seed for the random-fill generator; random when omitted
    #[arg(long)]
    seed: Option<u64>,
}

static ARGS: OnceLock<SimArgs> = OnceLock::new();

fn window_conf() -> Conf {
    let args = ARGS.get_or_init(SimArgs::parse);
    Conf {
        window_title: "Game of Life".to_owned(),
        window_width: args.width as i32,
        window_height: args.height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let args = ARGS.get_or_init(SimArgs::parse).clone();

    // A wiring failure aborts before any state exists.
    let (rows, cols) =
        match ui::derive_grid_size(ui::grid_area_width(), ui::grid_area_height(), CELL_SIZE) {
            Ok(size) => size,
            Err(e) => {
                error!("configuration error: {}", e);
                return;
            }
        };
    let panel = match ui::default_panel() {
        Ok(panel) => panel,
        Err(e) => {
            error!("configuration error: {}", e);
            return;
        }
    };

    let mut renderer = CanvasRenderer::new(rows, cols);
    let mut sim = match args.seed {
        Some(seed) => Simulation::seeded(rows, cols, seed),
        None => Simulation::new(rows, cols),
    };
    info!(
        "grid {}x{} cells, step interval {} ms",
        rows,
        cols,
        sim.interval_ms()
    );

    sim.repaint_all(&mut renderer);

    loop {
        let mouse_pos = mouse_position();

        sim = input::process_panel_clicks(sim, &panel, &mut renderer, mouse_pos);
        sim = input::handle_grid_click(sim, &mut renderer, mouse_pos);
        sim = input::process_keyboard_input(sim, &mut renderer);
        sim = sim.tick(get_frame_time(), &mut renderer);

        clear_background(BLACK);
        renderer.present();
        rendering::draw_controls(&sim, &panel, mouse_pos);

        next_frame().await;
    }
}
