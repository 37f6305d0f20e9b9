use macroquad::prelude::*;
use thiserror::Error;

use super::Button;

/// The controls a simulator must be wired to. The panel refuses to
/// build while any of them is missing.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ControlKind {
    Toggle,
    RandomSeed,
    Clear,
    SpeedUp,
    SlowDown,
}

impl ControlKind {
    pub const ALL: [ControlKind; 5] = [
        ControlKind::Toggle,
        ControlKind::RandomSeed,
        ControlKind::Clear,
        ControlKind::SpeedUp,
        ControlKind::SlowDown,
    ];
}

/// Construction-time wiring failures. Any of these is fatal: the
/// simulator never starts partially wired.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("control panel is missing the {0:?} control")]
    MissingControl(ControlKind),
    #[error("control panel has no interval display")]
    MissingIntervalDisplay,
    #[error(
        "surface of {width_px}x{height_px}px holds no whole {cell_size}px cell"
    )]
    EmptySurface {
        width_px: f32,
        height_px: f32,
        cell_size: f32,
    },
}

/// Text readout slot in the panel; shows the current step interval
#[derive(Clone, Copy)]
pub struct Label {
    x: f32,
    y: f32,
    font_size: f32,
}

impl Label {
    pub const fn new(x: f32, y: f32, font_size: f32) -> Self {
        Self { x, y, font_size }
    }

    pub fn draw(&self, text: &str) {
        draw_text(text, self.x, self.y, self.font_size, WHITE);
    }
}

/// The wired-up control surface: one button per `ControlKind` plus the
/// interval readout. Built through `ControlPanel::builder()`, which
/// validates completeness.
pub struct ControlPanel {
    buttons: Vec<(ControlKind, Button)>,
    interval_display: Label,
}

impl ControlPanel {
    pub fn builder() -> PanelBuilder {
        PanelBuilder::default()
    }

    /// The control under the cursor if it was clicked this frame
    pub fn clicked(&self, mouse_pos: (f32, f32)) -> Option<ControlKind> {
        self.buttons
            .iter()
            .find(|(_, button)| button.is_clicked(mouse_pos))
            .map(|(kind, _)| *kind)
    }

    /// Draw every control. The toggle button's label tracks the run
    /// state, the readout shows the current interval.
    pub fn draw(&self, running: bool, interval_ms: u64, mouse_pos: (f32, f32)) {
        for (kind, button) in &self.buttons {
            match kind {
                ControlKind::Toggle => {
                    button.draw_labeled(if running { "Pause" } else { "Run" }, mouse_pos)
                }
                _ => button.draw(mouse_pos),
            }
        }
        self.interval_display.draw(&format!("{interval_ms} ms"));
    }
}

#[derive(Default)]
pub struct PanelBuilder {
    buttons: Vec<(ControlKind, Button)>,
    interval_display: Option<Label>,
}

impl PanelBuilder {
    pub fn control(mut self, kind: ControlKind, button: Button) -> Self {
        self.buttons.push((kind, button));
        self
    }

    pub fn interval_display(mut self, label: Label) -> Self {
        self.interval_display = Some(label);
        self
    }

    /// Validate the wiring: every control kind present, readout present
    pub fn build(self) -> Result<ControlPanel, ConfigError> {
        for kind in ControlKind::ALL {
            if !self.buttons.iter().any(|(wired, _)| *wired == kind) {
                return Err(ConfigError::MissingControl(kind));
            }
        }
        let interval_display = self
            .interval_display
            .ok_or(ConfigError::MissingIntervalDisplay)?;
        Ok(ControlPanel {
            buttons: self.buttons,
            interval_display,
        })
    }
}
