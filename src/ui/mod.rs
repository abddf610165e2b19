mod button;

pub use button::Button;

use macroquad::prelude::{Color, WHITE, draw_rectangle, draw_text, measure_text};
use crate::application::GameState;

pub const FONT_SIZE: f32 = 16.0;
pub const BADGE_PADDING_X: f32 = 6.0;
pub const BADGE_PADDING_Y: f32 = 3.0;
/// Distance of the badges from the left / right window edge
pub const EDGE_MARGIN: f32 = 20.0;
/// Distance of the badges from the bottom window edge
pub const BOTTOM_MARGIN: f32 = 24.0;
pub const SNAPSHOT_BUTTON_WIDTH: f32 = 84.0;
pub const SNAPSHOT_LABEL: &str = "Snapshot";

/// rgba(64, 64, 64, 0.9)
pub const BADGE_BACKGROUND: Color = Color::new(0.25, 0.25, 0.25, 0.9);

/// Axis-aligned screen rectangle, edges inclusive
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Bounds {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, (px, py): (f32, f32)) -> bool {
        px >= self.x && px <= self.x + self.w && py >= self.y && py <= self.y + self.h
    }
}

/// Height of a one-line badge
pub const fn badge_height() -> f32 {
    FONT_SIZE + 2.0 * BADGE_PADDING_Y
}

/// Bottom-left badge sized around text of the given width
pub fn generation_badge(screen_height: f32, text_width: f32) -> Bounds {
    let h = badge_height();
    Bounds::new(
        EDGE_MARGIN,
        screen_height - BOTTOM_MARGIN - h,
        text_width + 2.0 * BADGE_PADDING_X,
        h,
    )
}

/// Bottom-right snapshot button
pub fn snapshot_button(screen_width: f32, screen_height: f32) -> Button {
    let h = badge_height();
    Button::new(
        Bounds::new(
            screen_width - EDGE_MARGIN - SNAPSHOT_BUTTON_WIDTH,
            screen_height - BOTTOM_MARGIN - h,
            SNAPSHOT_BUTTON_WIDTH,
            h,
        ),
        SNAPSHOT_LABEL,
    )
}

/// Text of the generation badge
pub fn generation_label(state: &GameState) -> String {
    let mut label = format!("Generation {} | {} alive", state.generation(), state.population());
    if !state.is_visible() {
        label.push_str(" (paused)");
    }
    label
}

/// Draw the generation badge and the snapshot button
pub fn draw_overlay(state: &GameState, button: &Button, screen_height: f32, mouse_pos: (f32, f32)) {
    let label = generation_label(state);
    let text_size = measure_text(&label, None, FONT_SIZE as u16, 1.0);
    let badge = generation_badge(screen_height, text_size.width);

    draw_rectangle(badge.x, badge.y, badge.w, badge.h, BADGE_BACKGROUND);
    draw_text(
        &label,
        badge.x + BADGE_PADDING_X,
        badge.y + (badge.h + text_size.height) / 2.0,
        FONT_SIZE,
        WHITE,
    );

    button.draw(mouse_pos);
}
