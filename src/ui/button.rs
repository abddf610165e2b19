use macroquad::prelude::*;
use super::{BADGE_BACKGROUND, FONT_SIZE, Bounds};

/// Clickable overlay badge with hover highlight
#[derive(Clone, Debug)]
pub struct Button {
    rect: Bounds,
    text: String,
}

impl Button {
    pub fn new(rect: Bounds, text: impl Into<String>) -> Self {
        Self { rect, text: text.into() }
    }

    pub const fn rect(&self) -> Bounds {
        self.rect
    }

    /// Check if mouse is hovering over button
    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        self.rect.contains(mouse_pos)
    }

    /// Draw button with hover effect
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let background = if self.is_hovered(mouse_pos) {
            Color::from_rgba(96, 96, 96, 240)
        } else {
            BADGE_BACKGROUND
        };
        let Bounds { x, y, w, h } = self.rect;
        draw_rectangle(x, y, w, h, background);

        let text_size = measure_text(&self.text, None, FONT_SIZE as u16, 1.0);
        draw_text(
            &self.text,
            x + (w - text_size.width) / 2.0,
            y + (h + text_size.height) / 2.0,
            FONT_SIZE,
            WHITE,
        );
    }

    /// Check if button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_includes_edges() {
        let button = Button::new(Bounds::new(10.0, 20.0, 30.0, 15.0), "Snapshot");
        assert!(button.is_hovered((10.0, 20.0)));
        assert!(button.is_hovered((40.0, 35.0)));
        assert!(!button.is_hovered((40.1, 30.0)));
        assert!(!button.is_hovered((25.0, 19.9)));
    }
}
