use macroquad::prelude::*;
use crate::ui::Button;

/// User intents the main loop acts on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    TogglePause,
    Snapshot,
    Reseed,
    /// Clear the grid and seed the next library pattern
    NextPattern,
    TogglePalette,
    ToggleOverlay,
}

/// Key bindings, checked in order every frame
pub const KEY_BINDINGS: [(KeyCode, Command); 7] = [
    (KeyCode::Space, Command::TogglePause),
    (KeyCode::P, Command::TogglePause),
    (KeyCode::S, Command::Snapshot),
    (KeyCode::R, Command::Reseed),
    (KeyCode::N, Command::NextPattern),
    (KeyCode::C, Command::TogglePalette),
    (KeyCode::O, Command::ToggleOverlay),
];

/// Collect this frame's commands from the keyboard and the snapshot button
pub fn poll_commands(snapshot_button: Option<&Button>, mouse_pos: (f32, f32)) -> Vec<Command> {
    let mut commands: Vec<Command> = KEY_BINDINGS
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .map(|&(_, command)| command)
        .collect();

    if snapshot_button.is_some_and(|button| button.is_clicked(mouse_pos)) {
        commands.push(Command::Snapshot);
    }
    // Space and P share a command; one press of both must not cancel out
    let mut unique = Vec::with_capacity(commands.len());
    for command in commands {
        if !unique.contains(&command) {
            unique.push(command);
        }
    }
    unique
}

/// Pause state kept by the shell; combined with window state into visibility
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    pub paused: bool,
    pub minimized: bool,
}

impl ViewState {
    /// Whether the simulation should currently advance
    pub const fn is_visible(&self) -> bool {
        !self.paused && !self.minimized
    }

    pub fn toggle_pause(mut self) -> Self {
        self.paused = !self.paused;
        self
    }
}
