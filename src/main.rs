use anyhow::{Context, Result};
use macroquad::prelude::*;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use life_canvas::{
    GameState, Settings, presets,
    application::{Clock, Scheduler, SystemClock, TICK_INTERVAL},
    input::{self, Command, ViewState},
    rendering::Presenter,
    ui,
};

// Runs before main, so the subscriber is not installed yet
fn window_conf() -> Conf {
    let settings = Settings::load_or_default(&Settings::path_from_env());
    Conf {
        window_title: settings.window_title,
        window_width: 1280,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

/// Current window size in whole pixels
fn viewport_size() -> (u32, u32) {
    (screen_width().max(0.0) as u32, screen_height().max(0.0) as u32)
}

/// Write the current surface to the configured path. Ok(false) when there
/// is nothing to capture yet.
fn save_snapshot(state: &GameState, settings: &Settings) -> Result<bool> {
    let Some(snapshot) = state.export_image().context("encoding snapshot")? else {
        return Ok(false);
    };
    let path = &settings.snapshot_path;
    snapshot
        .save(path)
        .with_context(|| format!("writing snapshot to {}", path.display()))?;
    info!(
        path = %path.display(),
        width = snapshot.width,
        height = snapshot.height,
        generation = state.generation(),
        "snapshot saved"
    );
    Ok(true)
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let mut settings = Settings::load_or_default(&Settings::path_from_env());
    let mut state = GameState::new(settings.seed).with_palette(settings.palette);
    let mut presenter = Presenter::new();
    let mut view = ViewState::default();
    let patterns = presets::all_patterns();
    let mut next_pattern = 0;

    let clock = SystemClock::new();
    let mut scheduler = Scheduler::new(TICK_INTERVAL, clock.now());
    info!(interval_ms = TICK_INTERVAL.as_millis() as u64, "life canvas starting");

    loop {
        let (width, height) = viewport_size();
        // A minimized window reports 0x0; keep the grid until it comes back
        view.minimized = width == 0 || height == 0;
        if !view.minimized {
            state.resize(width, height);
        }

        let mouse_pos = mouse_position();
        let button = settings
            .show_overlay
            .then(|| ui::snapshot_button(screen_width(), screen_height()));

        for command in input::poll_commands(button.as_ref(), mouse_pos) {
            match command {
                Command::TogglePause => view = view.toggle_pause(),
                Command::Snapshot => match save_snapshot(&state, &settings) {
                    Ok(true) => {}
                    Ok(false) => warn!("no surface yet, snapshot skipped"),
                    Err(err) => error!("snapshot failed: {err:#}"),
                },
                Command::Reseed => state.reseed(),
                Command::NextPattern => {
                    state.reseed_centered(&patterns[next_pattern]);
                    next_pattern = (next_pattern + 1) % patterns.len();
                }
                Command::TogglePalette => state.set_palette(state.palette().toggled()),
                Command::ToggleOverlay => settings.show_overlay = !settings.show_overlay,
            }
        }
        state.set_visible(view.is_visible());

        if scheduler.poll(clock.now()) {
            state.tick();
        }

        clear_background(BLACK);
        if let Some(raster) = state.raster() {
            presenter.present(raster, state.revision());
        }
        if let Some(button) = &button {
            ui::draw_overlay(&state, button, screen_height(), mouse_pos);
        }

        next_frame().await;
    }
}
