mod game_state;
mod scheduler;
mod settings;

pub use game_state::{GameState, Viewport};
pub use scheduler::{Clock, ManualClock, Scheduler, SystemClock, TICK_INTERVAL};
pub use settings::{DEFAULT_SETTINGS_FILE, DEFAULT_WINDOW_TITLE, SETTINGS_ENV, Settings, SettingsError};
