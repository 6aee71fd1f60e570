use std::env;

use log::{info, warn};
use rsvp_sync::app::{App, AppEvent};
use rsvp_sync::engine::{Config, WallClockScheduler};
use rsvp_sync::logging;
use rsvp_sync::ui::{Theme, TuiManager};

const CONFIG_ENV: &str = "RSVP_SYNC_CONFIG";

fn load_config() -> Config {
    let Some(path) = env::var_os(CONFIG_ENV) else {
        return Config::default();
    };
    match Config::load(&path) {
        Ok(config) => {
            info!("loaded config from {}", path.to_string_lossy());
            config
        }
        Err(err) => {
            warn!("{}, falling back to defaults", err);
            Config::default()
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_file = logging::log_file_path(env::var_os(logging::LOG_FILE_ENV));
    if let Err(err) = logging::init(&log_file) {
        eprintln!("logging disabled: {}: {}", log_file.display(), err);
    }

    let config = load_config();
    let mut app = App::new(&config, WallClockScheduler::new());

    if let Some(path) = env::args().nth(1) {
        app.handle_event(AppEvent::LoadFile(path));
    }

    let mut tui = TuiManager::new(Theme::from_config(&config.theme))?;
    tui.run_event_loop(&mut app)?;

    Ok(())
}
