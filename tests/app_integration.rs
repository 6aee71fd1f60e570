use std::fs;
use std::time::Duration;

use rsvp_sync::app::{App, AppEvent, AppMode, DisplayItem};
use rsvp_sync::engine::{Config, ManualScheduler};
use rsvp_sync::ui::{parse_command, command_to_app_event};

fn run_command(app: &mut App<ManualScheduler>, input: &str) {
    app.handle_event(command_to_app_event(parse_command(input)));
}

#[test]
fn load_sync_and_play_from_commands() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("moby.txt");
    fs::write(&path, "Call me Ishmael.\nSome years ago, never mind how long").unwrap();

    let config = Config::from_toml_str("[playback]\ndefault_wpm = 600\n").unwrap();
    let mut app = App::new(&config, ManualScheduler::new());
    assert_eq!(app.mode(), AppMode::Idle);

    run_command(&mut app, &format!("@{}", path.display()));
    assert_eq!(app.mode(), AppMode::Paused);

    run_command(&mut app, "/years ago");
    assert_eq!(app.status(), Some("Synced!"));

    app.handle_event(AppEvent::TogglePlayback);
    assert_eq!(app.mode(), AppMode::Reading);
    assert_eq!(
        app.render_state().current,
        DisplayItem::Word(rsvp_sync::reading::Word::new("ago,"))
    );
    assert_eq!(app.time_until_next_tick(), Some(Duration::from_millis(200)));

    run_command(&mut app, ":wpm 9000");
    assert_eq!(app.wpm(), 1200);

    run_command(&mut app, ":q");
    assert_eq!(app.mode(), AppMode::Quit);
}

#[test]
fn unknown_command_reports_input() {
    let mut app = App::new(&Config::default(), ManualScheduler::new());
    run_command(&mut app, ":fly");
    assert_eq!(app.status(), Some("Unknown command: :fly"));
}
