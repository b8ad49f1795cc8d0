mod app;
mod config;
mod input;
mod keybinds;
mod markdown;
mod picker;
mod ui;

use app::App;
use config::Config;
use ratatui::crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers,
};
use ratatui::crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use directories::ProjectDirs;
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn get_config_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "datainsight", "datainsight") {
        proj_dirs.config_dir().join("config.toml")
    } else {
        PathBuf::from("config/default.toml")
    }
}

/// Logs go to a file: the terminal belongs to ratatui.
fn init_logging() {
    let Some(proj_dirs) = ProjectDirs::from("com", "datainsight", "datainsight") else {
        return;
    };
    let log_dir = proj_dirs.data_dir().to_path_buf();
    if std::fs::create_dir_all(&log_dir).is_err() {
        return;
    }
    if let Ok(file) = std::fs::File::create(log_dir.join("datainsight.log")) {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .try_init();
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    terminal::enable_raw_mode()?;
    let mut terminal = ratatui::init();
    ratatui::crossterm::execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;

    let result = run(&mut terminal);

    let _ = ratatui::crossterm::execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
    ratatui::restore();

    result
}

fn run(
    terminal: &mut ratatui::Terminal<ratatui::backend::CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config_path = get_config_path();
    let config = Config::load_or_default(&config_path);

    let rt = tokio::runtime::Runtime::new()?;
    let _guard = rt.enter();

    let mut app = App::new(config);

    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(Duration::from_millis(50))? {
            let event = event::read()?;

            if let Event::Key(key) = &event {
                if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    break;
                }
            }

            if let Ok(should_quit) = app.handle_event(event) {
                if should_quit {
                    break;
                }
            }
        }

        app.process_events();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
