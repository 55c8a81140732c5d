use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use inline_markup_config::Config;
use inline_markup_engine::Document;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    env,
    fs::{File, OpenOptions},
    io::{Stdout, stdout},
    path::{Path, PathBuf},
    process,
};

mod app;
mod ui;

use app::App;

/// The terminal owns stdout/stderr, so logs only go to a configured file.
fn init_logging(log_file: Option<&Path>) {
    let Some(path) = log_file else {
        return;
    };
    match open_log_file(path) {
        Ok(file) => {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
                .target(env_logger::Target::Pipe(Box::new(file)))
                .init();
        }
        Err(e) => eprintln!("Warning: {e:#}"),
    }
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("cannot create log directory '{}'", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file '{}'", path.display()))
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let config = match Config::load() {
        Ok(Some(config)) => config,
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    init_logging(config.log_file.as_deref());
    log::info!("inline-markup starting up");
    log::info!("Config path: {}", config_path.display());

    // Determine file path from CLI args or config file
    let path = if args.len() == 2 {
        PathBuf::from(&args[1])
    } else if args.len() == 1 {
        match config.default_file.clone() {
            Some(path) => path,
            None => {
                eprintln!("Error: No file provided and no default_file configured");
                eprintln!("Usage: {} <file>", args[0]);
                eprintln!("Or set default_file in {}", config_path.display());
                process::exit(1);
            }
        }
    } else {
        eprintln!("Usage: {} [file]", args[0]);
        process::exit(1);
    };

    // A missing file opens as an empty buffer and is created on save
    let bytes = if path.exists() {
        std::fs::read(&path).with_context(|| format!("Failed to read {}", path.display()))?
    } else {
        Vec::new()
    };
    let document = Document::from_bytes(&bytes)
        .with_context(|| format!("{} is not valid UTF-8", path.display()))?;

    let policy = config.toggle;
    log::info!("Editing {} with {policy:?}", path.display());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(path, document, policy);

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        log::error!("{err:?}");
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| ui::ui(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }
    }
    Ok(())
}
