use std::{
    fs::File,
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use tumble_logging::{log_error, log_info, log_verbose, log_warning, set_logger, LogCategory, LogLevel, Logger};

mod error;
pub use error::*;

mod config;
use config::{LoggingSettings, Settings};

mod app;
use app::AppState;

pub const LOG_CAT : LogCategory = LogCategory::new("Main");

static LOGGER : Logger = Logger::new();

/// Replay a recorded camera navigation session and log the matrices of every frame
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// The TOML session file to replay
    #[arg(default_value = "tumble.toml")]
    config: PathBuf,
    /// Override the log level from the session file
    #[arg(short, long)]
    level: Option<LogLevel>,
    /// Print only the projection * view matrix of each frame to stdout, the log still goes to the log file
    #[arg(long)]
    frames_only: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    set_logger(&LOGGER);

    let res = run(&args);
    if let Err(err) = &res {
        log_error!(LOG_CAT, main, "{}", err);
    }
    LOGGER.flush();

    match res {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

fn run(args: &Args) -> Result<()> {
    let settings = Settings::load_file(&args.config)?;
    setup_logging(&settings.logging, args)?;

    log_info!(LOG_CAT, "replaying '{}' ({} events)", args.config.display(), settings.events.len());

    let mut app = AppState::new(&settings);
    for event in &settings.events {
        if let Some(frame) = app.handle_event(*event) {
            if args.frames_only {
                println!("{}", frame.view_projection);
            }
        }
    }

    let camera = app.camera();
    log_info!(LOG_CAT, "replayed {} frames, camera at {} looking at {}", app.frames(), camera.position(), camera.target());
    log_verbose!(LOG_CAT, "final state: {:?} mode, rolling: {}, viewports: {}, projection: {}",
                 app.mode(), app.is_rolling(), app.shows_viewports(), app.projection_matrix());
    Ok(())
}

fn setup_logging(settings: &LoggingSettings, args: &Args) -> Result<()> {
    LOGGER.set_max_level(args.level.unwrap_or(settings.level));
    LOGGER.set_always_flush(settings.always_flush);
    LOGGER.set_log_to_console(settings.console && !args.frames_only);

    if let Some(path) = &settings.file {
        let file = File::create(path).map_err(|source| Error::LogFile { path: path.clone(), source })?;
        if LOGGER.add_writer(Box::new(file)).is_err() {
            log_warning!(LOG_CAT, "no free log writer slot, '{}' stays empty", path.display());
        }
    }
    Ok(())
}
