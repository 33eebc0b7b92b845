use clap::Parser;
use easel::core::config::{self, ConfigNote, EaselConfig, LoadedConfig, ResolvedConfig};
use log::Level;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::{self, File};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "easel", about = "Terminal inventory manager for paintings")]
struct Args {
    /// Product data file (CSV)
    #[arg(short, long)]
    file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let loaded = config::load_config().unwrap_or_else(|e| {
        eprintln!("easel: {e}; using default settings");
        LoadedConfig {
            config: EaselConfig::default(),
            notes: vec![ConfigNote {
                level: Level::Warn,
                message: format!("{e}; using default settings"),
            }],
        }
    });
    let resolved = config::resolve(&loaded.config, args.file.as_deref());

    init_logging(&resolved);
    // Config was read before the logger existed
    for note in loaded.notes.iter().chain(&resolved.notes) {
        log::log!(note.level, "{}", note.message);
    }
    log::info!(
        "Easel starting up with data file {}",
        resolved.data_file.display()
    );

    match easel::tui::run(&resolved) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Fatal: {e}");
            eprintln!("easel: {e}");
            ExitCode::FAILURE
        }
    }
}

/// File logger only: the terminal belongs to the UI.
fn init_logging(config: &ResolvedConfig) {
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Some(parent) = config.log_file.parent() {
        let _ = fs::create_dir_all(parent);
    }
    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }
}
