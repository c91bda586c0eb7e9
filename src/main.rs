//! envnorm: evaluate a two-segment envelope at a chosen time and watch the
//! normalized readout follow a playback clock.

use std::path::PathBuf;
use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use clap::Parser;
use tracing::Level;

use envnorm::config::{self, AppConfig};
use envnorm::logging::{self, ActivityLog};
use envnorm::tui::App;

/// Terminal envelope segment normalizer
#[derive(Parser)]
#[command(name = "envnorm")]
#[command(about = "Normalize attack/decay envelope segments in the terminal")]
#[command(version)]
struct Cli {
    /// Config file (defaults to ~/.envnorm/config.yaml)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let path = cli.config.unwrap_or_else(config::default_config_path);
    let config = match AppConfig::load(&path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("envnorm: {}: {e}", path.display());
            process::exit(1);
        }
    };

    let activity = ActivityLog::default();
    let level = config.level().unwrap_or(Level::INFO);
    if let Err(e) = logging::install(&activity, level) {
        eprintln!("envnorm: logging disabled: {e}");
    }

    let interrupt = Arc::new(AtomicBool::new(false));
    {
        let flag = interrupt.clone();
        if let Err(e) = ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst)) {
            eprintln!("envnorm: no interrupt handler: {e}");
        }
    }

    let mut app = App::new(&config, activity).with_interrupt(interrupt);

    let mut terminal = match ratatui::try_init() {
        Ok(terminal) => terminal,
        Err(e) => {
            eprintln!("envnorm: cannot open terminal: {e}");
            process::exit(1);
        }
    };
    let result = app.run(&mut terminal);
    ratatui::restore();

    if let Err(e) = result {
        eprintln!("envnorm: {e}");
        process::exit(1);
    }
}
