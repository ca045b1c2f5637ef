mod api;
mod app;
mod config;
mod diagnose;
mod error;
mod filter;
mod input;
mod interaction;
mod model;
mod refresh;
mod runtime;
mod status;
mod supabase;
mod tui;
mod ui;

use std::path::Path;
use std::sync::OnceLock;

use config::Config;
use error::AppError;
use runtime::AppRuntime;

static TRACING_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();
static TRACING_INIT: OnceLock<()> = OnceLock::new();

const USAGE: &str = "\
usage: matchday [command]

commands:
  (none)      open the scores and highlights viewer
  diagnose    probe the sports API and Supabase, print results, exit
  help        show this message

environment:
  MATCHDAY_API_URL           sports API base (default http://localhost:3001/api)
  SUPABASE_URL               Supabase project URL
  SUPABASE_ANON_KEY          Supabase anon key
  MATCHDAY_REFRESH_SECS      auto refresh interval in seconds
  MATCHDAY_HIGHLIGHTS_LIMIT  highlights fetched per refresh (default 25)
  MATCHDAY_LOG_DIR           log directory
  RUST_LOG                   log filter (default info)";

fn init_logging(log_dir: &Path) {
    TRACING_INIT.get_or_init(|| {
        if let Err(err) = std::fs::create_dir_all(log_dir) {
            eprintln!(
                "failed to create log directory {}: {err}",
                log_dir.display()
            );
            return;
        }

        let file_appender = tracing_appender::rolling::daily(log_dir, "matchday.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        let _ = TRACING_GUARD.set(guard);

        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(non_blocking)
            .with_ansi(false)
            .init();
    });
}

enum Command {
    Viewer,
    Diagnose,
    Help,
    Version,
}

fn parse_command<I: Iterator<Item = String>>(mut args: I) -> Command {
    match args.next().as_deref() {
        None => Command::Viewer,
        Some("diagnose") => Command::Diagnose,
        Some("--version") | Some("-V") => Command::Version,
        Some(_) => Command::Help,
    }
}

fn main() -> Result<(), AppError> {
    let command = parse_command(std::env::args().skip(1));
    if matches!(command, Command::Help) {
        println!("{USAGE}");
        return Ok(());
    }
    if matches!(command, Command::Version) {
        println!("matchday {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let cfg = Config::from_env();
    init_logging(&cfg.log_dir);

    if matches!(command, Command::Diagnose) {
        tracing::info!("running diagnostics");
        let stdout = std::io::stdout();
        if let Err(err) = diagnose::run(&cfg, &mut stdout.lock()) {
            tracing::error!(error = %err, "failed to write diagnostics");
            eprintln!("failed to write diagnostics: {err}");
        }
        return Ok(());
    }

    crate::tui::install_panic_hook();
    let mut runtime = AppRuntime::new(cfg)?;
    let result = runtime.run();
    if let Err(err) = runtime.shutdown() {
        tracing::error!(error = %err, "failed to restore terminal");
    }
    result
}
