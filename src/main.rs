use std::fs::File;
use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use sirat::core::config::{self, SiratConfig};
use sirat::core::route::Route;
use sirat::tui;

#[derive(Parser)]
#[command(name = "sirat", about = "Read the Qur'an in your terminal")]
struct Args {
    /// Path to open: "/" for the surah list, "/surah/<n>" for a surah
    #[arg(default_value = "/")]
    path: String,

    /// Override the API base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Read config from this file instead of ~/.sirat/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger first so config loading is logged too - writes
    // to sirat.log in current directory. The level is narrowed once resolved.
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("sirat.log") {
        let _ = WriteLogger::init(LevelFilter::Trace, log_config, log_file);
    }

    let file_config = match config::load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("{e}; using defaults");
            eprintln!("sirat: {e}; using defaults");
            SiratConfig::default()
        }
    };
    let resolved = config::resolve(&file_config, args.base_url.as_deref());
    log::set_max_level(parse_log_level(&resolved.log_level));

    log::info!(
        "Sirat starting up (path={}, base_url={})",
        args.path,
        resolved.base_url
    );

    let start = Route::parse(&args.path);
    tui::run(resolved, start)
}

fn parse_log_level(level: &str) -> LevelFilter {
    LevelFilter::from_str(level).unwrap_or_else(|_| {
        log::warn!("Unknown log level {level:?}, using debug");
        LevelFilter::Debug
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("info"), LevelFilter::Info);
        assert_eq!(parse_log_level("OFF"), LevelFilter::Off);
        assert_eq!(parse_log_level("loud"), LevelFilter::Debug);
    }
}
