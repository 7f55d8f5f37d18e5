//! Print evenly spread ranks.
//!
//! Usage: ranked [COUNT] [CONFIG]

use std::process::ExitCode;

use tracing::error;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ranked::RankConfig;
use ranked::Ranker;

const DEFAULT_COUNT: usize = 7;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let count = match args.get(1) {
        Some(arg) => match arg.parse::<usize>() {
            Ok(count) => count,
            Err(err) => {
                error!("invalid count {:?}: {}", arg, err);
                eprintln!("Usage: {} [COUNT] [CONFIG]", args[0]);
                return ExitCode::FAILURE;
            }
        },
        None => DEFAULT_COUNT,
    };

    let config = match args.get(2) {
        Some(path) => match RankConfig::load(path) {
            Ok(config) => config,
            Err(err) => {
                error!(path = path.as_str(), "{}", err);
                return ExitCode::FAILURE;
            }
        },
        None => RankConfig::default(),
    };

    let engine = match config.build() {
        Ok(engine) => engine,
        Err(err) => {
            error!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    info!(count, limit = engine.limit(), "generating ranks");
    for rank in engine.ranks(count) {
        println!("{}", rank);
    }
    return ExitCode::SUCCESS;
}
