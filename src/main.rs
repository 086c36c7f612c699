use clap::error::ErrorKind;
use clap::Parser;
use lychrel_search::utils::logger;
use lychrel_search::{CliConfig, SearchEngine, SearchOutcome};

fn main() {
    let config = match CliConfig::try_parse() {
        Ok(config) => config,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit();
        }
        Err(_) => {
            println!("Usage: lychrel-search <start_num> <max_iter>");
            std::process::exit(1);
        }
    };

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting lychrel-search");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let seed = match config.seed() {
        Ok(seed) => seed,
        Err(e) => {
            tracing::error!("start_num rejected: {}", e);
            println!("{}", e);
            std::process::exit(1);
        }
    };

    let max_iter = match config.iteration_bound() {
        Ok(bound) => bound,
        Err(e) => {
            tracing::error!("max_iter rejected: {}", e);
            println!("{}", e);
            std::process::exit(1);
        }
    };

    let engine = SearchEngine::new(max_iter);

    match engine.run(&seed) {
        Ok(SearchOutcome::Found { value, iterations }) => {
            tracing::info!("palindrome found after {} iterations", iterations);
            println!(
                "{} is a palindrome of {} (Found after {} iterations)",
                value, config.start_num, iterations
            );
        }
        Ok(SearchOutcome::Exhausted { iterations }) => {
            tracing::info!("iteration bound exhausted");
            println!(
                "Maximum iterations ({}) reached without finding a palindrome for {}.",
                iterations, config.start_num
            );
        }
        Err(e) => {
            println!("{}", e);
            std::process::exit(1);
        }
    }
}
