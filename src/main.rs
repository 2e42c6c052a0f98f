// Rust Pipe Combinators - Main executable
// Author: Gabriel Demetrios Lafis

use anyhow::{Context, Result};
use clap::{Arg, Command};
use log::{info, warn};

use rust_pipe_combinators::{
    processing::{drop, filter, fold, iota, map, reverse, take},
    utils::{init_logging, parse_level, Config},
    PipelineValue,
};

fn main() -> Result<()> {
    // Parse command line arguments
    let matches = Command::new("pipe-run")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Gabriel Demetrios Lafis")
        .about("Runs a chain of pipe-style sequence transformations")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Loads settings and a pipeline definition from a JSON or YAML file")
                .takes_value(true),
        )
        .arg(
            Arg::new("log-level")
                .short('l')
                .long("log-level")
                .value_name("LEVEL")
                .help("Overrides the configured log level")
                .takes_value(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Prints the result as JSON"),
        )
        .get_matches();

    // Load configuration
    let config = match matches.get_one::<String>("config") {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("failed to load config file {}", path))?,
        None => Config::default(),
    };

    // Initialize logging
    let level = match matches.get_one::<String>("log-level") {
        Some(level) => parse_level(level),
        None => config.log_level_filter(),
    };
    if let Err(err) = init_logging(level) {
        eprintln!("Error initializing logger: {}", err);
    }

    let result = match &config.pipeline {
        Some(definition) => {
            info!("Running pipeline '{}' from config", definition.name);
            definition.run()?
        }
        None => {
            if matches.contains_id("config") {
                warn!("Config has no pipeline, running the built-in chain");
            }
            PipelineValue::Scalar(run_builtin()?)
        }
    };

    if matches.contains_id("json") {
        println!("{}", serde_json::to_string(&result)?);
    } else {
        println!("{}", result);
    }

    Ok(())
}

/// The reference chain: [1, 2, 3, 4, 5] through eight stages down to 6
fn run_builtin() -> Result<i64> {
    let v: Vec<i64> = vec![1, 2, 3, 4, 5];

    let result = v
        | filter(|e: &i64| e % 2 != 0)
        | map(|e: i64| e + 1)
        | fold(0, |acc: i64, e: i64| acc + e)
        | iota()
        | reverse()
        | drop(4)
        | take(2)
        | fold(1, |acc: i64, e: i64| acc * e);

    Ok(result?)
}
