#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

mod config;
mod tui;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Command, arg};
use config::ConsoleConfig;
use cpu_chess::ChessService;
use log::info;


const USAGE: &str = "\
Commands:
  00 W | 00 B   new game, playing White | Black
  01            show the board
  02 <move>     make a move, e.g. 02 WPe2-e4 or 02 WPa7-a8yQ
  03            let the computer move
  04            resign";

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .target(env_logger::Target::Stderr)
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let matches = Command::new("CPU chess")
        .version(clap::crate_version!())
        .about("Play chess against a simple computer opponent over a text command channel")
        .arg(
            arg!(-c --config <config_file> "Path to the configuration file: yaml-serialized ConsoleConfig.")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            arg!(--seed <seed> "Seed for the computer's random choices; overrides the config.")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(arg!(--"no-color" "Render the board without colors."))
        .get_matches();

    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => ConsoleConfig::read_file(path)?,
        None => ConsoleConfig::default(),
    };
    if let Some(&seed) = matches.get_one::<u64>("seed") {
        config.rng_seed = Some(seed);
    }
    if matches.get_flag("no-color") {
        config.colored = false;
    }
    run(&config)
}

fn run(config: &ConsoleConfig) -> anyhow::Result<()> {
    info!("Starting with {:?}", config);
    let service = ChessService::new(config.rng_seed);
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", USAGE)?;
    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        service.write(&format!("{}\n", line));
        if let Some(response) = service.read() {
            write!(stdout, "{}", tui::render_response(&response, config.colored))?;
            stdout.flush()?;
        }
    }
    Ok(())
}
