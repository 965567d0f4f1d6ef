use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use grovelib::Scenario;

#[derive(ValueEnum, Debug, PartialEq, Eq, Clone, Copy)]
enum Mode {
    Part1,
    Part2,
}

impl Mode {
    fn label(&self) -> &'static str {
        match self {
            Mode::Part1 => "Part one",
            Mode::Part2 => "Part two",
        }
    }

    fn scenario(&self) -> Scenario {
        match self {
            Mode::Part1 => Scenario::PART_ONE,
            Mode::Part2 => Scenario::PART_TWO,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[clap(short, long)]
    verbose: bool,
    /// Run only this part; both run when omitted
    #[clap(short, long, value_enum)]
    mode: Option<Mode>,
    /// File with one integer per line; stdin when omitted
    input: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::builder()
        .format_module_path(false)
        .format_timestamp_millis()
        .filter_level(log_level)
        .init();
    let input = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("unable to read {}", path.display()))?,
        None => std::io::read_to_string(std::io::stdin()).context("unable to read stdin")?,
    };
    let numbers = grovelib::parse_numbers(&input)?;
    log::debug!("read {} numbers", numbers.len());
    let modes = match args.mode {
        Some(mode) => vec![mode],
        None => vec![Mode::Part1, Mode::Part2],
    };
    for mode in modes {
        let start = std::time::Instant::now();
        let sum = grovelib::decrypt(&numbers, mode.scenario())?;
        log::debug!("{:?} finished in {:?}", mode, start.elapsed());
        println!("{}: {}", mode.label(), sum);
    }
    Ok(())
}
