use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use rps_tally::config::Config;
use rps_tally::error::InputError;
use rps_tally::output::Report;
use rps_tally::scoring::RoundScorer;
use rps_tally::strategy::GuideColumn;

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_IO: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a rock-paper-scissors strategy guide
    Strategy {
        /// Path to the strategy guide
        input: PathBuf,
    },
    /// Find the largest calorie totals in a blank-line separated listing
    Calories {
        /// Path to the calorie listing
        input: PathBuf,
    },
}

impl Commands {
    fn input(&self) -> &Path {
        match self {
            Commands::Strategy { input } | Commands::Calories { input } => input,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "rps-tally")]
#[command(about = "Puzzle input scorer: strategy guides and calorie listings", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging and print a score breakdown
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/rps-tally/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Print the answers as a JSON object
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn fail_input(err: InputError) -> ! {
    eprintln!("Invalid input: {}", err);
    std::process::exit(EXIT_INPUT);
}

fn run_strategy(input: &str, config: &Config, verbose: bool, use_colors: bool) -> Report {
    let scorer = RoundScorer::new(config.strategy.outcome_points);

    let (part_one, part_two) = if verbose {
        let shape = rps_tally::strategy::score_guide(input, GuideColumn::Choice, &scorer)
            .unwrap_or_else(|e| fail_input(e));
        let outcome = rps_tally::strategy::score_guide(input, GuideColumn::Directive, &scorer)
            .unwrap_or_else(|e| fail_input(e));

        println!(
            "{}",
            rps_tally::output::format_breakdown("Part 1 (shape column)", &shape, use_colors)
        );
        println!(
            "{}",
            rps_tally::output::format_breakdown("Part 2 (outcome column)", &outcome, use_colors)
        );
        println!();

        (shape.total, outcome.total)
    } else {
        (
            rps_tally::strategy::part_one(input, &scorer).unwrap_or_else(|e| fail_input(e)),
            rps_tally::strategy::part_two(input, &scorer).unwrap_or_else(|e| fail_input(e)),
        )
    };

    Report {
        puzzle: "strategy".to_string(),
        part_one,
        part_two,
    }
}

fn run_calories(input: &str, config: &Config) -> Report {
    let part_one = rps_tally::calories::part_one(input).unwrap_or_else(|e| fail_input(e));
    let part_two =
        rps_tally::calories::part_two(input, &config.calories).unwrap_or_else(|e| fail_input(e));

    Report {
        puzzle: "calories".to_string(),
        part_one,
        part_two,
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match rps_tally::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = rps_tally::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let input = match rps_tally::puzzle::read_puzzle(cli.command.input()) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(EXIT_IO);
        }
    };

    let use_colors = !cli.json && rps_tally::output::should_use_colors();
    let report = match cli.command {
        Commands::Strategy { .. } => {
            run_strategy(&input, &config, cli.verbose && !cli.json, use_colors)
        }
        Commands::Calories { .. } => run_calories(&input, &config),
    };

    if cli.json {
        match rps_tally::output::format_json(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("{:#}", e);
                std::process::exit(EXIT_IO);
            }
        }
    } else {
        println!("{}", rps_tally::output::format_report(&report, use_colors));
    }

    std::process::exit(EXIT_SUCCESS);
}
