//! Strategy-vs-strategy simulator CLI.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                          # 1000 games, Easy (X) vs Hard (O)
//!   cargo run --bin simulate -- --human hard -n 10    # Hard vs Hard
//!   cargo run --bin simulate -- --seed 42 --json      # Reproducible run, JSON report

use std::env;
use tictactoe::simulator::{run_simulation, SimConfig};
use tictactoe::Difficulty;

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              TIC-TAC-TOE STRATEGY SIMULATOR                   ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Games:          {}", config.num_games);
    println!("  X (moves first): {}", config.human);
    println!("  O:              {}", config.ai);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    if args.iter().any(|a| a == "--json") {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        match std::fs::write(&filename, report.to_json()) {
            Ok(()) => println!("JSON report saved to: {}", filename),
            Err(e) => {
                eprintln!("Failed to write JSON report: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn parse_difficulty(value: Option<&String>, flag: &str) -> Difficulty {
    match value.map(|v| v.parse::<Difficulty>()) {
        Some(Ok(difficulty)) => difficulty,
        Some(Err(e)) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
        None => {
            eprintln!("{} needs a value", flag);
            std::process::exit(1);
        }
    }
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--games" => {
                if i + 1 < args.len() {
                    config.num_games = args[i + 1].parse().unwrap_or(1000);
                    i += 1;
                }
            }
            "--human" | "-x" => {
                config.human = parse_difficulty(args.get(i + 1), "--human");
                i += 1;
            }
            "--ai" | "-o" => {
                config.ai = parse_difficulty(args.get(i + 1), "--ai");
                i += 1;
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-q" | "--quiet" => {
                config.verbosity = 0;
            }
            "--json" => {}
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Tic-Tac-Toe Strategy Simulator");
    println!();
    println!("Usage: simulate [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -n, --games <N>       Number of games (default: 1000)");
    println!("  -x, --human <LEVEL>   Strategy for X, who moves first (default: easy)");
    println!("  -o, --ai <LEVEL>      Strategy for O (default: hard)");
    println!("  -s, --seed <SEED>     Random seed for reproducibility");
    println!("  -v, --verbose         Print every game");
    println!("  -q, --quiet           Suppress per-game output");
    println!("      --json            Also save a JSON report");
    println!("  -h, --help            Show this help");
}
