//! Game balance simulator CLI.
//!
//! Plays a deterministic greedy game to analyze pacing.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                      # Default: 72h, stop at first Ascend
//!   cargo run --bin simulate -- --max-hours 4     # Early game only
//!   cargo run --bin simulate -- --ascensions 5    # Five prestige cycles

use investment_sim::catalog::TierCatalog;
use investment_sim::core::constants::SECONDS_PER_HOUR;
use investment_sim::simulator::{run_simulation, SimConfig};
use std::env;
use std::process;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let (config, json) = parse_args(&args);

    let catalog = match TierCatalog::standard() {
        Ok(catalog) => Arc::new(catalog),
        Err(e) => {
            eprintln!("Invalid tier catalog: {}", e);
            process::exit(1);
        }
    };

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║           INVESTMENT SIMULATOR BALANCE RUN                    ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Step:           {}s", config.step_seconds);
    println!(
        "  Time Limit:     {:.1}h",
        config.max_seconds / SECONDS_PER_HOUR as f64
    );
    println!("  Clicks/sec:     {}", config.clicks_per_second);
    println!("  Ascend At:      {} points", config.ascend_min_points);
    println!("  Ascensions:     {}", config.target_ascensions);
    println!();

    let report = run_simulation(&config, catalog);

    println!("{}", report.to_text());

    if json {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        if let Err(e) = std::fs::write(&filename, report.to_json()) {
            eprintln!("Failed to write JSON report: {}", e);
            process::exit(1);
        }
        println!("JSON report saved to: {}", filename);
    }
}

fn parse_args(args: &[String]) -> (SimConfig, bool) {
    let mut config = SimConfig::default();
    let mut json = false;

    let mut i = 1;
    while i < args.len() {
        let value = args.get(i + 1);
        match args[i].as_str() {
            "--step" => {
                if let Some(v) = value.and_then(|v| v.parse::<f64>().ok()) {
                    config.step_seconds = v;
                    i += 1;
                }
            }
            "--max-hours" => {
                if let Some(v) = value.and_then(|v| v.parse::<f64>().ok()) {
                    config.max_seconds = v * SECONDS_PER_HOUR as f64;
                    i += 1;
                }
            }
            "--clicks" => {
                if let Some(v) = value.and_then(|v| v.parse::<f64>().ok()) {
                    config.clicks_per_second = v;
                    i += 1;
                }
            }
            "--ascend-at" => {
                if let Some(v) = value.and_then(|v| v.parse::<u64>().ok()) {
                    config.ascend_min_points = v;
                    i += 1;
                }
            }
            "--ascensions" => {
                if let Some(v) = value.and_then(|v| v.parse::<u32>().ok()) {
                    config.target_ascensions = v;
                    i += 1;
                }
            }
            "--batch" => {
                if let Some(v) = value.and_then(|v| v.parse::<usize>().ok()) {
                    config.buy_batch_index = v;
                    i += 1;
                }
            }
            "--early" => {
                config = SimConfig::early_game(4);
            }
            "--cycles" => {
                config = SimConfig::prestige_cycles(5);
            }
            "--json" => {
                json = true;
            }
            "-h" | "--help" => {
                print_help();
                process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    (config, json)
}

fn print_help() {
    println!("Investment Simulator Balance Run");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --step <S>          Simulated seconds per step (default: 1)");
    println!("    --max-hours <H>     Simulated time limit in hours (default: 72)");
    println!("    --clicks <C>        Clicks per second (default: 5)");
    println!("    --ascend-at <P>     Ascend once it grants P points (default: 100)");
    println!("    --ascensions <N>    Stop after N Ascends, 0 = never (default: 1)");
    println!("    --batch <I>         Purchase batch index 0-4 = 1/10/25/100/1000 (default: 0)");
    println!("    --early             Early game preset (4 hours, no Ascend target)");
    println!("    --cycles            Prestige preset (5 Ascends, 10s steps)");
    println!("    --json              Save JSON report");
    println!("    -h, --help          Show this help");
}
