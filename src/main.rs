use investment_sim::build_info;
use investment_sim::catalog::TierCatalog;
use investment_sim::core::format::{format_number, suffix_legend};
use investment_sim::core::offline::{LevelRestore, OfflineReport};
use investment_sim::game::Game;
use investment_sim::save::SaveManager;
use std::error::Error;
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

    let args: Vec<String> = std::env::args().collect();
    let command = args.get(1).map(String::as_str).unwrap_or("status");

    match command {
        "--version" | "-v" => {
            println!("investment-sim {}", build_info::version_string());
            return;
        }
        "--help" | "-h" | "help" => {
            print_help();
            return;
        }
        _ => {}
    }

    if let Err(e) = run(command, &args[args.len().min(2)..]) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(command: &str, rest: &[String]) -> Result<(), Box<dyn Error>> {
    let manager = SaveManager::new()?;

    if command == "reset" {
        if manager.delete()? {
            println!("Save deleted: {}", manager.path().display());
        } else {
            println!("No save to delete.");
        }
        return Ok(());
    }
    if command == "legend" {
        for line in suffix_legend() {
            println!("{}", line);
        }
        return Ok(());
    }

    let catalog = Arc::new(TierCatalog::standard()?);
    let (mut game, report) = Game::load(&manager, catalog);
    print_offline_report(&report);

    match command {
        "status" => print_status(&game),
        "tiers" => {
            let page = match rest.first() {
                Some(p) => p.parse::<usize>()?.saturating_sub(1),
                None => game.current_page(),
            };
            print_tiers(&game, page);
        }
        "buy" => {
            let Some(arg) = rest.first() else {
                return Err("usage: investment-sim buy <tier number>".into());
            };
            let index = match arg.parse::<usize>()? {
                0 => return Err("tiers are numbered from 1".into()),
                n => n - 1,
            };
            let name = match game.tier(index) {
                Some(tier) => tier.name,
                None => return Err(format!("no tier {}", arg).into()),
            };
            if !game.is_tier_unlocked(index) {
                println!("{} is locked. Buy the tier before it first.", name);
            }
            let result = game.purchase_tier(index);
            if result.levels == 0 {
                println!("Could not buy {}.", name);
            } else {
                println!(
                    "Bought {} x{} for ${}.",
                    name,
                    result.levels,
                    format_number(result.spent)
                );
            }
            if let Some(arc) = game.take_arc_change() {
                println!("New arc reached: {}", arc);
            }
        }
        "click" => {
            let count = match rest.first() {
                Some(c) => c.parse::<u32>()?,
                None => 1,
            };
            let earned: f64 = (0..count).map(|_| game.click()).sum();
            println!("Clicked {} times for ${}.", count, format_number(earned));
        }
        "multiplier" => {
            let batch = game.cycle_purchase_multiplier();
            println!("Buying x{} per purchase.", batch);
        }
        "page" => {
            let direction = match rest.first().map(String::as_str) {
                Some("next") => 1,
                Some("prev") => -1,
                _ => return Err("usage: investment-sim page next|prev".into()),
            };
            if !game.change_page(direction) {
                println!("No page there.");
            }
            println!("Page {}/{}", game.current_page() + 1, game.total_pages());
        }
        "ascend" => match game.ascend() {
            Some(points) => println!(
                "Ascended for {} points. Ascension power is now x{:.2}.",
                points,
                game.prestige().ascension_power
            ),
            None => println!("Cannot Ascend yet. Buy tier 33 first."),
        },
        "transcend" => match game.transcend() {
            Some(added) => println!(
                "Transcended for +{:.3}. Transcendent power is now x{:.3}.",
                added,
                game.prestige().transcendent_power
            ),
            None => println!("Cannot Transcend without ascension points."),
        },
        other => {
            return Err(format!("unknown command: {} (run 'investment-sim --help')", other).into())
        }
    }

    game.save(&manager)?;
    Ok(())
}

fn print_offline_report(report: &OfflineReport) {
    if let LevelRestore::CountMismatch { saved, expected } = report.levels {
        eprintln!(
            "Warning: save has {} tiers but the game has {}; tier levels were not restored.",
            saved, expected
        );
    }
    if report.gain > 0.0 {
        println!("{}", report.summary());
    }
}

fn print_status(game: &Game) {
    let prestige = game.prestige();
    println!("{}", game.current_arc());
    println!("  Balance:       ${}", format_number(game.resource()));
    println!("  Income:        ${}/s", format_number(game.total_rate()));
    println!("  Click:         ${}", format_number(game.click_value()));
    println!(
        "  Ascension:     {} points (x{:.2}), Ascend now: +{}",
        prestige.ascension_points,
        prestige.ascension_power,
        game.ascend_preview()
    );
    println!(
        "  Transcendent:  x{:.3}, Transcend now: +{:.3}",
        prestige.transcendent_power,
        game.transcend_preview()
    );
    println!(
        "  Page:          {}/{}",
        game.current_page() + 1,
        game.total_pages()
    );
    println!("  Buying:        x{}", game.purchase_multiplier());
}

fn print_tiers(game: &Game, page: usize) {
    let tiers = game.page_tiers(page);
    if tiers.is_empty() {
        println!("No page {}.", page + 1);
        return;
    }
    println!("Page {}/{}", page + 1, game.total_pages());
    for tier in tiers {
        let status = if !tier.unlocked {
            "locked"
        } else if tier.affordable {
            "buy"
        } else {
            ""
        };
        let rate = if tier.level == 0 {
            tier.next_unit_rate
        } else {
            tier.rate
        };
        println!(
            "  {:>2}. {:<24} lvl {:>5}  ${:>10}  ${:>10}/s  {}",
            tier.index + 1,
            tier.name,
            tier.level,
            format_number(tier.cost),
            format_number(rate),
            status
        );
    }
}

fn print_help() {
    println!("Investment Simulator - idle investment game\n");
    println!("Usage: investment-sim [command]\n");
    println!("Commands:");
    println!("  status            Show balance, income and prestige (default)");
    println!("  tiers [page]      List the tiers on a page");
    println!("  buy <tier>        Buy the numbered tier with the current batch size");
    println!("  click [count]     Click for income");
    println!("  multiplier        Cycle the batch size (1/10/25/100/1000)");
    println!("  page next|prev    Change page");
    println!("  ascend            Reset tiers for ascension points");
    println!("  transcend         Reset ascension points for transcendent power");
    println!("  legend            Explain number suffixes");
    println!("  reset             Delete the save file");
    println!("  --version         Show version information");
    println!("  --help            Show this help message");
    println!();
    println!("Environment:");
    println!("  INVESTMENT_SIM_SAVE_DIR   Save directory");
    println!("  INVESTMENT_SIM_SAVE_FILE  Save file name (default: save.json)");
    println!("  RUST_LOG                  Log filter (default: warn)");
}
