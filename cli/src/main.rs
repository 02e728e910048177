//! lotto CLI - Command-line harness for the rank engine
//!
//! This binary exercises the engine directly: a throughput benchmark over
//! generated tickets and a small worked example.

#[macro_use]
mod verbose;
mod config;

use anyhow::{bail, Context, Result};
use lotto_engine::calculator::benchmark_throughput;
use lotto_engine::{DrawDetail, WinningRank};

fn main() -> Result<()> {
    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let verbose_flag = args.iter().any(|a| a == "-v" || a == "--verbose");
    args.retain(|a| a != "-v" && a != "--verbose");

    let cfg = config::Config::load()
        .with_context(|| format!("loading {}", config::CONFIG_FILE))?;
    verbose::set(verbose_flag || cfg.verbose);
    vprintln!("config: {:?}", cfg);

    if let Some(n) = cfg.rayon_threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
            .context("configuring rayon thread pool")?;
        vprintln!("rayon threads: {}", n);
    }

    match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        ["bench", "ranks"] => run_bench(cfg.sample_size),
        ["bench", "ranks", n] => {
            let sample_size = n
                .parse()
                .with_context(|| format!("invalid sample size {:?}", n))?;
            run_bench(sample_size)
        }
        ["example"] => run_example(),
        [] | ["--help"] | ["-h"] => {
            print_usage();
            Ok(())
        }
        other => {
            print_usage();
            bail!("unknown command: {}", other.join(" "))
        }
    }
}

fn run_bench(sample_size: usize) -> Result<()> {
    println!("Running rank calculator benchmark...");
    println!("Sample size: {} tickets", sample_size);
    let (tickets_per_sec, duration_ms) = benchmark_throughput(sample_size);

    println!("Results:");
    println!("  Duration: {} ms", duration_ms);
    println!("  Throughput: {:.2} tickets/sec", tickets_per_sec);
    println!("  Throughput: {:.2}M tickets/sec", tickets_per_sec / 1_000_000.0);
    Ok(())
}

fn run_example() -> Result<()> {
    let detail = DrawDetail::try_new(
        [1, 2, 3, 4, 5, 6],
        7,
        vec![
            [1, 2, 3, 4, 5, 6],
            [1, 2, 3, 4, 5, 7],
            [1, 2, 3, 4, 5, 8],
            [1, 2, 3, 4, 9, 10],
            [1, 2, 3, 9, 10, 11],
            [1, 2, 9, 10, 11, 12],
        ],
    )
    .context("example draw is invalid")?;

    println!(
        "Winning numbers: {:?} + bonus {}",
        detail.winning_numbers(),
        detail.bonus_number()
    );
    let calculator = WinningRank::new(detail);
    for ticket in calculator.detail().lotto_numbers() {
        let rank = calculator.determine_rank(ticket);
        vprintln!(
            "{:?}: {} matched, bonus {} -> {}",
            ticket,
            calculator.count_matching_numbers(ticket),
            calculator.includes_bonus_number(ticket),
            rank.map_or("-", |r| r.label())
        );
    }

    let result = calculator.calculate_rank();
    for (rank, count) in result.iter() {
        println!("  {} ({}): {}", rank, rank.description(), count);
    }
    println!("  Ranked tickets: {}", result.total());
    Ok(())
}

fn print_usage() {
    println!("lotto rank calculator v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage:");
    println!("  lotto bench ranks [sample_size]");
    println!("  lotto example");
    println!();
    println!("Options:");
    println!("  -v, --verbose   Detailed logs on stderr");
    println!();
    println!("Settings are read from {} when present:", config::CONFIG_FILE);
    println!("  sample_size, rayon_threads, verbose");
    println!();
    println!("Examples:");
    println!("  lotto bench ranks          # Run with the configured sample size");
    println!("  lotto bench ranks 10000000 # Run with 10M tickets");
}
