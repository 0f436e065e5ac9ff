use std::process;
use std::time::Duration;

use clap::{Parser, Subcommand};
use log::LevelFilter;
use rand::rngs::StdRng;
use rand::SeedableRng;

use sortbench::config::{DEFAULT_SEED, START_SIZE};
use sortbench::report::{render_row, size_header};
use sortbench::{Error, Order, Sequence, SortKind, SweepConfig};

#[derive(Parser)]
#[command(name = "sortbench", about = "Compare classic sorting algorithms by time and comparison count", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Raise log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Time every algorithm on random, sorted and reversed input at escalating sizes
    Stats {
        /// First size of the sweep
        #[arg(long)]
        start: Option<usize>,
        /// Largest size the sweep may reach
        #[arg(long)]
        limit: Option<usize>,
        /// Stop once a single sort takes this many seconds
        #[arg(long)]
        time_limit: Option<f64>,
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,
    },

    /// Print each order before and after sorting with one algorithm
    Show {
        /// Algorithm name (e.g. "merge", "ran-quick") or its 1-based menu index
        sort: String,
        #[arg(long, default_value_t = START_SIZE)]
        size: usize,
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,
    },

    /// List the algorithms with their menu indices
    List,
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .init();

    if let Err(e) = run(cli.command) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), Error> {
    match command {
        Commands::Stats { start, limit, time_limit, seed } => {
            let mut config = SweepConfig::default();
            if let Some(start) = start {
                config.start_size = start;
            }
            if let Some(limit) = limit {
                config.size_limit = limit;
            }
            if let Some(secs) = time_limit {
                config.time_limit = Duration::try_from_secs_f64(secs)
                    .map_err(|e| Error::InvalidConfig(format!("time limit {secs}: {e}")))?;
            }
            stats(&config, seed)
        }
        Commands::Show { sort, size, seed } => {
            let kind = match sort.parse::<usize>() {
                Ok(index) => SortKind::from_menu_index(index)?,
                Err(_) => sort.parse::<SortKind>()?,
            };
            show(kind, size, seed);
            Ok(())
        }
        Commands::List => {
            for (i, kind) in SortKind::ALL.iter().enumerate() {
                println!("{}. {}", i + 1, kind);
            }
            Ok(())
        }
    }
}

fn stats(config: &SweepConfig, seed: u64) -> Result<(), Error> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut current_size = None;
    sortbench::sweep::run(config, &mut rng, |row| {
        if current_size != Some(row.size) {
            if current_size.is_some() {
                println!();
            }
            current_size = Some(row.size);
            print!("{}", size_header(row.size));
        }
        print!("{}", render_row(row, config.epsilon));
    })?;
    println!();
    Ok(())
}

fn show(kind: SortKind, size: usize, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    for order in Order::ALL {
        let mut seq = Sequence::with_rng(size, order, &mut rng);
        println!("\nBefore sorting: ");
        print!("{}", seq.dump(kind.name(), order.name()));

        let m = seq.sort_with(kind, &mut rng);

        println!("\nAfter sorting: ");
        print!("{}", seq.dump(kind.name(), order.name()));
        println!("{} comparisons in {:?}", m.comparisons, m.elapsed);
    }
}
