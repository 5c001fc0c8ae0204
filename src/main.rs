//! pagesim - Page replacement simulator

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser as ClapParser, ValueEnum};
use log::{debug, warn};
use pagesim::policy::PolicyKind;
use pagesim::reference::{ReferenceGenerator, ReferenceString};
use pagesim::report::{compare, HistoryTable, StepLine};
use pagesim::simulation::Simulator;

/// Replays a page reference string under FIFO, LRU and OPT replacement
#[derive(ClapParser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of memory frames (1-10)
    #[arg(short, long, default_value = "3")]
    frames: usize,

    /// Number of pages to generate (1-50)
    #[arg(short = 'n', long, default_value = "10")]
    pages: usize,

    /// Explicit reference string, e.g. "1,2,3,4,1,2,5"; overrides --pages
    #[arg(short, long)]
    reference: Option<String>,

    /// Seed for the reference string generator
    #[arg(short, long)]
    seed: Option<u64>,

    /// Replacement algorithm to run
    #[arg(short, long, value_enum, default_value_t = Algorithm::All)]
    algorithm: Algorithm,

    /// Animation speed multiplier (0.5-3.0); one step every 1000/speed ms
    #[arg(long, default_value = "1.0", value_parser = parse_speed)]
    speed: f64,

    /// Run without pausing between steps
    #[arg(long)]
    no_delay: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Algorithm {
    Fifo,
    Lru,
    Opt,
    All,
}

impl Algorithm {
    fn policies(self) -> Vec<PolicyKind> {
        match self {
            Self::Fifo => vec![PolicyKind::Fifo],
            Self::Lru => vec![PolicyKind::Lru],
            Self::Opt => vec![PolicyKind::Opt],
            Self::All => PolicyKind::ALL.to_vec(),
        }
    }
}

fn parse_speed(s: &str) -> std::result::Result<f64, String> {
    let speed: f64 = s.parse().map_err(|_| format!("invalid speed: {}", s))?;
    if !(0.5..=3.0).contains(&speed) {
        return Err(format!("speed must be between 0.5 and 3.0, got {}", speed));
    }
    Ok(speed)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let reference = match &args.reference {
        Some(text) => text
            .parse::<ReferenceString>()
            .context("Invalid reference string")?,
        None => {
            let mut generator = match args.seed {
                Some(seed) => ReferenceGenerator::with_seed(seed),
                None => ReferenceGenerator::new(),
            };
            generator
                .generate(args.pages)
                .context("Failed to generate reference string")?
        }
    };
    println!("Generated Pages: {}", reference);
    println!();

    let delay = if args.no_delay {
        None
    } else {
        Some(Duration::from_millis((1000.0 / args.speed) as u64))
    };
    debug!("Step delay: {:?}", delay);

    let policies = args.algorithm.policies();
    let mut simulator = Simulator::new();

    for &policy in &policies {
        simulator
            .configure(args.frames, reference.as_slice().to_vec(), policy)
            .context("Failed to prepare simulation")?;

        println!("{} Algorithm Selected", policy);
        println!("Page Reference String: {}", reference);
        println!();

        if !animate(&mut simulator, policy, delay).await? {
            warn!("Animation stopped");
            return Ok(());
        }

        let state = simulator.state()?;
        println!();
        print!("{}", HistoryTable::new(state));
        println!();
        println!("Simulation complete.");
        println!("Total page faults: {}", state.fault_count());
        println!();
    }

    if policies.len() > 1 {
        println!("Comparison ({} frames):", args.frames);
        for summary in compare(args.frames, &reference)? {
            println!("  {}", summary);
        }
    }

    Ok(())
}

/// Step the simulation until it completes, one step per tick.
///
/// Returns false if the user interrupted the run with Ctrl+C.
async fn animate(simulator: &mut Simulator, policy: PolicyKind, delay: Option<Duration>) -> Result<bool> {
    let mut ticker = delay.map(tokio::time::interval);

    loop {
        if let Some(ticker) = ticker.as_mut() {
            tokio::select! {
                _ = ticker.tick() => {}
                _ = tokio::signal::ctrl_c() => return Ok(false),
            }
        }

        match simulator.step()? {
            Some(result) => println!("{}", StepLine::new(&result, policy)),
            None => return Ok(true),
        }
    }
}
