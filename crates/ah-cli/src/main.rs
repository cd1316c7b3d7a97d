//! CLI frontend for the Atomic Highway dice engine.

mod commands;

use std::path::PathBuf;
use std::process;

use ah_dice::{CheckRequest, ReseedPolicy};
use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;

use commands::roll::OutputFormat;

#[derive(Parser)]
#[command(
    name = "ah",
    about = "Atomic Highway dice checks",
    version,
    propagate_version = true
)]
struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll an attribute or skill check
    Roll {
        /// Attribute: number of dice to roll (capped at 10)
        #[arg(allow_negative_numbers = true)]
        attribute: i64,

        /// Skill points to spend; makes this a skill check
        #[arg(short, long, allow_negative_numbers = true)]
        skill: Option<i64>,

        /// Repeat a skill check (1-10, anything else rolls once)
        #[arg(short, long, allow_negative_numbers = true)]
        repeat: Option<i64>,

        /// RNG seed for reproducible rolls
        #[arg(long)]
        seed: Option<u64>,

        /// When to reseed: per-repetition or once
        #[arg(long, default_value = "per-repetition", value_parser = ReseedPolicy::parse)]
        reseed: ReseedPolicy,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Run a signed Discord interaction request through the handler
    Interact {
        /// File containing the request body ("-" reads stdin)
        #[arg(short, long)]
        body: PathBuf,

        /// Hex Ed25519 signature (X-Signature-Ed25519)
        #[arg(long)]
        signature: String,

        /// Signed timestamp (X-Signature-Timestamp)
        #[arg(long)]
        timestamp: String,

        /// Hex public key (default: $DISCORD_PUBLIC_KEY)
        #[arg(long)]
        public_key: Option<String>,

        /// RNG seed for reproducible rolls
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let result = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_target(false)
        .try_init();
    if let Err(e) = result {
        eprintln!("warning: logging disabled: {e}");
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Roll {
            attribute,
            skill,
            repeat,
            seed,
            reseed,
            format,
        } => {
            let request = CheckRequest {
                attribute,
                skill_points: skill,
                repetitions: repeat,
            };
            commands::roll::run(&request, seed, reseed, format)
        }
        Commands::Interact {
            body,
            signature,
            timestamp,
            public_key,
            seed,
        } => commands::interact::run(&body, &signature, &timestamp, public_key.as_deref(), seed),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
