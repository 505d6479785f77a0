//! Command line driver for the Enigma engine.
//!
//! `enigma encrypt` runs a message through a machine built from flags or a
//! TOML key sheet. `enigma crack` ranks rotor orders and start positions of
//! a ciphertext by index of coincidence.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use enigma_engine::alphabet;
use enigma_engine::analysis::{self, SearchSpace};
use enigma_engine::{MachineConfig, Plugboard};

#[derive(Parser)]
#[command(name = "enigma")]
#[command(about = "Enigma I rotor cipher and index-of-coincidence search", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt or decrypt a message
    Encrypt(EncryptArgs),
    /// Rank rotor orders and start positions for a ciphertext
    Crack(CrackArgs),
}

#[derive(Args)]
struct EncryptArgs {
    /// Message; read from stdin when omitted
    text: Option<String>,

    /// TOML key sheet; replaces the individual setting flags
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Rotor names, leftmost first
    #[arg(long, value_delimiter = ',', default_value = "I,II,III")]
    rotors: Vec<String>,

    /// Start positions, leftmost first (missing entries are 0)
    #[arg(long, value_delimiter = ',')]
    positions: Vec<i64>,

    /// Ring settings, leftmost first (missing entries are 0)
    #[arg(long, value_delimiter = ',')]
    rings: Vec<i64>,

    /// Reflector name
    #[arg(long, default_value = "UKW-B")]
    reflector: String,

    /// Plugboard pairs, e.g. "AV BS CG"
    #[arg(long, default_value = "")]
    plugboard: String,

    /// Uppercase the message and drop non-letters first
    #[arg(long)]
    normalize: bool,
}

#[derive(Args)]
struct CrackArgs {
    /// Ciphertext; read from stdin when omitted
    text: Option<String>,

    /// Rotor names to draw from
    #[arg(long, value_delimiter = ',', default_value = "I,II,III,IV,V")]
    rotors: Vec<String>,

    /// Number of rotor slots
    #[arg(long, default_value = "3")]
    slots: usize,

    /// Reflector name
    #[arg(long, default_value = "UKW-B")]
    reflector: String,

    /// Ring settings used for every trial
    #[arg(long, value_delimiter = ',')]
    rings: Vec<i64>,

    /// Plugboard pairs used for every trial
    #[arg(long, default_value = "")]
    plugboard: String,

    /// Number of ciphertext symbols scored per trial
    #[arg(long, default_value_t = analysis::DEFAULT_MAX_LEN)]
    max_len: usize,

    /// Number of ranked candidates to print
    #[arg(long, default_value = "5")]
    top: usize,

    /// Uppercase the ciphertext and drop non-letters first
    #[arg(long)]
    normalize: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Encrypt(args) => run_encrypt(args),
        Commands::Crack(args) => run_crack(args),
    }
}

fn run_encrypt(args: EncryptArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => {
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("reading key sheet {}", path.display()))?;
            MachineConfig::from_toml_str(&source)
                .with_context(|| format!("parsing key sheet {}", path.display()))?
        }
        None => {
            let rotors: Vec<&str> = args.rotors.iter().map(String::as_str).collect();
            let pairs: Vec<&str> = args.plugboard.split_whitespace().collect();
            MachineConfig::from_settings(
                &args.reflector,
                &rotors,
                &args.positions,
                &args.rings,
                &pairs,
            )
        }
    };

    let mut machine = config.build().context("building machine")?;
    let text = read_message(args.text, args.normalize)?;
    let output = machine.encrypt(&text).context("encrypting message")?;
    println!("{}", output);
    Ok(())
}

fn run_crack(args: CrackArgs) -> Result<()> {
    let ciphertext = read_message(args.text, args.normalize)?;
    let space = SearchSpace {
        rotors: args.rotors,
        slots: args.slots,
        reflector: args.reflector,
        ring_settings: args.rings,
        plugboard: Plugboard::from_pairs_str(&args.plugboard).context("parsing plugboard")?,
        max_len: Some(args.max_len),
        ..SearchSpace::default()
    };

    tracing::info!(
        symbols = ciphertext.len().min(args.max_len),
        rotors = ?space.rotors,
        slots = space.slots,
        "starting search"
    );
    let candidates = analysis::search(&ciphertext, &space).context("searching key space")?;

    for (rank, candidate) in candidates.iter().take(args.top).enumerate() {
        println!(
            "{:>3}. {:<14} window {:<4} positions {:?}  ioc {:.4}",
            rank + 1,
            candidate.rotors.join(" "),
            candidate.window(),
            candidate.positions,
            candidate.score
        );
    }

    if let Some(best) = candidates.first() {
        let config = best.to_config(&space);
        let preview = config.build()?.encrypt(&ciphertext)?;
        println!();
        println!("# best key sheet");
        print!("{}", config.to_toml_string()?);
        println!();
        println!("{}", preview);
    }
    Ok(())
}

fn read_message(text: Option<String>, normalize: bool) -> Result<String> {
    let raw = match text {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("reading stdin")?;
            buffer
        }
    };
    Ok(if normalize {
        alphabet::normalize(&raw)
    } else {
        raw.trim().to_string()
    })
}
