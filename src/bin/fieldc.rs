//! Field program compiler
//!
//! Generates a pattern, encodes it as a diff program and prints it as source.
//! The program goes to stdout; size diagnostics go to stderr through `log`.
//!
//! Usage:
//!   fieldc encode rotor > rotor.rs
//!   fieldc encode bitmap --bitmap logo.txt --format c
//!   fieldc table --format c

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rim_runner::codec::{Format, Pattern, PatternOptions, encode, export, replay};
use rim_runner::sim::{CellTable, DiffProgram};

#[derive(Parser, Debug)]
#[command(name = "fieldc")]
#[command(about = "Encode field animations into diff programs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode a generated pattern
    Encode {
        #[arg(value_enum)]
        pattern: Pattern,
        #[arg(long, value_enum, default_value_t = Format::Rust)]
        format: Format,
        /// Constant name (defaults to the pattern name)
        #[arg(long)]
        name: Option<String>,
        /// Loop length in ticks
        #[arg(long)]
        rows: Option<usize>,
        /// Seed for the rain pattern
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Text bitmap for the bitmap pattern
        #[arg(long)]
        bitmap: Option<PathBuf>,
        /// Replay the program and check it against the generated matrix
        #[arg(long)]
        verify: bool,
    },
    /// Print the cell addressing table as two parallel arrays
    Table {
        #[arg(long, value_enum, default_value_t = Format::Rust)]
        format: Format,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Encode {
            pattern,
            format,
            name,
            rows,
            seed,
            bitmap,
            verify,
        } => {
            let bitmap = match bitmap {
                Some(path) => Some(
                    fs::read_to_string(&path)
                        .with_context(|| format!("failed reading {}", path.display()))?,
                ),
                None if pattern == Pattern::Bitmap => bail!("the bitmap pattern needs --bitmap"),
                None => None,
            };
            let options = PatternOptions { rows, seed, bitmap };

            let matrix = pattern
                .generate(&options)
                .with_context(|| format!("failed generating {}", pattern.as_str()))?;
            let encoded = encode(&matrix)
                .with_context(|| format!("failed encoding {}", pattern.as_str()))?;

            let stats = &encoded.stats;
            log::info!(
                "{}: {} ticks, {} records, {} flips, {} bytes ({:.1}x)",
                pattern.as_str(),
                stats.rows,
                stats.records,
                stats.flips,
                stats.bytes,
                stats.compression_ratio()
            );
            log::info!("Peak in flight: {} cells at tick {}", stats.peak, stats.peak_tick);

            if verify {
                let program = DiffProgram::parse(&encoded.bytes)?;
                let replayed = replay(&program, matrix.height());
                if replayed != matrix {
                    bail!("replayed program does not match the generated pattern");
                }
                log::info!("Replay matches the generated pattern");
            }

            let name = name.unwrap_or_else(|| pattern.as_str().to_string());
            let doc = format!("{} pattern ({} tick loop)", pattern.as_str(), stats.rows);
            print!("{}", export::program(format, &name, &doc, &encoded)?);
        }
        Commands::Table { format } => {
            let table = CellTable::new();
            log::info!("Addressing table: {} cells", table.locations().len());
            print!("{}", export::table(format, &table)?);
        }
    }
    Ok(())
}
