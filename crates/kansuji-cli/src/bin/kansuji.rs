use std::fs;
use std::process;

use clap::{Parser, Subcommand};

use kansuji_cli::commands::spell_ops;
use kansuji_core::reading::ReadingTable;

#[derive(Parser)]
#[command(name = "kansuji", about = "Japanese numeral spelling tools")]
struct Cli {
    /// Path to a custom readings TOML, loaded before any command runs
    #[arg(long, global = true)]
    readings_toml: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Spell a number as kanji numerals
    Spell {
        /// Number token (decimal digits; interior whitespace and full-width
        /// digits are tolerated)
        number: String,
        /// Print the contracted reading instead of the kanji form
        #[arg(long)]
        reading: bool,
        /// Print both forms, tab separated
        #[arg(long)]
        both: bool,
    },

    /// Spell numbers from a file, one token per line (invalid lines skipped)
    Batch {
        /// Path to the input file
        input_file: String,
        /// Print contracted readings instead of kanji forms
        #[arg(long)]
        reading: bool,
    },

    /// Show every pipeline stage for one number
    Explain {
        /// Number token
        number: String,
    },

    /// Dump the active reading table and shift rules
    Tables,
}

fn main() {
    let cli = Cli::parse();

    if let Some(path) = &cli.readings_toml {
        let content = fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Error reading {}: {}", path, e);
            process::exit(1);
        });
        if let Err(e) = ReadingTable::init_custom(content) {
            eprintln!("Error loading readings: {}", e);
            process::exit(1);
        }
    }

    match cli.command {
        Command::Spell {
            number,
            reading,
            both,
        } => spell_ops::spell_cmd(&number, reading, both),
        Command::Batch {
            input_file,
            reading,
        } => spell_ops::batch_cmd(&input_file, reading),
        Command::Explain { number } => spell_ops::explain_cmd(&number),
        Command::Tables => spell_ops::tables_cmd(),
    }
}
