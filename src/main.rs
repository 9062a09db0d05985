use std::error::Error;

use clap::{Parser, Subcommand};

use mnemo_core::log_debug;
use mnemo_core::mnemonic::{self, WordList};
use mnemo_core::types::{MnemonicDetails, MnemonicLength};
use mnemo_core::utils::logging;

#[derive(Parser)]
#[command(name = "mnemo", version, about = "BIP39 mnemonic builder core")]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    debug: bool,

    /// Emit machine-readable JSON instead of a human report
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a fresh random mnemonic
    Generate {
        /// Number of words: 12, 15, 18, 21 or 24
        #[arg(long, default_value_t = 24)]
        length: usize,
    },

    /// Inspect a phrase; pass "_" for an unselected slot
    Details {
        /// The phrase, one argument per slot
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Derive the 512-bit seed from a complete phrase
    Seed {
        /// The complete phrase, one argument per word
        #[arg(required = true)]
        words: Vec<String>,

        /// Optional BIP39 passphrase
        #[arg(long)]
        passphrase: Option<String>,
    },

    /// Derive a mnemonic deterministically from arbitrary text
    FromText {
        /// Source text; its SHA-256 hash becomes the entropy
        text: String,

        /// Number of words: 12, 15, 18, 21 or 24
        #[arg(long, default_value_t = 24)]
        length: usize,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    if cli.debug {
        logging::enable_debug();
    }

    let list = WordList::english();

    match cli.command {
        Command::Generate { length } => {
            let length = MnemonicLength::from_word_count(length)?;
            let words = mnemonic::generate_random_mnemonic(length, list)?;
            log_debug!("cli", "Generated mnemonic", length = length.word_count());
            if cli.json {
                println!("{}", serde_json::json!({ "words": words }));
            } else {
                println!("{}", words.join(" "));
            }
        }

        Command::Details { words } => {
            // "_" marks a slot the user has not picked yet
            let slots: Vec<String> = words
                .into_iter()
                .map(|w| if w == "_" { String::new() } else { w })
                .collect();
            let details = mnemonic::compute_details(&slots, list)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&details)?);
            } else {
                print_details(&details);
            }
        }

        Command::Seed { words, passphrase } => {
            mnemonic::validate_complete_phrase(&words, list)?;
            let seed = mnemonic::derive_seed(&words, passphrase.as_deref());
            if cli.json {
                println!("{}", serde_json::json!({ "seed": seed }));
            } else {
                println!("{}", seed);
            }
        }

        Command::FromText { text, length } => {
            let length = MnemonicLength::from_word_count(length)?;
            let words = mnemonic::mnemonic_from_entropy(&text, length, list)?;
            if cli.json {
                println!("{}", serde_json::json!({ "words": words }));
            } else {
                println!("{}", words.join(" "));
            }
        }
    }

    Ok(())
}

fn print_details(details: &MnemonicDetails) {
    println!("completed: {}", details.is_completed);
    if let Some(entropy) = &details.entropy {
        println!("entropy:   {}", entropy.hex);
    }
    if let Some(checksum) = &details.checksum {
        println!("hash:      {}", checksum.hash);
        println!("checksum:  {} ({} bits)", checksum.first_bits, checksum.length);
    }
    if let Some(candidates) = &details.valid_last_words {
        println!("valid last words ({}):", candidates.len());
        for chunk in candidates.chunks(8) {
            println!("  {}", chunk.join(" "));
        }
    }
}
