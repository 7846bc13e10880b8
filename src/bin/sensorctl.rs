// src/bin/sensorctl.rs
//! Command-line front end for the cipher, extractor and ring buffer

use anyhow::{ensure, Context, Result};
use clap::{Parser, Subcommand};
use sensor_kit::cipher;
use sensor_kit::consts::MAX_RING_CAPACITY;
use sensor_kit::{load_config, CipherDirection, InsertOutcome, RingBuffer};
use serde_json::json;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "sensorctl", version, about = "Cipher, extract and buffer sensor payloads")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Caesar-encrypt uppercase text
    Encrypt {
        text: String,
        #[arg(short, long)]
        key: Option<i32>,
    },
    /// Caesar-decrypt uppercase text
    Decrypt {
        text: String,
        #[arg(short, long)]
        key: Option<i32>,
    },
    /// Look up a token in a `TOKEN&unit::UNIT&value::N#...` string
    Extract {
        subject: String,
        token: String,
        #[arg(long)]
        json: bool,
    },
    /// Push values through a ring buffer and drain some of them
    Ring {
        #[arg(short, long)]
        capacity: Option<usize>,
        #[arg(short, long, num_args = 1.., allow_negative_numbers = true)]
        insert: Vec<i32>,
        #[arg(short, long, default_value_t = 0)]
        remove: usize,
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config();
    debug!(?config, "configuration loaded");

    match cli.command {
        Command::Encrypt { text, key } => {
            run_cipher(CipherDirection::Encrypt, &text, key.unwrap_or(config.cipher.key))
        }
        Command::Decrypt { text, key } => {
            run_cipher(CipherDirection::Decrypt, &text, key.unwrap_or(config.cipher.key))
        }
        Command::Extract {
            subject,
            token,
            json,
        } => {
            let record = config
                .extractor
                .extract(&subject, &token)
                .with_context(|| format!("extracting {token:?}"))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                println!("{} {}", record.value, record.unit);
            }
            Ok(())
        }
        Command::Ring {
            capacity,
            insert,
            remove,
            json,
        } => run_ring(capacity.unwrap_or(config.ring.capacity), &insert, remove, json),
    }
}

fn run_cipher(direction: CipherDirection, text: &str, key: i32) -> Result<()> {
    let output = cipher::apply(direction, text, key)
        .with_context(|| format!("{direction:?} with key {key} failed"))?;
    println!("{output}");
    Ok(())
}

fn run_ring(capacity: usize, values: &[i32], removals: usize, as_json: bool) -> Result<()> {
    ensure!(
        (1..=MAX_RING_CAPACITY).contains(&capacity),
        "ring capacity {capacity} is outside 1..={MAX_RING_CAPACITY}"
    );
    let mut storage = vec![0; capacity];
    let mut ring = RingBuffer::new(&mut storage).context("creating ring buffer")?;

    let inserts: Vec<_> = values
        .iter()
        .map(|&value| {
            let outcome = ring.insert(value);
            if outcome == InsertOutcome::Overwrite {
                info!(value, "buffer full, oldest value overwritten");
            }
            json!({ "value": value, "outcome": outcome })
        })
        .collect();

    // stop at the first empty report
    let mut removed = Vec::new();
    for _ in 0..removals {
        let mut slot = 0;
        let outcome = ring.remove_into(&mut slot);
        removed.push(json!({
            "value": outcome.is_success().then_some(slot),
            "outcome": outcome,
        }));
        if !outcome.is_success() {
            break;
        }
    }

    let remaining: Vec<i32> = ring.iter().collect();

    if as_json {
        let report = json!({
            "capacity": ring.capacity(),
            "inserted": inserts,
            "removed": removed,
            "remaining": remaining,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for entry in inserts.iter().chain(&removed) {
            println!("{entry}");
        }
        println!("remaining: {remaining:?}");
    }
    Ok(())
}
