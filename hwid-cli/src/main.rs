//! hwid command-line wrapper
//!
//! Thin external collaborator around the fingerprint codec:
//!
//! - `hwid generate` prints this machine's fingerprint string
//! - `hwid compare <ID_A> <ID_B>` reports whether two fingerprints
//!   identify the same machine (exit code 1 on "no match")
//!
//! Uses the built-in default mask; deployments with their own mask should
//! call the library directly.

use anyhow::{bail, Result};
use tracing::debug;

use hwid_core::constants::DEFAULT_MASK_VALUES;
use hwid_core::{compare_ids, generate_id, Mask};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_help() {
    println!("hwid {} - machine fingerprint tool", VERSION);
    println!();
    println!("USAGE:");
    println!("    hwid [OPTIONS] generate");
    println!("    hwid [OPTIONS] compare <ID_A> <ID_B>");
    println!();
    println!("OPTIONS:");
    println!("    --json           JSON output");
    println!("    -h, --help       Print help");
    println!("    -V, --version    Print version");
    println!();
    println!("Set RUST_LOG for diagnostic logging (e.g. RUST_LOG=hwid_core=debug).");
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().collect();
    let mut json_output = false;
    let mut positional: Vec<String> = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                return Ok(());
            }
            "-V" | "--version" => {
                println!("hwid {}", VERSION);
                return Ok(());
            }
            "--json" => json_output = true,
            other if other.starts_with('-') => {
                bail!("unknown option: {} (see --help)", other);
            }
            other => positional.push(other.to_string()),
        }
        i += 1;
    }

    let mask = Mask::from(DEFAULT_MASK_VALUES);

    match positional.first().map(String::as_str) {
        Some("generate") => {
            let id = generate_id(&mask)?;
            debug!(fingerprint = %id, "generated local fingerprint");
            if json_output {
                println!("{}", serde_json::json!({ "fingerprint": id }));
            } else {
                println!("{}", id);
            }
        }
        Some("compare") => {
            if positional.len() != 3 {
                bail!("compare requires exactly two fingerprint strings (see --help)");
            }
            let matched = compare_ids(&positional[1], &positional[2], &mask)?;
            if json_output {
                println!("{}", serde_json::json!({ "matched": matched }));
            } else {
                println!("{}", if matched { "match" } else { "no match" });
            }
            if !matched {
                std::process::exit(1);
            }
        }
        Some(other) => {
            bail!("unknown command: {} (see --help)", other);
        }
        None => {
            print_help();
            bail!("expected a command: generate or compare");
        }
    }

    Ok(())
}
