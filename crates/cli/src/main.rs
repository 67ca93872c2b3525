use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use sha3nist_corelib as core;
use sha3nist_corelib::config::{Config, Padding};

const EXIT_HASH_FAILED: u8 = 1;
const EXIT_BAD_ARGS: u8 = 2;

#[derive(Parser)]
#[command(name = "sha3nist", version, about = "Streaming SHA-3 / Keccak hashing")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Hash a message given as hex, a file, or stdin
    Hash(HashArgs),
    /// List supported variants
    Variants {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(clap::Args)]
struct HashArgs {
    /// Variant id, e.g. sha3-256 or keccak
    #[arg(long, conflicts_with_all = ["bits", "config"])]
    variant: Option<String>,
    /// Output length in bits (0, 224, 256, 384, 512)
    #[arg(long)]
    bits: Option<u32>,
    /// Padding: sha3 or keccak
    #[arg(long, default_value = "sha3")]
    padding: Padding,
    /// TOML or JSON job description
    #[arg(long, conflicts_with = "bits")]
    config: Option<PathBuf>,
    /// Bits to squeeze in arbitrary-length mode
    #[arg(long)]
    squeeze_bits: Option<usize>,
    /// Message as hex
    #[arg(long, conflicts_with = "file")]
    hex: Option<String>,
    /// Message file
    #[arg(long)]
    file: Option<PathBuf>,
    /// Number of significant message bits (defaults to every byte)
    #[arg(long)]
    bit_len: Option<usize>,
    /// Emit JSON instead of a bare digest
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct HashReport<'a> {
    output_bits: u32,
    padding: Padding,
    bit_len: usize,
    digest: &'a str,
}

#[derive(Serialize)]
struct VariantRow {
    id: &'static str,
    output_bits: u32,
    padding: Padding,
    rate: u32,
    capacity: u32,
}

fn resolve_config(args: &HashArgs) -> Result<Config> {
    let mut cfg = if let Some(path) = &args.config {
        Config::load(path)?
    } else if let Some(id) = &args.variant {
        core::registry::variant_by_id(id)
            .ok_or_else(|| anyhow!("unknown variant '{id}'"))?
            .config()
    } else {
        Config::new(args.bits.unwrap_or(256), args.padding)
    };
    if args.squeeze_bits.is_some() {
        cfg.squeeze_bits = args.squeeze_bits;
    }
    cfg.validate()?;
    Ok(cfg)
}

fn read_message(args: &HashArgs) -> Result<Vec<u8>> {
    if let Some(h) = &args.hex {
        return hex::decode(h.trim()).context("decoding --hex");
    }
    if let Some(path) = &args.file {
        return fs::read(path).with_context(|| format!("reading {}", path.display()));
    }
    let mut buf = Vec::new();
    io::stdin()
        .read_to_end(&mut buf)
        .context("reading stdin")?;
    Ok(buf)
}

fn cmd_hash(args: &HashArgs) -> Result<(), (u8, anyhow::Error)> {
    let cfg = resolve_config(args).map_err(|e| (EXIT_BAD_ARGS, e))?;
    let msg = read_message(args).map_err(|e| (EXIT_BAD_ARGS, e))?;
    let bit_len = args.bit_len.unwrap_or(msg.len() * 8);

    let digest = cfg
        .digest(&msg, bit_len)
        .map_err(|e| (EXIT_HASH_FAILED, anyhow::Error::new(e)))?;
    let digest = hex::encode(digest);

    if args.json {
        let report = HashReport {
            output_bits: cfg.output_bits,
            padding: cfg.padding,
            bit_len,
            digest: &digest,
        };
        let line = serde_json::to_string(&report).map_err(|e| (EXIT_HASH_FAILED, e.into()))?;
        println!("{line}");
    } else {
        println!("{digest}");
    }
    Ok(())
}

fn cmd_variants(json: bool) -> Result<()> {
    let mut rows = Vec::new();
    for v in core::registry::list_variants() {
        let params = v.parameters()?;
        rows.push(VariantRow {
            id: v.id,
            output_bits: v.output_bits,
            padding: v.padding,
            rate: params.rate,
            capacity: params.capacity,
        });
    }
    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for r in rows {
            println!(
                "{:<11} bits={:<3} padding={:<6} r={} c={}",
                r.id, r.output_bits, r.padding, r.rate, r.capacity
            );
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let result = match cli.command {
        Some(Commands::Hash(args)) => cmd_hash(&args),
        Some(Commands::Variants { json }) => {
            cmd_variants(json).map_err(|e| (EXIT_HASH_FAILED, e))
        }
        None => {
            println!("sha3nist {} ready", core::version());
            println!("Try: `sha3nist hash --variant sha3-256 --hex 616263` or `sha3nist variants`");
            Ok(())
        }
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err((code, e)) => {
            eprintln!("error: {e:#}");
            ExitCode::from(code)
        }
    }
}
