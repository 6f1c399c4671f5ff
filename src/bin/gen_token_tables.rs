// src/bin/gen_token_tables.rs
// Compile the token registry into the descriptor table the scanner includes.
// Usage:
//   cargo run --bin gen_token_tables                       # builtin registry -> tokens.h
//   cargo run --bin gen_token_tables -- --format rust --out src/tokens.rs
//   cargo run --bin gen_token_tables -- --registry tokens.json --manifest tokens.json.out
//   cargo run --bin gen_token_tables -- --check            # fail if tokens.h is stale

use std::{fs, path::PathBuf, process::ExitCode};

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use lextab::tables::{
    CHeader, EmitOptions, Emitter, RustModule, builtin, compile_tables, load_registry_file,
    save_manifest_json, write_tables,
};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    C,
    Rust,
}

#[derive(Parser, Debug)]
#[command(version, about = "Compile a token registry into scanner tables", long_about = None)]
struct Args {
    /// Registry JSON file; the builtin registry is used when omitted.
    #[arg(short, long)]
    registry: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = Format::C)]
    format: Format,

    /// Output path (default: tokens.h or tokens.rs).
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Also write a JSON manifest of descriptors and ids.
    #[arg(short, long)]
    manifest: Option<PathBuf>,

    /// C include guard. Ignored, with a warning, for Rust output.
    #[arg(long)]
    guard: Option<String>,

    /// Compare with the existing output instead of writing it.
    #[arg(long)]
    check: bool,
}

fn emitter_for(args: &Args) -> Box<dyn Emitter> {
    match args.format {
        Format::C => {
            let mut options = EmitOptions::default();
            if let Some(guard) = &args.guard {
                options.include_guard = guard.clone();
            }
            Box::new(CHeader::new(options))
        }
        Format::Rust => {
            if args.guard.is_some() {
                log::warn!("--guard has no effect on Rust output");
            }
            Box::new(RustModule::new(EmitOptions::rust_defaults()))
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let spec = match &args.registry {
        Some(path) => load_registry_file(path).map_err(anyhow::Error::msg)?,
        None => builtin::registry(),
    };

    let emitter = emitter_for(args);
    let out_path = args
        .out
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("tokens.{}", emitter.extension())));

    println!("[gen_token_tables] compiling {} definitions…", spec.definitions.len());

    if args.check {
        let text = compile_tables(&spec, emitter.as_ref()).context("token registry rejected")?;
        let current = fs::read_to_string(&out_path)
            .with_context(|| format!("failed to read {}", out_path.display()))?;
        if current != text {
            bail!("{} is stale; rerun gen_token_tables", out_path.display());
        }
        println!("[gen_token_tables] {} is up to date", out_path.display());
        return Ok(());
    }

    let ordered = write_tables(&spec, emitter.as_ref(), &out_path)?;
    println!("[gen_token_tables] wrote {}", out_path.display());

    if let Some(manifest) = &args.manifest {
        save_manifest_json(manifest, &ordered)?;
        println!("[gen_token_tables] wrote {}", manifest.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
