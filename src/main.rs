//! CLI for keytext - resolves the text shown for an animation keypath

use clap::Parser;
use keytext::case_insensitive::overlay_case_insensitive;
use keytext::{Error, MapResolver, PassthroughResolver, Result, TextResolver};
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Keypath of the text node (e.g. "Intro.Title")
    keypath: String,

    /// Text authored in the animation file, used when the keypath is not mapped
    #[arg(default_value = "")]
    source: String,

    /// Mapping file (JSON, or TOML by extension). May be repeated; later files win
    #[arg(long = "map", value_name = "FILE")]
    maps: Vec<PathBuf>,

    /// Inline mapping entry, applied after mapping files. May be repeated
    #[arg(long = "set", value_name = "KEY=VALUE")]
    entries: Vec<String>,

    /// Reject keys in a mapping file that only differ by case
    #[arg(long)]
    strict: bool,

    /// Ignore all mappings and print the source text
    #[arg(long)]
    passthrough: bool,

    /// Print lookup diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    if args.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_writer(std::io::stderr)
            .init();
    }

    match build_resolver(&args) {
        Ok(resolver) => {
            println!("{}", resolver.resolve(&args.keypath, &args.source));
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn build_resolver(args: &Args) -> Result<Box<dyn TextResolver>> {
    if args.passthrough {
        return Ok(Box::new(PassthroughResolver));
    }

    let mut values = HashMap::new();
    for path in &args.maps {
        let table = if args.strict {
            MapResolver::try_new(keytext::loader::load_mapping(path)?)?
        } else {
            MapResolver::from_path(path)?
        };
        overlay_case_insensitive(&mut values, table.values().clone());
    }

    for entry in &args.entries {
        let (key, value) = parse_entry(entry)?;
        let layer = HashMap::from([(key.to_string(), value.to_string())]);
        overlay_case_insensitive(&mut values, layer);
    }

    Ok(Box::new(MapResolver::new(values)))
}

fn parse_entry(entry: &str) -> Result<(&str, &str)> {
    match entry.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value)),
        _ => Err(Error::InvalidEntry(entry.to_string())),
    }
}
