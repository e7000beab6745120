use anyhow::Context;
use clap::Parser;
use rayon::prelude::*;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mmnames_rs::Converter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Names to convert
    names: Vec<String>,

    /// Dictionary directory (defaults to $MMNAMES_DATA_DIR, then the bundled data/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Input text file, one name per line
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file (JSONL); results go to stdout otherwise
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print syllables instead of converting
    #[arg(short, long)]
    segment: bool,

    /// Limit number of names to process
    #[arg(short, long)]
    limit: Option<usize>,

    /// Log dictionary loading
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct Record<'a> {
    id: usize,
    input: &'a str,
    syllables: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    latin: Option<String>,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "mmnames_rs=debug" } else { "mmnames_rs=warn" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(true)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .init();
}

fn read_names(args: &Args) -> anyhow::Result<Vec<String>> {
    let mut names: Vec<String> = args
        .names
        .iter()
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .collect();

    if let Some(ref path) = args.input {
        let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
        let reader = BufReader::new(file);
        for line in reader.lines() {
            let line = line.with_context(|| format!("reading {}", path.display()))?;
            let line = line.trim();
            if !line.is_empty() {
                names.push(line.to_string());
            }
        }
    }

    if let Some(limit) = args.limit {
        names.truncate(limit);
    }
    Ok(names)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let converter = Converter::new(args.data_dir.as_deref())?;
    info!(root = %converter.dictionary().source().root().display(), "dictionary root");

    let names = read_names(&args)?;
    if names.is_empty() {
        anyhow::bail!("no names given; pass them as arguments or with --input");
    }
    info!(count = names.len(), "processing names");

    // each worker owns its converter; the lazy dictionary is not shared
    let records: Vec<Record> = names
        .par_iter()
        .enumerate()
        .map_init(
            || converter.clone(),
            |conv, (id, name)| {
                if args.segment {
                    Record {
                        id,
                        input: name,
                        syllables: conv.segment(name),
                        latin: None,
                    }
                } else {
                    let conversion = conv.explain(name);
                    Record {
                        id,
                        input: name,
                        syllables: conversion.syllables.into_iter().map(|s| s.syllable).collect(),
                        latin: Some(conversion.latin),
                    }
                }
            },
        )
        .collect();

    if let Some(ref output_path) = args.output {
        let output_file =
            File::create(output_path).with_context(|| format!("creating {}", output_path.display()))?;
        let mut writer = BufWriter::new(output_file);
        for record in &records {
            serde_json::to_writer(&mut writer, record)?;
            writeln!(writer)?;
        }
        writer.flush()?;
        info!(path = %output_path.display(), "saved results");
    } else {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        for record in &records {
            match record.latin {
                Some(ref latin) => writeln!(out, "{} => {}", record.input, latin)?,
                None => writeln!(out, "{} => {}", record.input, record.syllables.join(" | "))?,
            }
        }
    }

    Ok(())
}
