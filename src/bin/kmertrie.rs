// Copyright 2025 kmertrie contributors. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Command-line driver: build a trie from a DNA sequence and run scan-key
//! queries against it.
//!
//! Grounded on the teacher's `src/bin/commands/*` split (one function per
//! subcommand, `anyhow::Context` for error messages) generalized to clap's
//! derive API instead of hand-parsed `std::env::args`.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use kmertrie::kmer::{Dna, Kmer, QKmer};
use kmertrie::trie::{ScanKey, TrieIndex};

#[derive(Parser)]
#[command(name = "kmertrie", version, about = "DNA k-mer radix trie index")]
struct Cli {
    /// Source DNA sequence every k-mer is drawn from.
    #[arg(long)]
    sequence: String,

    /// K-mer window length.
    #[arg(long)]
    window: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every k-mer window, in sequence order.
    List,
    /// Look up one exact k-mer.
    Eq { kmer: String },
    /// List every k-mer with the given prefix.
    Prefix { prefix: String },
    /// List every k-mer matching an IUPAC ambiguity pattern.
    Contains { pattern: String },
    /// List every k-mer within an inclusive range.
    Range { low: String, high: String },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let dna = Dna::new(cli.sequence.as_bytes())
        .with_context(|| format!("invalid DNA sequence {:?}", cli.sequence))?;

    let mut index: TrieIndex<usize> = TrieIndex::new();
    for (offset, kmer) in dna
        .kmers(cli.window)
        .with_context(|| format!("invalid window {} for sequence of length {}", cli.window, dna.len()))?
        .enumerate()
    {
        index.insert(kmer, offset);
    }

    let hits = match cli.command {
        Command::List => index.scan(&[]),
        Command::Eq { kmer } => {
            let kmer = Kmer::new(kmer.as_bytes()).context("invalid k-mer")?;
            index.eq(kmer)
        }
        Command::Prefix { prefix } => {
            let prefix = Kmer::new(prefix.as_bytes()).context("invalid prefix k-mer")?;
            index.prefix(prefix)
        }
        Command::Contains { pattern } => {
            let pattern = QKmer::new(pattern.as_bytes()).context("invalid IUPAC pattern")?;
            index.contains(pattern)
        }
        Command::Range { low, high } => {
            let low = Kmer::new(low.as_bytes()).context("invalid range start")?;
            let high = Kmer::new(high.as_bytes()).context("invalid range end")?;
            index.range(low, high)
        }
    };

    let mut hits = hits;
    hits.sort_by(|a, b| a.1.cmp(&b.1));
    for (kmer, offset) in hits {
        println!("{}\t{}", offset, kmer);
    }

    Ok(())
}
