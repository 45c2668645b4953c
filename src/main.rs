//! word-dict: load a vocabulary file, then print every word read from stdin
//! that is not in it.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use word_dict::{checker::DEFAULT_TABLE_SIZE, CheckConfig, ContainerKind};

#[derive(Parser)]
#[command(name = "word-dict")]
#[command(about = "Stores words from DICTIONARY in a hash table, then prints words read from stdin that it does not contain")]
#[command(version)]
struct Cli {
    /// Use a red-black tree as the per-bucket container
    #[arg(short = 'r', long = "rbt")]
    rbt: bool,

    /// Number of hash table slots
    #[arg(short = 's', long = "size", default_value_t = DEFAULT_TABLE_SIZE)]
    size: usize,

    /// Print the hash table to stdout, one line per container
    #[arg(short = 'p', long = "print")]
    print: bool,

    /// Print fill time, search time and the unknown word count
    #[arg(short = 'i', long = "info")]
    info: bool,

    /// Enable verbose logging on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Vocabulary file to load
    dictionary: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "word_dict=debug"
    } else {
        "word_dict=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = CheckConfig {
        table_size: cli.size,
        container: if cli.rbt {
            ContainerKind::RedBlackTree
        } else {
            ContainerKind::FlexArray
        },
        print_table: cli.print,
        report_stats: cli.info,
    };

    let dictionary = File::open(&cli.dictionary)
        .with_context(|| format!("opening dictionary {}", cli.dictionary.display()))?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    word_dict::run(&config, BufReader::new(dictionary), stdin.lock(), &mut out)?;
    out.flush()?;
    Ok(())
}
