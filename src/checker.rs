//! Checker: load a dictionary into a `HashTable`, then report query words
//! that are not in it.

use crate::container::ContainerKind;
use crate::error::Error;
use crate::hash_table::{HashTable, InsertError};
use crate::tokenizer::words;
use std::io::{BufRead, Write};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Table size used when none is given; prime.
pub const DEFAULT_TABLE_SIZE: usize = 3877;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CheckConfig {
    pub table_size: usize,
    pub container: ContainerKind,
    /// Dump the table after the unknown words.
    pub print_table: bool,
    /// Print fill/search timings and the unknown word count.
    pub report_stats: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            table_size: DEFAULT_TABLE_SIZE,
            container: ContainerKind::default(),
            print_table: false,
            report_stats: false,
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CheckReport {
    /// Dictionary words stored in the table.
    pub words_loaded: usize,
    /// Dictionary words dropped because the table was full.
    pub words_rejected: usize,
    pub words_checked: usize,
    pub unknown_words: usize,
    /// Distinct bucket keys in the table.
    pub buckets_used: usize,
    pub fill_time: Duration,
    pub search_time: Duration,
}

/// Build the table from `dictionary`, write every word of `queries` missing
/// from it to `out` (one per line), then the optional dump and stats.
pub fn run<D, Q, W>(
    config: &CheckConfig,
    dictionary: D,
    queries: Q,
    out: &mut W,
) -> Result<CheckReport, Error>
where
    D: BufRead,
    Q: BufRead,
    W: Write,
{
    let mut table = HashTable::new(config.table_size, config.container)?;
    let mut report = CheckReport::default();

    let start = Instant::now();
    for word in words(dictionary) {
        let word = word?;
        match table.insert(&word) {
            Ok(_) => report.words_loaded += 1,
            Err(InsertError::TableFull) => report.words_rejected += 1,
            Err(InsertError::EmptyWord) => {}
        }
    }
    report.fill_time = start.elapsed();
    report.buckets_used = table.len();
    debug!(
        loaded = report.words_loaded,
        buckets = report.buckets_used,
        elapsed = ?report.fill_time,
        "dictionary loaded"
    );
    if report.words_rejected > 0 {
        warn!(
            rejected = report.words_rejected,
            capacity = table.capacity(),
            "hash table full; some dictionary words were dropped"
        );
    }

    let start = Instant::now();
    for word in words(queries) {
        let word = word?;
        report.words_checked += 1;
        if !table.search(&word) {
            writeln!(out, "{word}")?;
            report.unknown_words += 1;
        }
    }
    report.search_time = start.elapsed();
    info!(
        checked = report.words_checked,
        unknown = report.unknown_words,
        "search finished"
    );

    if config.print_table {
        write!(out, "\n\n")?;
        table.print(out)?;
    }
    if config.report_stats {
        write!(
            out,
            "\n\nFill Time: {:.6}\nSearch Time: {:.6}\nUnknown Words: {}\n",
            report.fill_time.as_secs_f64(),
            report.search_time.as_secs_f64(),
            report.unknown_words
        )?;
    }
    Ok(report)
}
