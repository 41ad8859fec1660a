//! The bench module runs the codec as a set of self-checking benchmarks.
//!
//! Every benchmark follows the same contract: prepare() builds its input, run() performs one pass
//! and folds the result into an accumulator, checksum() summarizes all passes. The runner does
//! the warmup passes, times the real passes and compares the checksum against the configuration.
//!

pub mod compress;

use std::time::Instant;

use log::{error, info};
use rustc_hash::FxHashMap;

use crate::error::CodecError;
use crate::tools::config::Config;

pub trait Benchmark {
    fn name(&self) -> &'static str;

    fn prepare(&mut self) -> Result<(), CodecError> {
        Ok(())
    }

    fn run(&mut self, iteration_id: usize) -> Result<(), CodecError>;

    fn checksum(&self) -> u32;

    fn warmup(&mut self, iterations: usize) -> Result<(), CodecError> {
        (0..iterations).try_for_each(|i| self.run(i))
    }

    fn run_all(&mut self, iterations: usize) -> Result<(), CodecError> {
        (0..iterations).try_for_each(|i| self.run(i))
    }
}

/// Builds a benchmark for a given input size.
pub type Factory = fn(usize) -> Box<dyn Benchmark>;

fn boxed<B: Benchmark + 'static>(bench: B) -> Box<dyn Benchmark> {
    Box::new(bench)
}

/// All known benchmarks, in run order.
pub fn registry() -> Vec<(&'static str, Factory)> {
    let list: [(&'static str, Factory); 6] = [
        ("Compress::BWTEncode", |n| boxed(compress::BwtEncode::new(n))),
        ("Compress::BWTDecode", |n| boxed(compress::BwtDecode::new(n))),
        ("Compress::HuffEncode", |n| boxed(compress::HuffEncode::new(n))),
        ("Compress::HuffDecode", |n| boxed(compress::HuffDecode::new(n))),
        ("Compress::BWTHuffEncode", |n| boxed(compress::BwtHuffEncode::new(n))),
        ("Compress::BWTHuffDecode", |n| boxed(compress::BwtHuffDecode::new(n))),
    ];
    list.to_vec()
}

/// Totals of one runner invocation.
#[derive(Debug, Default)]
pub struct Summary {
    /// Seconds spent in the timed passes of each benchmark.
    pub results: FxHashMap<String, f64>,
    pub total_time: f64,
    pub ok: usize,
    pub fails: usize,
}

impl Summary {
    pub fn all_ok(&self) -> bool {
        self.fails == 0
    }
}

/// Case insensitive substring match of a benchmark name.
fn selected(name: &str, filter: Option<&str>) -> bool {
    match filter {
        Some(f) => name.to_lowercase().contains(&f.to_lowercase()),
        None => true,
    }
}

/// Run every registered benchmark that matches `filter`, printing one status line per benchmark
/// and a summary line. A missing or invalid config entry fails only that benchmark.
pub fn run_benchmarks(config: &Config, filter: Option<&str>) -> Summary {
    let mut summary = Summary::default();

    for (name, factory) in registry() {
        if !selected(name, filter) {
            continue;
        }
        print!("{}: ", name);
        let entry = match config.entry(name) {
            Ok(entry) => entry,
            Err(e) => {
                println!("ERR[{}]", e);
                error!("{} not configured: {}", name, e);
                summary.fails += 1;
                continue;
            }
        };
        let mut bench = factory(entry.size as usize);

        let timed = bench
            .prepare()
            .and_then(|_| bench.warmup(entry.warmup()))
            .and_then(|_| {
                let start = Instant::now();
                bench.run_all(entry.iterations as usize)?;
                Ok(start.elapsed().as_secs_f64())
            });

        let time_delta = match timed {
            Ok(t) => t,
            Err(e) => {
                println!("ERR[{}]", e);
                error!("{} failed: {}", name, e);
                summary.fails += 1;
                continue;
            }
        };
        summary.results.insert(name.to_string(), time_delta);

        let actual = bench.checksum();
        if actual == entry.checksum {
            print!("OK ");
            summary.ok += 1;
        } else {
            print!("ERR[actual={}, expected={}] ", actual, entry.checksum);
            error!("{} checksum mismatch", name);
            summary.fails += 1;
        }
        println!("in {:.3}s", time_delta);
        info!("{}: {} iterations, checksum {}", name, entry.iterations, actual);
        summary.total_time += time_delta;
    }

    println!(
        "Summary: {:.4}s, {}, {}, {}",
        summary.total_time,
        summary.ok + summary.fails,
        summary.ok,
        summary.fails
    );
    summary
}
