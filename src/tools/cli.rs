use clap::Parser;
use log::{debug, info};
use std::{fmt::Display, fmt::Formatter};

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}
impl Display for Verbosity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Verbosity {
    pub fn level_filter(self) -> log::LevelFilter {
        match self {
            Verbosity::Quiet => log::LevelFilter::Off,
            Verbosity::Errors => log::LevelFilter::Error,
            Verbosity::Warnings => log::LevelFilter::Warn,
            Verbosity::Info => log::LevelFilter::Info,
            Verbosity::Debug => log::LevelFilter::Debug,
            Verbosity::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Benchmarks for a BWT + Huffman block codec",
    long_about = "
    Runs the compression benchmarks: BWT alone, Huffman alone, and the full BWT + Huffman
    pipeline, each in an encode and a decode flavour. Every benchmark checks its checksum
    against the value in the configuration file."
)]
pub struct Args {
    /// Only run benchmarks whose name contains this text (case insensitive)
    #[clap()]
    filter: Option<String>,

    /// JSON configuration file. The built in configuration is used if absent
    #[clap(short = 'c', long = "config")]
    config: Option<String>,

    /// Write the timing of each benchmark as JSON to this file
    #[clap(long = "results")]
    results: Option<String>,

    /// Be verbose (a 2nd -v gives more)
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress noncritical messages
    #[clap(short = 'q', long = "quiet")]
    quiet: bool,

    /// List the benchmark names and exit
    #[clap(long = "list")]
    list: bool,
}

#[derive(Debug)]
pub struct BenchOpts {
    /// Substring selecting which benchmarks to run
    pub filter: Option<String>,
    /// Configuration file
    pub config: Option<String>,
    /// Where to write timing results
    pub results: Option<String>,
    /// Only list the benchmarks
    pub list: bool,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl From<Args> for BenchOpts {
    fn from(args: Args) -> Self {
        let verbose = if args.quiet {
            Verbosity::Quiet
        } else {
            match args.verbose {
                0 => Verbosity::Warnings,
                1 => Verbosity::Info,
                2 => Verbosity::Debug,
                _ => Verbosity::Trace,
            }
        };
        Self {
            filter: args.filter,
            config: args.config,
            results: args.results,
            list: args.list,
            verbose,
        }
    }
}

/// Parse the command line and set the log level to match.
pub fn bench_opts_init() -> BenchOpts {
    let opts = BenchOpts::from(Args::parse());
    log::set_max_level(opts.verbose.level_filter());

    // Below we report initialization status to the user
    info!("Verbosity set to {}", opts.verbose);
    match &opts.config {
        Some(s) => info!("Getting config from the file {}", s),
        None => info!("Using the built in config"),
    }
    if let Some(f) = &opts.filter {
        debug!("Only running benchmarks matching {}", f);
    }
    opts
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse(args: &[&str]) -> BenchOpts {
        BenchOpts::from(Args::try_parse_from(args).unwrap())
    }

    #[test]
    fn defaults_test() {
        let o = parse(&["bwthuff"]);
        assert_eq!(o.filter, None);
        assert_eq!(o.config, None);
        assert!(!o.list);
        assert_eq!(o.verbose, Verbosity::Warnings);
    }

    #[test]
    fn flags_test() {
        let o = parse(&["bwthuff", "huff", "-c", "test.json", "--results", "out.json", "-vv"]);
        assert_eq!(o.filter.as_deref(), Some("huff"));
        assert_eq!(o.config.as_deref(), Some("test.json"));
        assert_eq!(o.results.as_deref(), Some("out.json"));
        assert_eq!(o.verbose, Verbosity::Debug);
    }

    #[test]
    fn quiet_wins_test() {
        let o = parse(&["bwthuff", "-vvv", "-q"]);
        assert_eq!(o.verbose, Verbosity::Quiet);
        assert_eq!(o.verbose.level_filter(), log::LevelFilter::Off);
    }
}
