//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use bwthuff::bench::{registry, run_benchmarks};
use bwthuff::tools::cli::bench_opts_init;
use bwthuff::tools::config;

use log::{info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() -> Result<(), std::io::Error> {
    // Available log levels are Error, Warn, Info, Debug, Trace. The cli narrows this down.
    if let Err(e) = TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("Unable to start the logger: {}", e);
    }

    let options = bench_opts_init();

    if options.list {
        registry().iter().for_each(|(name, _)| println!("{}", name));
        return Ok(());
    }

    let config = config::Config::load(options.config.as_deref())?;

    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    println!("start: {}", now);

    let summary = run_benchmarks(&config, options.filter.as_deref());

    if let Some(path) = &options.results {
        let json = serde_json::to_string(&summary.results)?;
        std::fs::write(path, json)?;
        info!("Wrote results to {}", path);
    }

    info!("Done.\n");
    if !summary.all_ok() {
        std::process::exit(1);
    }
    Ok(())
}
