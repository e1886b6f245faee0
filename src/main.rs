use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use force_align::pipeline::{AlignmentPipeline, PipelineConfig};
use force_align::symmetrizer::Heuristic;
use force_align::utils;

#[derive(Parser)]
#[command(name = "force-align")]
#[command(about = "Align new parallel data with a trained fast_align model", long_about = None)]
#[command(version)]
#[command(after_help = "Train the models first:\n  \
    fast_align -i corpus.f-e -d -v -o -p fwd_params >fwd_align 2>fwd_err\n  \
    fast_align -i corpus.f-e -r -d -v -o -p rev_params >rev_align 2>rev_err\n\
    then feed sentence pairs (`source ||| target`, one per line) on stdin.")]
struct Cli {
    /// Forward model file (written by fast_align -p)
    #[arg(value_name = "FWD_PARAMS")]
    fwd_params: PathBuf,

    /// Forward training error log (fast_align's stderr)
    #[arg(value_name = "FWD_ERR")]
    fwd_err: PathBuf,

    /// Reverse model file (written by fast_align -r -p)
    #[arg(value_name = "REV_PARAMS")]
    rev_params: PathBuf,

    /// Reverse training error log
    #[arg(value_name = "REV_ERR")]
    rev_err: PathBuf,

    /// Symmetrization heuristic
    #[arg(value_enum, value_name = "HEURISTIC", default_value = "grow-diag-final-and")]
    heuristic: Heuristic,

    /// Input sentence pairs, one per line ("-" = stdin, .gz accepted)
    #[arg(short = 'i', long, value_name = "FILE", default_value = "-")]
    input: PathBuf,

    /// fast_align executable
    #[arg(long, value_name = "PATH", default_value = "fast_align")]
    fast_align: PathBuf,

    /// atools executable
    #[arg(long, value_name = "PATH", default_value = "atools")]
    atools: PathBuf,

    /// Verbosity level (1=error, 2=warning, 3=message, 4=debug, 5+=trace)
    #[arg(short = 'v', long, value_name = "INT", default_value = "3")]
    verbosity: u32,
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbosity {
        v if v <= 1 => log::LevelFilter::Error,
        2 => log::LevelFilter::Warn,
        3 => log::LevelFilter::Info,
        4 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .format_timestamp(None)
        .format_target(false)
        .init();

    if let Err(e) = run(&cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = PipelineConfig {
        fwd_model: cli.fwd_params.clone(),
        fwd_err: cli.fwd_err.clone(),
        rev_model: cli.rev_params.clone(),
        rev_err: cli.rev_err.clone(),
        heuristic: cli.heuristic,
        fast_align: cli.fast_align.clone(),
        atools: cli.atools.clone(),
    };
    let mut pipeline = AlignmentPipeline::new(&config)?;

    let input = utils::open_input(&cli.input)
        .map_err(|e| anyhow::anyhow!("Error opening input {}: {}", cli.input.display(), e))?;
    let mut writer = io::stdout().lock();

    let start = utils::realtime();
    let mut pairs = 0u64;

    for line in input.lines() {
        let line = line.map_err(|e| anyhow::anyhow!("Error reading input: {}", e))?;
        let merged = pipeline.align(line.trim())?;
        // One merged alignment per input line, flushed immediately so a
        // downstream consumer sees results as they are produced.
        writeln!(writer, "{}", merged)
            .map_err(|e| anyhow::anyhow!("Error writing alignment: {}", e))?;
        writer
            .flush()
            .map_err(|e| anyhow::anyhow!("Error flushing output: {}", e))?;
        pairs += 1;
    }

    pipeline.close()?;
    log::info!(
        "Processed {} sentence pairs in {:.2} sec",
        pairs,
        utils::realtime() - start
    );
    Ok(())
}
