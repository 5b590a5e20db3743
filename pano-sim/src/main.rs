//! `pano-sim`: run the canvas engine headless against a scripted session.

mod fixtures;
mod script;
mod session;
mod sink;

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use env_logger::{Builder, Target};
use log::LevelFilter;
use pano_core::model::Viewport;
use pano_core::{GalleryCanvas, InMemoryProvider};

use crate::script::{Script, ScriptDriver};
use crate::session::Session;
use crate::sink::QueueSink;

#[derive(Debug, Parser)]
#[command(
    name = "pano-sim",
    about = "Drive the Pano canvas engine headless on a virtual clock"
)]
struct Cli {
    /// Canvas config file (TOML, or JSON with a .json extension)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Number of 16 ms frames to simulate
    #[arg(long, default_value_t = 600)]
    frames: u64,
    #[arg(long, default_value_t = 1280.0)]
    width: f64,
    #[arg(long, default_value_t = 800.0)]
    height: f64,
    /// Fixture galleries to generate
    #[arg(long, default_value_t = 12)]
    galleries: usize,
    /// Images per fixture gallery
    #[arg(long, default_value_t = 8)]
    images: usize,
    #[arg(long, value_enum, default_value_t = Script::Idle)]
    script: Script,
    /// Seed for the wander script
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, value_enum, default_value_t = OutputFormat::Summary)]
    format: OutputFormat,
    /// Debug logging for the pano crates (ignored when RUST_LOG is set)
    #[arg(long, short)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One JSON object per sink push or canvas event
    Json,
    /// Counters and final camera state
    Summary,
}

fn init_logger(verbose: bool) {
    if std::env::var("RUST_LOG").is_ok() {
        env_logger::Builder::from_default_env()
            .target(Target::Stderr)
            .init();
        return;
    }
    let pano_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    Builder::new()
        .target(Target::Stderr)
        .filter_level(LevelFilter::Warn)
        .filter_module("pano_core", pano_level)
        .filter_module("pano_config", pano_level)
        .filter_module("pano_sim", pano_level)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config = match cli.config.as_deref() {
        Some(path) => pano_config::load(Some(path)).with_context(|| {
            format!("failed to load canvas config {}", path.display())
        })?,
        None => {
            let (config, source) = pano_config::load_default()
                .context("failed to load canvas config")?;
            log::info!("canvas config source: {source:?}");
            config
        }
    };

    let galleries = fixtures::galleries(cli.galleries, cli.images)?;
    let sink = QueueSink::new(cli.format == OutputFormat::Json);
    let canvas = GalleryCanvas::new(
        config,
        InMemoryProvider::new(galleries),
        Box::new(sink.clone()),
        Box::new(true),
    )
    .context("invalid canvas config")?;

    let viewport = Viewport::new(cli.width, cli.height);
    let session = Session {
        canvas,
        sink,
        driver: ScriptDriver::new(cli.script, viewport, cli.seed),
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match cli.format {
        OutputFormat::Json => {
            session.run(viewport, cli.frames, Some(&mut out as &mut dyn Write))?;
        }
        OutputFormat::Summary => {
            let summary = session.run(viewport, cli.frames, None)?;
            writeln!(out, "{summary}")?;
        }
    }
    out.flush().context("failed to flush output")?;
    Ok(())
}
