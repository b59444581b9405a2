#![deny(unsafe_code, missing_docs, non_snake_case)]

//! `gol`: run a Game of Life configuration file in one of three output modes.

mod ascii;
mod input;
mod terminal;

use std::io;
use std::ops::ControlFlow;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use lifegrid::engine::{
    animate, AnimationBridge, LockstepWorld, OutputMode, Palette, RunConfig, DEFAULT_PACING,
};

use crate::ascii::AsciiDumper;
use crate::terminal::TerminalDisplay;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Configuration file: `rows cols iterations pairs` followed by the live cells.
    #[arg(value_name = "INFILE")]
    infile: PathBuf,

    /// Output mode: 0|none, 1|ascii, 2|visual.
    #[arg(value_name = "MODE")]
    mode: OutputMode,

    /// Delay after each generation in the ascii and visual modes.
    #[arg(
        long = "delay-ms",
        value_name = "MS",
        default_value_t = DEFAULT_PACING.as_millis() as u64
    )]
    delay_ms: u64,

    /// Do not clear the terminal between ascii frames.
    #[arg(long = "no-clear")]
    no_clear: bool,
}

impl CliArgs {
    fn run_config(&self) -> RunConfig {
        RunConfig {
            output: self.mode,
            pacing: Duration::from_millis(self.delay_ms),
            clear_screen: !self.no_clear,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = CliArgs::parse();
    let run = args.run_config();

    let config = input::read_config(&args.infile).with_context(|| {
        format!(
            "initialization error: file {}, mode {}",
            args.infile.display(),
            args.mode
        )
    })?;
    let world = LockstepWorld::new(config).context("initialization error")?;
    log::info!("output mode {}, pacing {:?}", run.output, run.effective_pacing());

    let start = Instant::now();
    let world = match run.output {
        OutputMode::None => run_silent(world)?,
        OutputMode::Ascii => run_ascii(world, &run)?,
        OutputMode::Visual => run_visual(world, &run)?,
    };
    let secs = start.elapsed().as_secs_f64();

    if run.output != OutputMode::Visual {
        println!("Total time: {secs:.3} seconds");
        println!(
            "Number of live cells after {} rounds: {}\n",
            world.iterations(),
            world.live_cells()
        );
    }
    Ok(())
}

fn run_silent(mut world: LockstepWorld) -> Result<LockstepWorld> {
    world.play(None, |_| ControlFlow::Continue(()))?;
    Ok(world)
}

fn run_ascii(mut world: LockstepWorld, run: &RunConfig) -> Result<LockstepWorld> {
    let mut dumper = AsciiDumper::new(io::stderr().lock(), run.clear_screen);
    dumper
        .dump(&world.snapshot(), world.live_cells())
        .context("writing initial board")?;

    let mut write_error = None;
    world.play(run.effective_pacing(), |result| {
        match dumper.dump(&result.snapshot, result.metrics.live_cells) {
            Ok(()) => ControlFlow::Continue(()),
            Err(e) => {
                write_error = Some(e);
                ControlFlow::Break(())
            }
        }
    })?;
    if let Some(e) = write_error {
        return Err(e).context("writing board");
    }

    dumper
        .dump(&world.snapshot(), world.live_cells())
        .context("writing final board")?;
    Ok(world)
}

fn run_visual(world: LockstepWorld, run: &RunConfig) -> Result<LockstepWorld> {
    let space = *world.space();
    let iterations = world.iterations();
    let palette = Palette::default();
    let pacing = run.effective_pacing();

    let handle = AnimationBridge::new(space.rows(), space.cols())
        .start(move |w, tx| animate(w, tx, palette, pacing), world)
        .context("starting animation")?;
    let mut display = TerminalDisplay::new(io::stdout().lock());
    let world = handle.run_event_loop(&mut display, iterations)??;
    Ok(world)
}
