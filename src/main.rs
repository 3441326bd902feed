//! Code Terrain headless runner
//!
//! Loads every level from a directory, then lets the autopilot play through
//! them at a fixed tick rate. Frames can be dumped as ASCII art.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;

use code_terrain::Config;
use code_terrain::levels::load_level_dir;
use code_terrain::renderer::AsciiFrame;
use code_terrain::sim::autopilot::DEFAULT_STALL_TICKS;
use code_terrain::sim::{Autopilot, FixedTimestep, GameEvent, GameState, LevelSet, RunPhase, tick};

#[derive(Debug, Parser)]
#[command(version, about = "Play source code as terrain")]
struct Args {
    /// Directory with one source file per level (played in file-name order)
    #[arg(short, long, default_value = "levels")]
    levels: PathBuf,

    /// JSON file overriding game tunables
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Quit after this many ticks
    #[arg(long, default_value_t = 60 * 60 * 10)]
    max_ticks: u64,

    /// Pace ticks against the wall clock instead of running flat out
    #[arg(long)]
    realtime: bool,

    /// Print an ASCII frame every N ticks (0 disables)
    #[arg(long, default_value_t = 0)]
    ascii_every: u64,

    /// Ticks without progress before the autopilot skips a level
    #[arg(long, default_value_t = DEFAULT_STALL_TICKS)]
    stall_ticks: u32,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::default(),
    };

    let sources = load_level_dir(&args.levels, config.tab_width)
        .with_context(|| format!("loading levels from {}", args.levels.display()))?;
    let levels = LevelSet::from_sources(&sources, &config).context("building levels")?;

    log::info!("Code Terrain starting with {} levels", levels.len());
    let mut state = GameState::new(config, levels);
    run(&mut state, &args);

    let summary = match state.phase {
        RunPhase::Finished => "cleared every level",
        RunPhase::Quit => "quit",
        RunPhase::Playing => "stopped",
    };
    println!(
        "Run {summary} after {} ticks on level {}/{} (`{}`)",
        state.time_ticks,
        state.levels.current_index() + 1,
        state.levels.len(),
        state.level().name
    );
    Ok(())
}

/// Main loop: gather input, tick, report, optionally pace to the tick rate
fn run(state: &mut GameState, args: &Args) {
    let mut pilot = Autopilot::new(args.stall_ticks);
    let mut timestep = FixedTimestep::new(state.config.dt());
    let tick_duration = Duration::from_secs_f32(timestep.dt());
    let mut frame = AsciiFrame::new(
        120,
        30,
        state.config.screen_width,
        state.config.screen_height,
    );
    let mut last_frame = Instant::now();

    while state.is_running() {
        let substeps = if args.realtime {
            std::thread::sleep(tick_duration.saturating_sub(last_frame.elapsed()));
            let now = Instant::now();
            let elapsed = now.duration_since(last_frame).as_secs_f32();
            last_frame = now;
            timestep.advance(elapsed)
        } else {
            1
        };

        for _ in 0..substeps {
            let mut input = pilot.next_input(state);
            if state.time_ticks >= args.max_ticks {
                input.quit_requested = true;
            }
            tick(state, &input);

            for event in state.drain_events() {
                match event {
                    GameEvent::Jumped | GameEvent::Landed => log::trace!("{event:?}"),
                    _ => log::debug!("{event:?}"),
                }
            }

            if args.ascii_every > 0 && state.time_ticks % args.ascii_every == 0 {
                state.render(&mut frame);
                println!("tick {} `{}`\n{frame}", state.time_ticks, state.level().name);
            }

            if !state.is_running() {
                break;
            }
        }
    }
}
