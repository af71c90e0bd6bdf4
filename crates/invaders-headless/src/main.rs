//! invaders-headless: run the game loop without a window.
//!
//! Drives the coordinator with a fixed-timestep clock, scripted input and a
//! recording canvas, then logs a summary. Used as a smoke test.
//!
//! Usage:
//!   invaders-headless --duration-ms 5000 --frame-ms 7
//!   invaders-headless --config invaders.json --debug-colliders

use std::path::PathBuf;
use std::process;

use env_logger::Env;
use log::{error, info};

use invaders_core::config::CoreConfig;
use invaders_core::constants::{SCREEN_HEIGHT, SCREEN_WIDTH, SMOKE_TEST_DURATION_MS};
use invaders_core::enums::EntityKind;
use invaders_core::error::EcsError;
use invaders_core::input::{InputEvent, Key};
use invaders_core::render::{DrawCall, RecordingCanvas};
use invaders_core::types::Viewport;
use invaders_sim::timestep::FixedTimestep;
use invaders_sim::Coordinator;

/// Ticks between scripted direction changes and shots.
const STRAFE_TICKS: u64 = 90;
const FIRE_TICKS: u64 = 20;

struct Options {
    config: Option<PathBuf>,
    duration_ms: u64,
    frame_ms: u64,
    debug_colliders: bool,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "help" || a == "--help" || a == "-h") {
        print_usage();
        return;
    }

    let options = parse_options(&args);
    let mut config = match &options.config {
        Some(path) => match CoreConfig::load(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error: {}: {e}", path.display());
                process::exit(1);
            }
        },
        None => CoreConfig::default(),
    };
    config.debug_colliders |= options.debug_colliders;

    if let Err(e) = run(config, &options) {
        error!("{e}");
        process::exit(1);
    }
}

fn print_usage() {
    eprintln!(
        "invaders-headless: run the invaders simulation without a window\n\
         \n\
           --config <path>       JSON config file (optional)\n\
           --duration-ms <N>     Simulated time to run (default: {SMOKE_TEST_DURATION_MS})\n\
           --frame-ms <N>        Simulated wall time per frame (default: 7)\n\
           --debug-colliders     Draw collider outlines\n"
    );
}

fn parse_value<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

fn parse_options(args: &[String]) -> Options {
    Options {
        config: parse_value::<String>(args, "--config").map(PathBuf::from),
        duration_ms: parse_value(args, "--duration-ms").unwrap_or(SMOKE_TEST_DURATION_MS),
        frame_ms: parse_value(args, "--frame-ms").unwrap_or(7),
        debug_colliders: args.iter().any(|a| a == "--debug-colliders"),
    }
}

/// Scripted player: strafe back and forth, firing on a fixed cadence.
fn scripted_input(tick: u64) -> Vec<InputEvent> {
    let mut events = Vec::new();
    if tick % STRAFE_TICKS == 0 {
        let (release, press) = if (tick / STRAFE_TICKS) % 2 == 0 {
            (Key::Left, Key::Right)
        } else {
            (Key::Right, Key::Left)
        };
        events.push(InputEvent::KeyUp(release));
        events.push(InputEvent::KeyDown(press));
    }
    if tick % FIRE_TICKS == 0 {
        events.push(InputEvent::KeyDown(Key::Fire));
    }
    events
}

fn run(config: CoreConfig, options: &Options) -> Result<(), EcsError> {
    let mut canvas = RecordingCanvas::new(Viewport::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let mut coordinator = Coordinator::new(config);
    coordinator.initialize(&mut canvas)?;

    let mut clock = FixedTimestep::default();
    let mut elapsed_ms = 0;
    let mut frames = 0u64;
    let mut kills = 0u32;
    let mut shots = 0u32;

    while elapsed_ms < options.duration_ms {
        let frame_ms = options.frame_ms.max(1);
        clock.accumulate(frame_ms);
        elapsed_ms += frame_ms;

        for event in scripted_input(coordinator.tick()) {
            coordinator.input(event)?;
        }
        while clock.consume_tick() {
            let report = coordinator.update()?;
            kills += report.kills;
            shots += u32::from(report.fired);
        }

        canvas.take_calls();
        coordinator.render(&mut canvas, clock.delay())?;
        frames += 1;

        for event in coordinator.drain_events() {
            log::debug!("{event:?}");
        }
        if coordinator.outcome().is_terminal() {
            break;
        }
    }

    let drawn = canvas
        .calls()
        .iter()
        .filter(|c| matches!(c, DrawCall::Texture { .. }))
        .count();
    info!(
        "{} ticks over {frames} frames ({elapsed_ms} ms): {shots} shots, {kills} kills, outcome {:?}, {drawn} sprites in last frame",
        coordinator.tick(),
        coordinator.outcome()
    );

    if let Some(&tank) = coordinator.world().kind_ids(EntityKind::Tank).first() {
        match coordinator.world().transform(tank) {
            Ok(transform) => info!("tank finished at {}", transform.position),
            Err(e) => info!("no tank on the field: {e}"),
        }
    }

    coordinator.terminate(&mut canvas)?;
    Ok(())
}
