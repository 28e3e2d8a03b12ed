//! Box Breaker entry point
//!
//! Runs the game headless under the autopilot: the window, shaders and meshes
//! are replaced by recording collaborators, so the same frame loop can be
//! watched through the log.
//!
//! Usage: `box-breaker [preset|tuning.json] [frames] [seed]`

use anyhow::Context;

use box_breaker::Game;
use box_breaker::platform::ManualClock;
use box_breaker::renderer::{BoxRecorder, FrameRecorder};
use box_breaker::sim::{Autopilot, GameEvent};
use box_breaker::tuning::Tuning;

const DEFAULT_FRAMES: u64 = 60 * 120;
const FRAME_SECONDS: f64 = 1.0 / 60.0;

fn tuning_from_arg(arg: Option<&str>) -> anyhow::Result<Tuning> {
    match arg {
        None => Ok(Tuning::default()),
        Some(name) if name.ends_with(".json") => Tuning::load(name),
        Some(name) => {
            Tuning::preset(name).with_context(|| format!("unknown preset '{name}' (midterm, classic)"))
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let tuning = tuning_from_arg(args.first().map(String::as_str))?;
    let frames = match args.get(1) {
        Some(n) => n.parse().with_context(|| format!("frame count '{n}'"))?,
        None => DEFAULT_FRAMES,
    };
    let seed = match args.get(2) {
        Some(s) => s.parse().with_context(|| format!("seed '{s}'"))?,
        None => 1,
    };

    log::info!("Box Breaker (headless) starting: {frames} frames, seed {seed}");

    let clock = ManualClock::new(0.0);
    let mut meshes = BoxRecorder::new();
    let mut game = Game::new(tuning, &mut meshes, &clock);
    let mut pilot = Autopilot::new(seed);
    let mut frame = FrameRecorder::new();
    let mut submitted = 0usize;

    for _ in 0..frames {
        pilot.observe(&game.state);
        clock.advance(FRAME_SECONDS);
        frame.begin_frame();

        let cleared = game
            .frame(&pilot, &clock, &mut frame)
            .contains(&GameEvent::FieldCleared);
        submitted += frame.instances().len();

        if cleared {
            break;
        }
    }

    log::info!(
        "Finished after {} frames: score {}, lives {}, {} blocks left, {} draw submissions",
        game.state.frame,
        game.state.score,
        game.state.lives,
        game.state.remaining_blocks(),
        submitted
    );
    println!(
        "score={} lives={} blocks_left={} frames={}",
        game.state.score,
        game.state.lives,
        game.state.remaining_blocks(),
        game.state.frame
    );
    Ok(())
}
