//! Marble Sandbox entry point
//!
//! Runs the simulation headless: a scripted pointer grabs the first ball,
//! swings it to the middle of the arena and lets go, then the run quits and
//! prints a JSON summary.

use std::path::Path;
use std::process::ExitCode;

use glam::Vec2;

use marble_sandbox::Settings;
use marble_sandbox::consts::HEADLESS_MAX_TICKS;
use marble_sandbox::platform::{DragTracker, FixedRatePacer, InputEvent, ScriptedInput};
use marble_sandbox::renderer::MeshRenderer;
use marble_sandbox::sim::SimulationState;

/// Frames the scripted drag lasts
const DRAG_FRAMES: u64 = 45;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Marble Sandbox starting...");

    let settings = match Settings::load_or_default(Path::new(Settings::FILE_NAME)) {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let seed = settings.seed.unwrap_or_else(rand::random);
    let mut state = match SimulationState::from_settings(&settings, seed) {
        Ok(state) => state,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    log::info!("Simulation initialized with seed: {}", seed);

    let max_ticks = settings.max_ticks.unwrap_or(HEADLESS_MAX_TICKS);
    let mut input = demo_script(&state, max_ticks);
    let mut drag = DragTracker::new(settings.drag_history);
    let mut renderer = MeshRenderer::new();
    let mut pacer = FixedRatePacer::new(settings.tick_rate_hz);

    let summary = marble_sandbox::run(&mut state, &mut input, &mut drag, &mut renderer, &mut pacer);
    log::info!(
        "Finished: {} ticks, {} collisions, {} retirements",
        summary.ticks,
        summary.collisions,
        summary.retirements
    );

    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{}", json),
        Err(e) => log::warn!("Could not serialize run summary: {}", e),
    }

    ExitCode::SUCCESS
}

/// Grab the first ball where it spawned, drag it to the arena center, release
fn demo_script(state: &SimulationState, max_ticks: u64) -> ScriptedInput {
    let script = ScriptedInput::new().quit_after(max_ticks);
    let Some(ball) = state.balls.first() else {
        return script;
    };

    let start = ball.pos;
    let center = Vec2::new(state.world.width, state.world.height) * 0.5;
    script
        .pointer(0, start)
        .pointer(DRAG_FRAMES, center)
        .event(0, InputEvent::PointerDown(start))
        .event(DRAG_FRAMES, InputEvent::PointerUp(center))
}
