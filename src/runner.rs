//! The frame loop
//!
//! Once per frame: drain input, update the drag velocity, tick, hand the
//! frame to the renderer, wait for the next slot. The loop ends on
//! [`InputEvent::Quit`], checked before a tick starts.

use serde::Serialize;

use crate::platform::{DragTracker, InputEvent, InputSource, Pacer};
use crate::renderer::{Frame, Renderer};
use crate::sim::{SimulationState, TickInput, TickReport, tick};

/// Totals for a finished run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunSummary {
    pub seed: u64,
    /// Frames rendered, paused frames included
    pub frames: u64,
    /// Simulated ticks
    pub ticks: u64,
    pub collisions: u64,
    pub retirements: u64,
    pub wall_bounces: u64,
    pub population: usize,
}

impl RunSummary {
    fn absorb(&mut self, report: &TickReport) {
        self.collisions += report.collisions.len() as u64;
        self.retirements += report.retirements.len() as u64;
        self.wall_bounces += u64::from(report.wall_bounces);
    }
}

/// Reduce one frame's events to tick input; `None` means quit
fn collect_input(events: Vec<InputEvent>) -> Option<TickInput> {
    let mut input = TickInput::default();
    for event in events {
        match event {
            InputEvent::Quit => return None,
            InputEvent::PointerDown(pos) => input.pointer_down = Some(pos),
            InputEvent::PointerUp(_) => input.pointer_up = true,
            InputEvent::TogglePause => input.pause = !input.pause,
        }
    }
    Some(input)
}

/// Run frames until the input source asks to quit
pub fn run<I, R, P>(
    state: &mut SimulationState,
    input: &mut I,
    drag: &mut DragTracker,
    renderer: &mut R,
    pacer: &mut P,
) -> RunSummary
where
    I: InputSource,
    R: Renderer,
    P: Pacer,
{
    let mut summary = RunSummary {
        seed: state.seed,
        ..Default::default()
    };

    log::info!(
        "Running with {} balls in a {}x{} arena",
        state.balls.len(),
        state.world.width,
        state.world.height
    );

    loop {
        let Some(mut tick_input) = collect_input(input.poll_events()) else {
            log::info!("Quit requested after {} frames", summary.frames);
            break;
        };

        drag.push(input.pointer_position());
        tick_input.drag = drag.velocity();

        let report = tick(state, &tick_input);
        summary.absorb(&report);

        renderer.render(&Frame::capture(state));
        summary.frames += 1;

        pacer.wait();
    }

    summary.ticks = state.time_ticks;
    summary.population = state.balls.len();
    summary
}
