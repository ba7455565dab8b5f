//! Input events and pointer tracking
//!
//! The simulation never polls devices itself. A platform backend implements
//! [`InputSource`]; the frame loop drains it once per frame and keeps a
//! [`DragTracker`] fed with pointer positions.

use std::collections::VecDeque;

use glam::Vec2;

/// Discrete input event, positions in arena coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown(Vec2),
    PointerUp(Vec2),
    TogglePause,
    Quit,
}

/// Source of input for the frame loop
pub trait InputSource {
    /// Drain the events that arrived since the previous call
    fn poll_events(&mut self) -> Vec<InputEvent>;

    /// Current pointer position
    fn pointer_position(&self) -> Vec2;
}

/// Rolling buffer of recent pointer positions
#[derive(Debug, Clone)]
pub struct DragTracker {
    /// Oldest first
    samples: VecDeque<Vec2>,
    capacity: usize,
}

impl DragTracker {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a pointer sample, dropping the oldest when full
    pub fn push(&mut self, pos: Vec2) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(pos);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Average displacement per sample across the buffer
    pub fn velocity(&self) -> Vec2 {
        match (self.samples.front(), self.samples.back()) {
            (Some(&oldest), Some(&newest)) if self.samples.len() > 1 => {
                (newest - oldest) / (self.samples.len() - 1) as f32
            }
            _ => Vec2::ZERO,
        }
    }
}

/// Pre-recorded input, used by the headless binary and tests.
///
/// Events fire on the frame they are scheduled for; the pointer moves
/// linearly between keyframes and holds its last position afterwards.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    events: Vec<(u64, InputEvent)>,
    keyframes: Vec<(u64, Vec2)>,
    quit_after: Option<u64>,
    /// Frame whose events were returned by the last poll
    frame: u64,
    polled: u64,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule an event for a frame
    pub fn event(mut self, frame: u64, event: InputEvent) -> Self {
        self.events.push((frame, event));
        self
    }

    /// Place the pointer at `pos` on `frame`
    pub fn pointer(mut self, frame: u64, pos: Vec2) -> Self {
        let at = self.keyframes.partition_point(|&(f, _)| f <= frame);
        self.keyframes.insert(at, (frame, pos));
        self
    }

    /// Emit [`InputEvent::Quit`] once `frames` frames have been played
    pub fn quit_after(mut self, frames: u64) -> Self {
        self.quit_after = Some(frames);
        self
    }

    /// Pointer position on an arbitrary frame
    pub fn pointer_at(&self, frame: u64) -> Vec2 {
        let next = self.keyframes.partition_point(|&(f, _)| f <= frame);
        match (next.checked_sub(1).map(|i| self.keyframes[i]), self.keyframes.get(next)) {
            (Some((f0, p0)), Some(&(f1, p1))) => {
                let t = (frame - f0) as f32 / (f1 - f0) as f32;
                p0.lerp(p1, t)
            }
            (Some((_, p0)), None) => p0,
            (None, Some(&(_, p1))) => p1,
            (None, None) => Vec2::ZERO,
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.frame = self.polled;
        self.polled += 1;

        let frame = self.frame;
        let mut events: Vec<InputEvent> = self
            .events
            .iter()
            .filter(|(f, _)| *f == frame)
            .map(|(_, e)| *e)
            .collect();
        if self.quit_after.is_some_and(|n| frame >= n) {
            events.push(InputEvent::Quit);
        }
        events
    }

    fn pointer_position(&self) -> Vec2 {
        self.pointer_at(self.frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_velocity_is_average_step() {
        let mut tracker = DragTracker::new(4);
        assert_eq!(tracker.velocity(), Vec2::ZERO);
        tracker.push(Vec2::new(0.0, 0.0));
        assert_eq!(tracker.velocity(), Vec2::ZERO);
        tracker.push(Vec2::new(2.0, 1.0));
        tracker.push(Vec2::new(6.0, 2.0));
        assert_eq!(tracker.velocity(), Vec2::new(3.0, 1.0));
    }

    #[test]
    fn test_drag_tracker_rolls_over() {
        let mut tracker = DragTracker::new(3);
        for x in 0..10 {
            tracker.push(Vec2::new(x as f32 * 10.0, 0.0));
        }
        assert_eq!(tracker.len(), 3);
        // Only the last three samples (70, 80, 90) count
        assert_eq!(tracker.velocity(), Vec2::new(10.0, 0.0));
        tracker.clear();
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_scripted_events_fire_on_their_frame() {
        let mut input = ScriptedInput::new()
            .event(1, InputEvent::PointerDown(Vec2::new(5.0, 5.0)))
            .event(2, InputEvent::TogglePause)
            .quit_after(3);

        assert!(input.poll_events().is_empty());
        assert_eq!(
            input.poll_events(),
            vec![InputEvent::PointerDown(Vec2::new(5.0, 5.0))]
        );
        assert_eq!(input.poll_events(), vec![InputEvent::TogglePause]);
        assert_eq!(input.poll_events(), vec![InputEvent::Quit]);
    }

    #[test]
    fn test_scripted_pointer_interpolates() {
        let input = ScriptedInput::new()
            .pointer(20, Vec2::new(100.0, 0.0))
            .pointer(10, Vec2::new(0.0, 0.0));
        assert_eq!(input.pointer_at(0), Vec2::new(0.0, 0.0));
        assert_eq!(input.pointer_at(15), Vec2::new(50.0, 0.0));
        assert_eq!(input.pointer_at(40), Vec2::new(100.0, 0.0));
        assert_eq!(ScriptedInput::new().pointer_at(3), Vec2::ZERO);
    }
}
