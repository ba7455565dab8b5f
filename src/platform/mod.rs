//! Platform abstraction layer
//!
//! The collaborators the frame loop talks to:
//! - Input events and pointer tracking
//! - Tick pacing

pub mod input;
pub mod time;

pub use input::{DragTracker, InputEvent, InputSource, ScriptedInput};
pub use time::{FixedRatePacer, Pacer, Unpaced};
