//! Platform abstraction layer
//!
//! Narrow interfaces the session consumes every tick:
//! - `input`: Directional keys and quit/cancel signals
//! - `render`: Draw calls and frame presentation
//! - `time`: Fixed-rate tick pacing

pub mod input;
pub mod render;
pub mod time;

pub use input::{Autopilot, InputSource, Scripted};
pub use render::{Hud, LogRenderer, RenderSink, render_frame};
pub use time::{FixedRate, Pacer, Unpaced};
