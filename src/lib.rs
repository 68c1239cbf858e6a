#![no_std]

//! Palette-cycling RGB LED strip controller engine.
//!
//! Drives an addressable RGB strip from button input and/or autonomous
//! timing: a per-pixel color-cycle state machine, a breathing brightness
//! modulator and a debounced edge detector, orchestrated by a fixed-interval
//! tick scheduler that also mirrors state to a small status display.
//! Hardware stays behind the traits below; the caller owns the sleep between
//! ticks.

pub mod breathing;
pub mod color;
pub mod config;
pub mod cycle;
pub mod engine;
pub mod input;
pub mod math8;
pub mod palette;
pub mod scheduler;
pub mod status;

pub use breathing::{BreathingModulator, DEFAULT_STEP};
pub use color::Rgb;
pub use config::{Binding, Config, ConfigError};
pub use cycle::{Channel, ColorCycle};
pub use engine::CycleEngine;
pub use input::{ButtonInput, EdgeDetector, IrqLatch};
pub use palette::Palette;
pub use scheduler::{MAX_BUTTONS, Scheduler, TickResult};
pub use status::{Summary, summarize};

pub use embassy_time::{Duration, Instant};

/// Abstract LED strip transport.
///
/// The scheduler pushes the full frame once per tick. Transport failure is
/// treated as a hardware fault: it aborts the tick and is surfaced to the
/// process boundary without retry.
pub trait StripDriver {
    /// Transport failure type.
    type Error;

    /// Send the full pixel buffer to the strip.
    fn push_frame(&mut self, frame: &[Rgb]) -> Result<(), Self::Error>;
}

/// Abstract status display.
///
/// Best-effort: implementations handle their own errors internally, a failed
/// render must not disturb the tick loop.
pub trait StatusDisplay {
    /// Render a textual status summary.
    fn render(&mut self, summary: &str);
}

/// Display-less configurations.
impl StatusDisplay for () {
    fn render(&mut self, _summary: &str) {}
}

/// Abstract speaker for click feedback.
///
/// Fire-and-forget: the core never waits for the tone to complete.
pub trait ToneSpeaker {
    /// Start playing a tone.
    fn play_tone(&mut self, frequency_hz: u16, duration: Duration);
}

/// Speaker-less configurations.
impl ToneSpeaker for () {
    fn play_tone(&mut self, _frequency_hz: u16, _duration: Duration) {}
}
