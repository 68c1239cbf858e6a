//! Fixed-interval tick scheduling and the per-tick pipeline.
//!
//! The scheduler owns the engine and the collaborator drivers and runs the
//! whole per-tick pipeline; the caller owns the sleep between ticks.

use embassy_time::{Duration, Instant};
use heapless::Vec;

use crate::breathing::BreathingModulator;
use crate::config::{Binding, Config, ConfigError};
use crate::cycle::{Channel, ColorCycle};
use crate::engine::CycleEngine;
use crate::input::{ButtonInput, EdgeDetector};
use crate::status;
use crate::{StatusDisplay, StripDriver, ToneSpeaker};

/// Maximum number of edge detectors a scheduler can hold.
pub const MAX_BUTTONS: usize = 16;

/// Click feedback tone, matching the reference hardware.
const CLICK_TONE_HZ: u16 = 2_000;
const CLICK_TONE_DURATION: Duration = Duration::from_millis(200);

/// Result of one tick.
#[derive(Debug, Clone, Copy)]
pub struct TickResult {
    /// Deadline for the next tick.
    pub next_deadline: Instant,
    /// How long to sleep until the next tick (zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Single-threaded cooperative tick loop over the cycle engine.
///
/// Each `tick` samples inputs, applies transitions, recomputes the modulated
/// pixel buffer, pushes it to the strip and refreshes the status display.
/// All state is mutated inside the tick; there is exactly one logical thread
/// of control and no suspension point other than the caller's sleep.
///
/// # Type Parameters
/// * `S` - Strip transport implementation
/// * `D` - Status display implementation (use `()` for none)
/// * `A` - Click feedback speaker implementation (use `()` for none)
/// * `B` - Button implementation shared by all edge detectors
/// * `N` - Number of LEDs on the strip
pub struct Scheduler<S, D, A, B, const N: usize>
where
    S: StripDriver,
    D: StatusDisplay,
    A: ToneSpeaker,
    B: ButtonInput,
{
    engine: CycleEngine<N>,
    strip: S,
    display: D,
    speaker: A,
    buttons: Vec<EdgeDetector<B>, MAX_BUTTONS>,
    binding: Binding,
    tick_interval: Duration,
    next_tick: Instant,
    display_dirty: bool,
}

impl<S, D, A, B, const N: usize> Scheduler<S, D, A, B, N>
where
    S: StripDriver,
    D: StatusDisplay,
    A: ToneSpeaker,
    B: ButtonInput,
{
    /// Validates the configuration and builds the scheduler.
    ///
    /// Every LED starts at the palette's first entry; use
    /// [`engine_mut`](Self::engine_mut) to configure a different starting
    /// pattern before the first tick.
    pub fn new(
        config: Config,
        strip: S,
        display: D,
        speaker: A,
        buttons: Vec<EdgeDetector<B>, MAX_BUTTONS>,
    ) -> Result<Self, ConfigError> {
        config.validate(N, buttons.len())?;

        let breathing = config.breathing_step.map(BreathingModulator::new);
        let engine = CycleEngine::new(ColorCycle::new(config.palette), breathing);

        Ok(Self {
            engine,
            strip,
            display,
            speaker,
            buttons,
            binding: config.binding,
            tick_interval: config.tick_interval,
            next_tick: Instant::from_millis(0),
            // Render a baseline summary on the first tick.
            display_dirty: true,
        })
    }

    /// Runs one tick of the pipeline and returns pacing information.
    ///
    /// The strip is pushed on every tick, even when nothing changed, so the
    /// transport never diverges from the logical state. A transport error
    /// aborts the tick and is returned as-is; there is no retry.
    pub fn tick(&mut self, now: Instant) -> Result<TickResult, S::Error> {
        for index in 0..self.buttons.len() {
            if self.buttons[index].poll(now) {
                self.on_click(index);
            }
        }

        if self.binding == Binding::Autonomous {
            self.engine.advance_all();
            self.display_dirty = true;
        }

        self.engine.tick_breathing();

        let frame = self.engine.compose();
        self.strip.push_frame(frame)?;

        if self.display_dirty {
            let summary = status::summarize(self.engine.cycle(), self.binding);
            self.display.render(&summary);
            self.display_dirty = false;
        }

        Ok(self.pace(now))
    }

    /// Applies one fired edge: click feedback, then the binding-mapped
    /// transition.
    fn on_click(&mut self, button: usize) {
        self.speaker.play_tone(CLICK_TONE_HZ, CLICK_TONE_DURATION);
        #[cfg(feature = "defmt")]
        defmt::info!("button {} clicked", button);

        match self.binding {
            Binding::PerLed => self.engine.advance(button),
            Binding::Shared => self.engine.advance_all(),
            Binding::ChannelToggle => self.engine.toggle_channel(Channel::ALL[button]),
            Binding::Autonomous => {}
        }
        self.display_dirty = true;
    }

    /// Advances the tick deadline with drift correction.
    ///
    /// Falling behind by more than two intervals resets the deadline to `now`
    /// instead of bursting to catch up.
    fn pace(&mut self, now: Instant) -> TickResult {
        let max_drift_ms = self.tick_interval.as_millis() * 2;
        if now.as_millis() > self.next_tick.as_millis() + max_drift_ms {
            self.next_tick = now;
        }

        self.next_tick += self.tick_interval;

        let sleep_duration = if self.next_tick.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_tick.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        TickResult {
            next_deadline: self.next_tick,
            sleep_duration,
        }
    }

    /// The cycle engine, for inspecting state.
    pub fn engine(&self) -> &CycleEngine<N> {
        &self.engine
    }

    /// Mutable engine access, for configuring a starting pattern before the
    /// first tick.
    pub fn engine_mut(&mut self) -> &mut CycleEngine<N> {
        &mut self.engine
    }
}
