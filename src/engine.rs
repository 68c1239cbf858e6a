//! Pixel buffer composition from cycle state and breathing modulation.

use crate::breathing::BreathingModulator;
use crate::color::{self, Rgb};
use crate::cycle::{Channel, ColorCycle};

/// Owns the pixel buffer and the state machines that feed it.
///
/// The buffer has a fixed length of `N` for the lifetime of the engine and is
/// rebuilt from scratch on every compose: each LED's base color scaled by the
/// breathing level, or copied through when breathing is off.
pub struct CycleEngine<const N: usize> {
    cycle: ColorCycle<N>,
    breathing: Option<BreathingModulator>,
    frame: [Rgb; N],
}

impl<const N: usize> CycleEngine<N> {
    /// Builds an engine over a color cycle, optionally with breathing.
    pub fn new(cycle: ColorCycle<N>, breathing: Option<BreathingModulator>) -> Self {
        Self {
            cycle,
            breathing,
            frame: [color::OFF; N],
        }
    }

    /// Advances the color cycle of one LED.
    pub fn advance(&mut self, led: usize) {
        self.cycle.advance(led);
    }

    /// Advances the color cycle of every LED.
    pub fn advance_all(&mut self) {
        self.cycle.advance_all();
    }

    /// Flips one channel of every LED between off and full.
    pub fn toggle_channel(&mut self, channel: Channel) {
        self.cycle.toggle_channel(channel);
    }

    /// Steps the breathing modulator, if breathing is enabled.
    pub fn tick_breathing(&mut self) {
        if let Some(breathing) = self.breathing.as_mut() {
            breathing.tick();
        }
    }

    /// Rebuilds the pixel buffer from base colors and modulation.
    pub fn compose(&mut self) -> &[Rgb] {
        for (pixel, &base) in self.frame.iter_mut().zip(self.cycle.base_colors()) {
            *pixel = match self.breathing.as_ref() {
                Some(breathing) => breathing.apply_color(base),
                None => base,
            };
        }
        &self.frame
    }

    /// The color-cycle state machine.
    pub fn cycle(&self) -> &ColorCycle<N> {
        &self.cycle
    }

    /// Mutable cycle access, for configuring a starting pattern before the
    /// loop runs.
    pub fn cycle_mut(&mut self) -> &mut ColorCycle<N> {
        &mut self.cycle
    }

    /// The breathing modulator, if enabled.
    pub fn breathing(&self) -> Option<&BreathingModulator> {
        self.breathing.as_ref()
    }

    /// The most recently composed frame.
    pub fn frame(&self) -> &[Rgb] {
        &self.frame
    }
}
