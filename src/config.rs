//! Startup configuration and validation.
//!
//! Every configuration is checked before the tick loop begins; an invalid one
//! never becomes a runtime condition.

use embassy_time::Duration;

use crate::palette::Palette;

/// How button input maps onto color-cycle transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Binding {
    /// Button `k` advances the palette entry of LED `k`. One button per LED.
    PerLed,
    /// A single button advances every LED together.
    Shared,
    /// Buttons 0, 1 and 2 toggle the red, green and blue channels of every
    /// LED between off and full.
    ChannelToggle,
    /// No buttons; every LED advances on every tick.
    Autonomous,
}

impl Binding {
    /// Number of buttons this binding expects for a strip of `led_count` LEDs.
    pub const fn expected_buttons(self, led_count: usize) -> usize {
        match self {
            Binding::PerLed => led_count,
            Binding::Shared => 1,
            Binding::ChannelToggle => 3,
            Binding::Autonomous => 0,
        }
    }
}

/// Static controller configuration, fixed at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Color cycle shared by every LED.
    pub palette: Palette,
    /// Input-to-transition mapping.
    pub binding: Binding,
    /// Breathing level change per tick; `None` disables breathing.
    pub breathing_step: Option<u8>,
    /// Fixed scheduler tick interval.
    pub tick_interval: Duration,
}

impl Config {
    /// Checks the configuration against the strip size and button count.
    pub fn validate(&self, led_count: usize, button_count: usize) -> Result<(), ConfigError> {
        if led_count == 0 {
            return Err(ConfigError::NoLeds);
        }
        let expected = self.binding.expected_buttons(led_count);
        if button_count != expected {
            return Err(ConfigError::ButtonCountMismatch {
                binding: self.binding,
                expected,
                actual: button_count,
            });
        }
        if self.breathing_step == Some(0) {
            return Err(ConfigError::ZeroBreathingStep);
        }
        if self.tick_interval.as_millis() == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        Ok(())
    }
}

/// Configuration errors, reported before the tick loop begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// The strip must contain at least one LED.
    NoLeds,
    /// The palette must contain at least one color.
    EmptyPalette,
    /// The palette exceeds [`MAX_COLORS`](crate::palette::MAX_COLORS).
    PaletteOverflow {
        /// Number of colors requested.
        requested: usize,
        /// Maximum supported.
        capacity: usize,
    },
    /// The button count does not match what the binding expects.
    ButtonCountMismatch {
        /// The configured binding.
        binding: Binding,
        /// Buttons the binding expects.
        expected: usize,
        /// Buttons actually supplied.
        actual: usize,
    },
    /// Breathing was enabled with a step of zero.
    ZeroBreathingStep,
    /// The tick interval must be non-zero.
    ZeroTickInterval,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::NoLeds => write!(f, "strip must contain at least one LED"),
            ConfigError::EmptyPalette => write!(f, "palette must contain at least one color"),
            ConfigError::PaletteOverflow {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "palette of {} colors exceeds capacity of {}",
                    requested, capacity
                )
            }
            ConfigError::ButtonCountMismatch {
                binding,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{:?} binding expects {} buttons, got {}",
                    binding, expected, actual
                )
            }
            ConfigError::ZeroBreathingStep => write!(f, "breathing step must be non-zero"),
            ConfigError::ZeroTickInterval => write!(f, "tick interval must be non-zero"),
        }
    }
}
