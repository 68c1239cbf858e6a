//! Button sampling and edge detection.
//!
//! Raw hardware sampling stays behind the [`ButtonInput`] capability; the
//! [`EdgeDetector`] turns it into one-shot click events with single-fire
//! semantics, regardless of how fast the scheduler polls.

use core::cell::Cell;

use critical_section::Mutex;
use embassy_time::{Duration, Instant};

/// Raw button sampling capability.
///
/// Implement this for your button hardware (GPIO, I/O expander, matrix scan).
/// `is_pressed` is polled once per scheduler tick and returns the
/// instantaneous pressed state; all edge and debounce logic lives in
/// [`EdgeDetector`].
pub trait ButtonInput {
    /// Instantaneous pressed state.
    fn is_pressed(&mut self) -> bool;
}

/// Button-less configurations.
impl ButtonInput for () {
    fn is_pressed(&mut self) -> bool {
        false
    }
}

/// Debounce window applied between fired edges by default.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(20);

/// Converts raw button sampling into one-shot click events.
///
/// `poll` returns true exactly once per physical press: on the press edge,
/// outside the debounce window. A button already held at power-up does not
/// fire until it is released and pressed again.
pub struct EdgeDetector<B: ButtonInput> {
    button: B,
    was_pressed: bool,
    last_fire: Option<Instant>,
    debounce: Duration,
}

impl<B: ButtonInput> EdgeDetector<B> {
    /// Wraps a button with the default debounce window.
    pub fn new(button: B) -> Self {
        Self {
            button,
            // Treating the power-up state as pressed suppresses a spurious
            // edge when the button is held during boot.
            was_pressed: true,
            last_fire: None,
            debounce: DEFAULT_DEBOUNCE,
        }
    }

    /// Sets a custom debounce window.
    #[must_use]
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Samples the button and reports whether a click fired this tick.
    ///
    /// At most one `true` per physical press, false while held or released.
    pub fn poll(&mut self, now: Instant) -> bool {
        let pressed = self.button.is_pressed();
        let edge = pressed && !self.was_pressed;
        self.was_pressed = pressed;

        if !edge {
            return false;
        }
        if let Some(last) = self.last_fire {
            if now.duration_since(last) < self.debounce {
                // Contact bounce re-triggering the edge; swallow it.
                return false;
            }
        }
        self.last_fire = Some(now);
        true
    }
}

/// Pressed-state latch for interrupt-driven platforms.
///
/// Interrupt handlers record the raw state with [`set_pressed`]; the core
/// samples it synchronously through [`ButtonInput`], keeping interrupt-side
/// concerns outside the tick loop. Suitable for a `static`.
///
/// [`set_pressed`]: IrqLatch::set_pressed
pub struct IrqLatch {
    pressed: Mutex<Cell<bool>>,
}

impl IrqLatch {
    /// Creates a released latch.
    pub const fn new() -> Self {
        Self {
            pressed: Mutex::new(Cell::new(false)),
        }
    }

    /// Records the raw pressed state. Safe to call from interrupt context.
    pub fn set_pressed(&self, pressed: bool) {
        critical_section::with(|cs| self.pressed.borrow(cs).set(pressed));
    }

    fn get(&self) -> bool {
        critical_section::with(|cs| self.pressed.borrow(cs).get())
    }
}

impl Default for IrqLatch {
    fn default() -> Self {
        Self::new()
    }
}

impl ButtonInput for &IrqLatch {
    fn is_pressed(&mut self) -> bool {
        self.get()
    }
}
