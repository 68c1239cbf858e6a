//! Read-only status summaries for the on-device display.

use core::fmt::Write;

use heapless::String;

use crate::config::Binding;
use crate::cycle::ColorCycle;

/// Capacity of a rendered summary.
pub const SUMMARY_CAPACITY: usize = 128;

/// A rendered status line.
pub type Summary = String<SUMMARY_CAPACITY>;

/// Derives a human-readable summary of the current LED states.
///
/// Channel-toggle configurations render per-channel on/off text; every other
/// binding renders one hex triplet per LED. Reads the cycle state only.
/// Output that would exceed the summary capacity is truncated, matching the
/// best-effort contract of the display itself.
pub fn summarize<const N: usize>(cycle: &ColorCycle<N>, binding: Binding) -> Summary {
    let mut summary = Summary::new();
    match binding {
        Binding::ChannelToggle => {
            let Some(&led) = cycle.base_colors().first() else {
                return summary;
            };
            let _ = write!(
                &mut summary,
                "R:{} G:{} B:{}",
                on_off(led.r),
                on_off(led.g),
                on_off(led.b),
            );
        }
        _ => {
            for led in 0..cycle.len() {
                if led > 0 {
                    let _ = summary.push(' ');
                }
                let color = cycle.base_color(led);
                let _ = write!(
                    &mut summary,
                    "{}:{:02X}{:02X}{:02X}",
                    led, color.r, color.g, color.b
                );
            }
        }
    }
    summary
}

const fn on_off(channel: u8) -> &'static str {
    if channel == 0 { "OFF" } else { "ON" }
}
