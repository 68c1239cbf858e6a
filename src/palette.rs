//! Cyclic color palettes.

use heapless::Vec;

use crate::color::{self, Rgb};
use crate::config::ConfigError;

/// Maximum number of entries a palette can hold.
pub const MAX_COLORS: usize = 16;

/// A cyclic ordered set of discrete colors.
///
/// Every entry has exactly one successor; advancing past the last entry wraps
/// to the first, so the cycle is total and deterministic.
#[derive(Debug, Clone)]
pub struct Palette {
    colors: Vec<Rgb, MAX_COLORS>,
}

impl Palette {
    /// Creates a palette from an ordered, non-empty list of colors.
    pub fn new(colors: &[Rgb]) -> Result<Self, ConfigError> {
        if colors.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        let colors = Vec::from_slice(colors).map_err(|()| ConfigError::PaletteOverflow {
            requested: colors.len(),
            capacity: MAX_COLORS,
        })?;
        Ok(Self { colors })
    }

    /// The reference red → green → blue cycle.
    pub fn rgb_cycle() -> Self {
        let mut colors = Vec::new();
        for entry in [color::RED, color::GREEN, color::BLUE] {
            let _ = colors.push(entry);
        }
        Self { colors }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; palettes are non-empty by construction.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at `position`. Positions are taken modulo the palette length,
    /// so the lookup is total.
    pub fn color(&self, position: usize) -> Rgb {
        self.colors[position % self.colors.len()]
    }

    /// Successor of `position` in the cycle.
    pub fn next(&self, position: usize) -> usize {
        (position + 1) % self.colors.len()
    }
}
