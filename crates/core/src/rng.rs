//! RNG module - block color generation
//!
//! The engine never reaches for a global RNG. Every function that produces new
//! blocks takes a [`ColorSource`], so the same seed always deals the same board
//! and refills, and tests can script the exact colors that fall in.

use crate::types::BlockColor;

/// Anything that can hand out block colors
pub trait ColorSource {
    /// Next color, uniformly in `[0, color_count)`
    fn next_color(&mut self, color_count: u8) -> BlockColor;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of a power-of-two LCG cycle with a
    /// short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl ColorSource for SimpleRng {
    fn next_color(&mut self, color_count: u8) -> BlockColor {
        BlockColor::new(self.next_range(color_count as u32) as u8)
    }
}

/// Replays a fixed list of color indices, cycling when exhausted
///
/// Indices are reduced modulo the requested color count, so a script never
/// produces an out-of-range block.
#[derive(Debug, Clone)]
pub struct SequenceColors {
    colors: Vec<u8>,
    next: usize,
}

impl SequenceColors {
    /// # Panics
    ///
    /// Panics if `colors` is empty.
    pub fn new(colors: impl Into<Vec<u8>>) -> Self {
        let colors = colors.into();
        assert!(!colors.is_empty(), "SequenceColors needs at least one color");
        Self { colors, next: 0 }
    }

    /// Number of colors handed out so far
    pub fn drawn(&self) -> usize {
        self.next
    }
}

impl ColorSource for SequenceColors {
    fn next_color(&mut self, color_count: u8) -> BlockColor {
        let raw = self.colors[self.next % self.colors.len()];
        self.next += 1;
        BlockColor::new(raw % color_count)
    }
}

impl<C: ColorSource + ?Sized> ColorSource for &mut C {
    fn next_color(&mut self, color_count: u8) -> BlockColor {
        (**self).next_color(color_count)
    }
}
