//! Fixed chart colors.
//!
//! Categorical palettes cycle: category `i` is painted with
//! `colors[i % colors.len()]`, so a chart with more categories than colors
//! reuses the palette from the start instead of leaving slices uncolored.

pub const BLUE: &str = "#007bff";
pub const GREEN: &str = "#28a745";
pub const GRAY: &str = "#6c757d";
pub const RED: &str = "#dc3545";
pub const ORANGE: &str = "#fd7e14";
pub const TEAL: &str = "#20c997";
pub const PURPLE: &str = "#6f42c1";

/// Translucent blue under the trend line.
pub const TREND_FILL: &str = "rgba(0, 123, 255, 0.1)";

/// Positive, neutral, negative.
pub const SENTIMENT: Palette = Palette(&[GREEN, GRAY, RED]);
pub const PLATFORM: Palette = Palette(&[BLUE, ORANGE, TEAL, RED]);
pub const INTERACTION: Palette = Palette(&[BLUE, GREEN, ORANGE, RED, PURPLE]);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette(pub &'static [&'static str]);

impl Palette {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn color(&self, index: usize) -> Option<&'static str> {
        if self.0.is_empty() {
            return None;
        }
        Some(self.0[index % self.0.len()])
    }

    /// One color per category.
    pub fn colors_for(&self, categories: usize) -> Vec<String> {
        (0..categories)
            .filter_map(|i| self.color(i))
            .map(str::to_string)
            .collect()
    }
}
