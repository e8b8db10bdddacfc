//! Chart rendering for palette previews

mod preview;

pub use preview::render_palette_chart;

/// Chart dimensions (2x for Retina quality)
pub(super) const CHART_WIDTH: u32 = 2200;
pub(super) const CHART_HEIGHT: u32 = 1100;

/// Common chart colors
pub(super) const COLOR_BACKGROUND: &str = "#0A0A0C"; // Near black
pub(super) const COLOR_TEXT: &str = "#FFFFFF"; // White
pub(super) const COLOR_GRID: &str = "#505050"; // Grid lines
