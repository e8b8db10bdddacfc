//! Color-space conversion and palette scale generation

mod convert;
mod harmony;
mod random;
mod scale;

pub(crate) use convert::{contrast_color, hex_to_hsl, hex_to_rgb};
pub(crate) use harmony::{Harmony, generate_harmony_colors};
pub(crate) use random::generate_random_color;
pub(crate) use scale::{ColorScale, Step, generate_color_scale, generate_neutral_scale};
