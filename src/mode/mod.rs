//! CLI mode implementations

mod export;
mod harmony;
mod scale;

pub use harmony::run_harmony;
pub use scale::run_scale;

use crate::color::{ColorScale, generate_color_scale, generate_neutral_scale};

/// A named palette: base color plus the shade scale derived from it.
/// The scale is always recomputed from the base, never edited on its own.
pub struct Palette {
    pub name: &'static str,
    pub base: String,
    pub scale: ColorScale,
}

impl Palette {
    pub fn colored(name: &'static str, base: String) -> Self {
        let scale = generate_color_scale(&base);
        Self { name, base, scale }
    }

    pub fn neutral(name: &'static str, base: String) -> Self {
        let scale = generate_neutral_scale(&base);
        Self { name, base, scale }
    }
}

/// Validate a color argument and normalize it to lowercase `#rrggbb`.
///
/// This is the boundary that keeps malformed input out of the conversion
/// functions, which trust their callers.
pub fn parse_hex_color(input: &str) -> Result<String, String> {
    let valid = input
        .strip_prefix('#')
        .is_some_and(|d| d.len() == 6 && d.bytes().all(|b| b.is_ascii_hexdigit()));
    if !valid {
        return Err(format!(
            "Invalid color '{}': expected #RRGGBB with six hex digits",
            input
        ));
    }
    Ok(input.to_ascii_lowercase())
}
