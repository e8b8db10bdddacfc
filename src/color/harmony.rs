//! Color harmony derivation by hue rotation

use clap::ValueEnum;

use super::convert::{Hsl, hex_to_hsl, hsl_to_hex};

/// Harmony schemes relating companion colors to one base color
#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
pub(crate) enum Harmony {
    Complementary,
    Analogous,
    Triadic,
    SplitComplementary,
    Tetradic,
    Monochromatic,
    /// No companion scheme; yields the base color alone
    Auto,
}

impl Harmony {
    pub(crate) fn label(self) -> &'static str {
        match self {
            Harmony::Complementary => "complementary",
            Harmony::Analogous => "analogous",
            Harmony::Triadic => "triadic",
            Harmony::SplitComplementary => "split-complementary",
            Harmony::Tetradic => "tetradic",
            Harmony::Monochromatic => "monochromatic",
            Harmony::Auto => "auto",
        }
    }
}

/// Derive the harmony companions of a base color.
///
/// Hue offsets wrap modulo 360; saturation and lightness carry over from the
/// base except in monochromatic mode, where they move at fixed offsets with
/// the hue held constant. `Auto` degrades to the base color alone.
pub(crate) fn generate_harmony_colors(base: &str, harmony: Harmony) -> Vec<String> {
    let Hsl { h, s, l } = hex_to_hsl(base);
    let rotate = |offset: i32| {
        hsl_to_hex(
            f64::from((h + offset).rem_euclid(360)),
            f64::from(s),
            f64::from(l),
        )
    };

    match harmony {
        Harmony::Complementary => vec![base.to_string(), rotate(180)],
        Harmony::Analogous => vec![rotate(-30), rotate(0), rotate(30)],
        Harmony::Triadic => vec![base.to_string(), rotate(120), rotate(240)],
        Harmony::SplitComplementary => vec![base.to_string(), rotate(150), rotate(210)],
        Harmony::Tetradic => vec![base.to_string(), rotate(90), rotate(180), rotate(270)],
        Harmony::Monochromatic => {
            let (h, s, l) = (f64::from(h), f64::from(s), f64::from(l));
            vec![
                hsl_to_hex(h, (s - 30.0).max(0.0), l),
                hsl_to_hex(h, s, (l - 20.0).max(10.0)),
                base.to_string(),
                hsl_to_hex(h, (s + 20.0).min(100.0), l),
                hsl_to_hex(h, s, (l + 20.0).min(90.0)),
            ]
        }
        Harmony::Auto => vec![base.to_string()],
    }
}
