//! Shade scale generation

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::convert::{Hsl, hex_to_hsl, hsl_to_hex};

/// One of the 11 fixed positions in a shade scale, lightest to darkest.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Step {
    S50,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
    S950,
}

impl Step {
    pub(crate) const ALL: [Step; 11] = [
        Step::S50,
        Step::S100,
        Step::S200,
        Step::S300,
        Step::S400,
        Step::S500,
        Step::S600,
        Step::S700,
        Step::S800,
        Step::S900,
        Step::S950,
    ];

    /// Numeric key of the step (50, 100, ..., 950)
    pub(crate) fn key(self) -> u16 {
        match self {
            Step::S50 => 50,
            Step::S100 => 100,
            Step::S200 => 200,
            Step::S300 => 300,
            Step::S400 => 400,
            Step::S500 => 500,
            Step::S600 => 600,
            Step::S700 => 700,
            Step::S800 => 800,
            Step::S900 => 900,
            Step::S950 => 950,
        }
    }
}

/// An 11-shade scale derived from one base color, indexed by [`Step`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub(crate) struct ColorScale {
    shades: [String; 11],
}

impl ColorScale {
    pub(crate) fn get(&self, step: Step) -> &str {
        &self.shades[step as usize]
    }

    /// Iterate the shades in scale order, lightest first
    pub(crate) fn iter(&self) -> impl Iterator<Item = (Step, &str)> {
        Step::ALL.iter().map(|&step| (step, self.get(step)))
    }
}

impl Serialize for ColorScale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Step::ALL.len()))?;
        for (step, hex) in self.iter() {
            map.serialize_entry(&step.key().to_string(), hex)?;
        }
        map.end()
    }
}

/// Lightness ladder for color scales, one value per step
const SCALE_LIGHTNESS: [f64; 11] = [
    97.0, 93.0, 85.0, 75.0, 65.0, 55.0, 45.0, 35.0, 25.0, 17.0, 10.0,
];

/// Lightness ladder for neutral scales, compressed toward the light end so
/// the neutrals stay usable as text and surface colors
const NEUTRAL_LIGHTNESS: [f64; 11] = [
    98.0, 96.0, 90.0, 82.0, 70.0, 58.0, 46.0, 36.0, 26.0, 18.0, 10.0,
];

/// Damp saturation near the scale extremes. Very light and very dark steps
/// pull toward neutral; mid steps keep the seed's saturation.
fn damped_saturation(s: f64, l: f64) -> f64 {
    if l > 90.0 {
        (s * 0.3).max(5.0)
    } else if l > 80.0 {
        (s * 0.5).max(10.0)
    } else if l > 70.0 {
        (s * 0.7).max(15.0)
    } else if l > 60.0 {
        (s * 0.85).max(20.0)
    } else if l > 40.0 {
        s
    } else if l > 30.0 {
        (s * 0.9).max(20.0)
    } else if l > 20.0 {
        (s * 0.8).max(15.0)
    } else {
        (s * 0.7).max(10.0)
    }
}

/// Derive an 11-step shade scale from a base color.
///
/// Only the base hue and saturation carry forward; each step's lightness
/// comes from the fixed ladder. Fully deterministic.
pub(crate) fn generate_color_scale(base: &str) -> ColorScale {
    let Hsl { h, s, .. } = hex_to_hsl(base);
    let (h, s) = (f64::from(h), f64::from(s));
    ColorScale {
        shades: SCALE_LIGHTNESS.map(|l| hsl_to_hex(h, damped_saturation(s, l), l)),
    }
}

/// Derive an 11-step neutral scale tinted by a base color.
///
/// A single heavily desaturated value replaces the per-step damping so every
/// shade reads as a near-gray with a hint of the base hue.
pub(crate) fn generate_neutral_scale(base: &str) -> ColorScale {
    let Hsl { h, s, .. } = hex_to_hsl(base);
    let tint = (f64::from(s) * 0.15).min(8.0);
    ColorScale {
        shades: NEUTRAL_LIGHTNESS.map(|l| hsl_to_hex(f64::from(h), tint, l)),
    }
}
