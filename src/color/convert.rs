//! Hex/RGB/HSL conversions and the contrast selector

/// HSL triple with integer components: hue in [0,360), saturation and
/// lightness in [0,100].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) struct Hsl {
    pub(crate) h: i32,
    pub(crate) s: i32,
    pub(crate) l: i32,
}

fn channel(hex: &str, at: usize) -> u8 {
    hex.get(at..at + 2)
        .and_then(|pair| u8::from_str_radix(pair, 16).ok())
        .unwrap_or(0)
}

/// Split a `#rrggbb` string into its three channel bytes.
///
/// Callers validate hex syntax at the input boundary; malformed input
/// produces zeroed channels rather than an error.
pub(crate) fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
    (channel(hex, 1), channel(hex, 3), channel(hex, 5))
}

/// Convert a `#rrggbb` string to integer HSL.
pub(crate) fn hex_to_hsl(hex: &str) -> Hsl {
    let (r, g, b) = hex_to_rgb(hex);
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let mut h = 0.0;
    let mut s = 0.0;
    if max > min {
        let d = max - min;
        s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
    }

    Hsl {
        h: ((h * 60.0).round() as i32) % 360,
        s: (s * 100.0).round() as i32,
        l: (l * 100.0).round() as i32,
    }
}

/// Convert HSL to a lowercase `#rrggbb` string.
///
/// Saturation and lightness are percentages; fractional values are accepted
/// so the scale generators can pass damped saturations straight through.
pub(crate) fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    let s = s / 100.0;
    let l = l / 100.0;
    let a = s * l.min(1.0 - l);
    let f = |n: f64| {
        let k = (n + h / 30.0) % 12.0;
        let v = 255.0 * (l - a * (-1.0_f64).max((k - 3.0).min((9.0 - k).min(1.0))));
        v.round().clamp(0.0, 255.0) as u8
    };
    format!("#{:02x}{:02x}{:02x}", f(0.0), f(8.0), f(4.0))
}

/// Pick black or white text for the given background color.
///
/// Uses ITU-R BT.601 luma weights with a fixed 0.5 threshold.
pub(crate) fn contrast_color(hex: &str) -> &'static str {
    let (r, g, b) = hex_to_rgb(hex);
    let luma = (0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)) / 255.0;
    if luma > 0.5 { "#000000" } else { "#ffffff" }
}
