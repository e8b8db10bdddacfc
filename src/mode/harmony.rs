//! Color harmony display mode

use crate::color::{Harmony, generate_harmony_colors, hex_to_hsl};
use crate::output::swatch;

/// Print the harmony companions of a base color with their decoded HSL
pub fn run_harmony(base: &str, kind: Harmony, quiet: bool) {
    let colors = generate_harmony_colors(base, kind);

    println!("[{}] base {}", kind.label(), base);
    for hex in &colors {
        let hsl = hex_to_hsl(hex);
        println!(
            "  {}  {}  h={:>3} s={:>3} l={:>3}",
            hex,
            swatch(hex),
            hsl.h,
            hsl.s,
            hsl.l
        );
    }

    if !quiet {
        println!();
        println!("Hue offsets are relative to the base color; saturation and");
        println!("lightness carry over except in monochromatic mode.");
    }
}
