use colored::*;

use crate::color::{contrast_color, hex_to_rgb};

pub(crate) fn print_error(msg: &str) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Solid block rendered with the shade as a truecolor background
pub(crate) fn swatch(hex: &str) -> ColoredString {
    let (r, g, b) = hex_to_rgb(hex);
    "        ".on_truecolor(r, g, b)
}

/// "Aa" sample drawn in the black/white contrast color over the shade
pub(crate) fn contrast_sample(hex: &str) -> ColoredString {
    let (r, g, b) = hex_to_rgb(hex);
    let (cr, cg, cb) = hex_to_rgb(contrast_color(hex));
    "  Aa  ".truecolor(cr, cg, cb).on_truecolor(r, g, b)
}

pub(crate) fn print_palette_header(name: &str, base: &str) {
    println!("[{}] base {}", name.bold(), base);
}

pub(crate) fn print_shade_row(key: u16, hex: &str) {
    println!("  {:>4}  {}  {}{}", key, hex, swatch(hex), contrast_sample(hex));
}

pub(crate) fn print_legend() {
    println!("Step: scale position, 50 (lightest) to 950 (darkest)");
    println!("Aa: sample text in the contrast color picked for that shade");
    println!("Swatches require a truecolor-capable terminal");
}
