//! Palette scale display mode

use crate::chart;
use crate::output::{print_error, print_legend, print_palette_header, print_shade_row};

use super::Palette;
use super::export::{print_tailwind_config, write_json};

/// Print the derived scales and run any requested exports
pub fn run_scale(
    palettes: &[Palette],
    quiet: bool,
    image_path: Option<&str>,
    json_path: Option<&str>,
    tailwind: bool,
) {
    for palette in palettes {
        print_palette_header(palette.name, &palette.base);
        for (step, hex) in palette.scale.iter() {
            print_shade_row(step.key(), hex);
        }
        println!();
    }

    if tailwind {
        print_tailwind_config(palettes);
        println!();
    }

    if let Some(path) = json_path {
        if let Err(e) = write_json(palettes, path) {
            print_error(&e);
        } else {
            eprintln!("Palette saved to: {}", path);
        }
    }

    if let Some(path) = image_path {
        if let Err(e) = chart::render_palette_chart(palettes, path) {
            print_error(&e);
        } else {
            eprintln!("Chart saved to: {}", path);
        }
    }

    if !quiet {
        print_legend();
    }
}
