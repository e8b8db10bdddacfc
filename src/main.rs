mod chart;
mod color;
mod mode;
mod output;

use clap::Parser;

use color::{Harmony, generate_random_color};
use mode::{Palette, parse_hex_color, run_harmony, run_scale};
use output::print_error;

#[derive(Parser)]
#[command(
    name = "shadegen",
    version,
    about = "Color scale generator for design palettes (11-step shade scales)",
    after_help = "Examples:
  shadegen '#3b82f6'                          Brand scale from a base color
  shadegen '#3b82f6' --neutral                Add a neutral scale tinted by the base
  shadegen '#3b82f6' --success '#22c55e'      Add a status palette
  shadegen '#3b82f6' --harmony triadic        Related colors by hue rotation
  shadegen --random                           Pick a random base color
  shadegen '#3b82f6' --json palette.json      Export scales as JSON
  shadegen '#3b82f6' --tailwind               Print a tailwind.config.js snippet
  shadegen '#3b82f6' --image preview.png      Render a preview chart
  shadegen '#3b82f6' --no-color               Disable colored output"
)]
struct Args {
    /// Base brand color as a #RRGGBB hex string
    #[arg(required_unless_present = "random", conflicts_with = "random")]
    color: Option<String>,

    /// Pick a random base color instead of supplying one
    #[arg(short, long)]
    random: bool,

    /// Add a neutral scale, tinted by HEX (defaults to the base color)
    #[arg(short, long, value_name = "HEX")]
    neutral: Option<Option<String>>,

    /// Add a success status palette from HEX
    #[arg(long, value_name = "HEX")]
    success: Option<String>,

    /// Add a warning status palette from HEX
    #[arg(long, value_name = "HEX")]
    warning: Option<String>,

    /// Add an error status palette from HEX
    #[arg(long, value_name = "HEX")]
    error: Option<String>,

    /// Show harmony colors for the base instead of a scale
    #[arg(long, value_name = "KIND", value_enum)]
    harmony: Option<Harmony>,

    /// Export all scales as a JSON document
    #[arg(long, value_name = "PATH")]
    json: Option<String>,

    /// Print a tailwind.config.js colors snippet
    #[arg(long)]
    tailwind: bool,

    /// Render the palettes as a PNG preview chart
    #[arg(long, value_name = "PATH")]
    image: Option<String>,

    /// Suppress explanations (show data only)
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn parse_color_or_exit(input: &str) -> String {
    parse_hex_color(input).unwrap_or_else(|e| {
        print_error(&e);
        std::process::exit(1);
    })
}

fn main() {
    let args = Args::parse();

    // Handle --no-color
    if args.no_color {
        colored::control::set_override(false);
    }

    // Validate option combinations
    if args.harmony.is_some() {
        let incompatible = args.neutral.is_some()
            || args.success.is_some()
            || args.warning.is_some()
            || args.error.is_some()
            || args.json.is_some()
            || args.tailwind
            || args.image.is_some();
        if incompatible {
            print_error("--harmony cannot be combined with palette or export options");
            std::process::exit(1);
        }
    }

    // Validate output paths
    for path in [args.json.as_deref(), args.image.as_deref()]
        .into_iter()
        .flatten()
    {
        use std::path::Path;
        if let Some(parent) = Path::new(path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            print_error(&format!("Directory does not exist: {}", parent.display()));
            std::process::exit(1);
        }
    }

    let base = match &args.color {
        Some(input) => parse_color_or_exit(input),
        None => {
            let hex = generate_random_color();
            println!("Base color: {}", hex);
            println!();
            hex
        }
    };

    if let Some(kind) = args.harmony {
        run_harmony(&base, kind, args.quiet);
        return;
    }

    let mut palettes = vec![Palette::colored("brand", base.clone())];

    if let Some(neutral) = &args.neutral {
        let tint = match neutral {
            Some(input) => parse_color_or_exit(input),
            None => base.clone(),
        };
        palettes.push(Palette::neutral("neutral", tint));
    }

    for (name, value) in [
        ("success", &args.success),
        ("warning", &args.warning),
        ("error", &args.error),
    ] {
        if let Some(input) = value {
            palettes.push(Palette::colored(name, parse_color_or_exit(input)));
        }
    }

    run_scale(
        &palettes,
        args.quiet,
        args.image.as_deref(),
        args.json.as_deref(),
        args.tailwind,
    );
}
