//! Palette export: JSON document and Tailwind config snippet

use serde::Serialize;

use crate::color::ColorScale;

use super::Palette;

/// Exported palette document: each present palette's full scale, keyed by
/// shade step, in scale order
#[derive(Serialize)]
struct PaletteDocument<'a> {
    brand: &'a ColorScale,
    #[serde(skip_serializing_if = "Option::is_none")]
    neutral: Option<&'a ColorScale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    success: Option<&'a ColorScale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    warning: Option<&'a ColorScale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a ColorScale>,
}

fn scale_for<'a>(palettes: &'a [Palette], name: &str) -> Option<&'a ColorScale> {
    palettes.iter().find(|p| p.name == name).map(|p| &p.scale)
}

/// Write all scales to a pretty-printed JSON file
pub fn write_json(palettes: &[Palette], path: &str) -> Result<(), String> {
    let doc = PaletteDocument {
        brand: scale_for(palettes, "brand")
            .ok_or_else(|| "No brand palette to export".to_string())?,
        neutral: scale_for(palettes, "neutral"),
        success: scale_for(palettes, "success"),
        warning: scale_for(palettes, "warning"),
        error: scale_for(palettes, "error"),
    };

    let json = serde_json::to_string_pretty(&doc)
        .map_err(|e| format!("Failed to serialize palette: {}", e))?;
    std::fs::write(path, json).map_err(|e| format!("Failed to write {}: {}", path, e))
}

/// Print a `colors` block ready to paste into tailwind.config.js
pub fn print_tailwind_config(palettes: &[Palette]) {
    println!("colors: {{");
    for palette in palettes {
        println!("  {}: {{", palette.name);
        for (step, hex) in palette.scale.iter() {
            println!("    {}: '{}',", step.key(), hex);
        }
        println!("  }},");
    }
    println!("}}");
}
