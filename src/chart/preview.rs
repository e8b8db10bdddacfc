//! Palette preview chart (per-shade colored bars, one series per palette)

use charming::{
    Chart, ImageRenderer,
    component::{Axis, Grid, Legend, Title},
    datatype::{DataPoint, DataPointItem},
    element::{
        AxisLabel, AxisType, Color, ItemStyle, Label, LabelPosition, LineStyle, SplitLine,
        TextStyle,
    },
    renderer::ImageFormat,
    series::Bar,
};

use super::{CHART_HEIGHT, CHART_WIDTH, COLOR_BACKGROUND, COLOR_GRID, COLOR_TEXT};
use crate::color::{Step, hex_to_hsl};
use crate::mode::Palette;

/// Render the palettes to a PNG file. Bar height is the shade's lightness and
/// each bar is filled with its own hex value.
pub fn render_palette_chart(palettes: &[Palette], output_path: &str) -> Result<(), String> {
    if palettes.is_empty() {
        return Err("No palettes to render".to_string());
    }

    let step_labels: Vec<String> = Step::ALL.iter().map(|s| s.key().to_string()).collect();

    let subtitle = palettes
        .iter()
        .map(|p| format!("{} {}", p.name, p.base))
        .collect::<Vec<_>>()
        .join("   ");

    let legend_data: Vec<String> = palettes.iter().map(|p| p.name.to_string()).collect();

    let mut chart = Chart::new()
        .background_color(Color::Value(COLOR_BACKGROUND.to_string()))
        .title(
            Title::new()
                .text("Palette Preview")
                .subtext(subtitle)
                .left("center")
                .top("3%")
                .text_style(TextStyle::new().color(COLOR_TEXT).font_size(36))
                .subtext_style(TextStyle::new().color(COLOR_TEXT).font_size(24)),
        )
        .legend(
            Legend::new()
                .data(legend_data)
                .bottom("3%")
                .item_gap(40)
                .text_style(TextStyle::new().color(COLOR_TEXT).font_size(24)),
        )
        .grid(
            Grid::new()
                .left("3%")
                .right("3%")
                .bottom("7%")
                .top("15%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(step_labels)
                .axis_label(AxisLabel::new().color(COLOR_TEXT).font_size(24)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("L")
                .name_text_style(TextStyle::new().color(COLOR_TEXT).font_size(24))
                .axis_label(AxisLabel::new().color(COLOR_TEXT).font_size(24))
                .split_line(
                    SplitLine::new().line_style(LineStyle::new().width(0.5).color(COLOR_GRID)),
                ),
        );

    for palette in palettes {
        let data: Vec<DataPoint> = palette
            .scale
            .iter()
            .map(|(_, hex)| {
                let lightness = f64::from(hex_to_hsl(hex).l);
                DataPointItem::new(lightness)
                    .item_style(ItemStyle::new().color(hex))
                    .into()
            })
            .collect();

        chart = chart.series(
            Bar::new().name(palette.name).data(data).label(
                Label::new()
                    .show(true)
                    .position(LabelPosition::Top)
                    .color(COLOR_TEXT)
                    .font_size(18)
                    .formatter("{c}"),
            ),
        );
    }

    let mut renderer = ImageRenderer::new(CHART_WIDTH, CHART_HEIGHT);
    renderer
        .save_format(ImageFormat::Png, &chart, output_path)
        .map_err(|e| format!("Failed to save chart: {}", e))
}
