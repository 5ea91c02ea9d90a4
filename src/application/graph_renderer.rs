// Graph renderer - draws one meter graph through the canvas primitives

use crate::application::report_canvas::{ReportCanvas, Rgb};
use crate::domain::graph::ResolvedGraph;
use crate::domain::layout::GraphSize;
use crate::domain::window::{TimeWindow, axis_label};

const FRAME_COLOR: Rgb = (0.0, 0.0, 0.0);
const GRID_COLOR: Rgb = (0.85, 0.85, 0.85);

/// Line colors assigned to series by position, wrapping when a graph has
/// more meters than the palette.
const PALETTE: [Rgb; 6] = [
    (0.8, 0.1, 0.1),
    (0.1, 0.1, 0.8),
    (0.1, 0.6, 0.1),
    (0.85, 0.55, 0.0),
    (0.5, 0.1, 0.6),
    (0.1, 0.6, 0.6),
];

/// Horizontal bands on the value axis.
const VALUE_STEPS: usize = 4;

/// Draws one resolved graph at `origin`: title, gridlines scaled by the
/// dominant series, the series polylines in configured order, and a legend
/// below the time axis.
pub fn render_graph<C: ReportCanvas>(
    canvas: &mut C,
    graph: &ResolvedGraph,
    window: &TimeWindow,
    origin: (f64, f64),
    size: GraphSize,
    utc_offset_secs: i64,
) {
    let (x0, y0) = origin;
    let peak = graph.dominant_peak();

    canvas.text_bold((x0, y0 + size.height + 8.0), 12.0, &graph.title);

    draw_value_grid(canvas, origin, size, peak);
    draw_time_grid(canvas, window, origin, size, utc_offset_secs);
    draw_frame(canvas, origin, size);

    for (index, series) in graph.series.iter().enumerate() {
        let color = PALETTE[index % PALETTE.len()];
        if !series.is_empty() {
            let points: Vec<(f64, f64)> = series
                .samples
                .iter()
                .map(|sample| {
                    (
                        x0 + x_offset(sample.time_ms, window, size.width),
                        y0 + y_offset(sample.value, peak, size.height),
                    )
                })
                .collect();
            canvas.stroke_polyline(&points, color, 1.0);
        }
        draw_legend_entry(canvas, origin, index, &series.meter, color);
    }
}

fn draw_frame<C: ReportCanvas>(canvas: &mut C, (x0, y0): (f64, f64), size: GraphSize) {
    let corners = [
        (x0, y0),
        (x0 + size.width, y0),
        (x0 + size.width, y0 + size.height),
        (x0, y0 + size.height),
        (x0, y0),
    ];
    canvas.stroke_polyline(&corners, FRAME_COLOR, 1.0);
}

fn draw_value_grid<C: ReportCanvas>(
    canvas: &mut C,
    (x0, y0): (f64, f64),
    size: GraphSize,
    peak: f64,
) {
    canvas.text((x0 - 30.0, y0 - 3.0), 8.0, "0");
    for step in 1..=VALUE_STEPS {
        let fraction = step as f64 / VALUE_STEPS as f64;
        let y = y0 + size.height * fraction;
        if step < VALUE_STEPS {
            canvas.stroke_line((x0, y), (x0 + size.width, y), GRID_COLOR, 0.5);
        }
        canvas.text((x0 - 30.0, y - 3.0), 8.0, &format_value(peak * fraction));
    }
}

fn draw_time_grid<C: ReportCanvas>(
    canvas: &mut C,
    window: &TimeWindow,
    (x0, y0): (f64, f64),
    size: GraphSize,
    utc_offset_secs: i64,
) {
    for mark in window.major_marks() {
        let x = x0 + x_offset(mark, window, size.width);
        if mark > window.start_ms() && mark < window.end_ms() {
            canvas.stroke_line((x, y0), (x, y0 + size.height), GRID_COLOR, 0.5);
        }
        canvas.text(
            (x - 12.0, y0 - 10.0),
            8.0,
            &axis_label(mark, utc_offset_secs, window.ticks.major_ms),
        );
    }
    for mark in window.minor_marks() {
        let x = x0 + x_offset(mark, window, size.width);
        canvas.stroke_line((x, y0), (x, y0 - 3.0), FRAME_COLOR, 0.5);
    }
}

fn draw_legend_entry<C: ReportCanvas>(
    canvas: &mut C,
    (x0, y0): (f64, f64),
    index: usize,
    meter: &str,
    color: Rgb,
) {
    let y = y0 - 24.0 - 10.0 * index as f64;
    canvas.stroke_line((x0 + 2.0, y), (x0 + 16.0, y), color, 1.5);
    canvas.text((x0 + 20.0, y - 2.5), 8.0, meter);
}

/// Horizontal offset of `time_ms` within the window, in points. Samples
/// outside the window clamp to its edges.
fn x_offset(time_ms: i64, window: &TimeWindow, width: f64) -> f64 {
    let clamped = time_ms.clamp(window.start_ms(), window.end_ms());
    (clamped - window.start_ms()) as f64 / window.span_ms() as f64 * width
}

/// Vertical offset of `value` under the dominant scale, in points. A zero
/// peak keeps everything on the baseline so an empty graph still renders
/// its axes.
fn y_offset(value: f64, peak: f64, height: f64) -> f64 {
    if peak > 0.0 {
        value.max(0.0) / peak * height
    } else {
        0.0
    }
}

/// Compact caption for a value-axis gridline.
fn format_value(value: f64) -> String {
    if value >= 1e9 {
        format!("{:.1}G", value / 1e9)
    } else if value >= 1e6 {
        format!("{:.1}M", value / 1e6)
    } else if value >= 1e3 {
        format!("{:.1}k", value / 1e3)
    } else if value >= 10.0 || value == value.trunc() {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}
