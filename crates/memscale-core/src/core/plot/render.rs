use super::chart::ChartData;
use crate::core::palette::Rgb;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

const FONT: &str = "sans-serif";
const TITLE_FONT_SIZE: i32 = 28;
const AXIS_FONT_SIZE: i32 = 22;
const ANNOTATION_FONT_SIZE: i32 = 16;
const LEGEND_FONT_SIZE: i32 = 15;
const MARKER_RADIUS: u32 = 5;
const DASH_PX: u32 = 8;
const GAP_PX: u32 = 5;
const LEGEND_COLUMNS: usize = 4;
const LEGEND_CELL: (i32, i32) = (110, 24);
const HEADROOM: f64 = 1.1;

const ESTIMATE_GRAY: RGBColor = RGBColor(128, 128, 128);

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Nothing to draw: the chart has no points")]
    EmptyChart,

    #[error("Unsupported output format for '{path}': only .svg is supported", path = path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("Cannot plot a non-finite memory value for {label}")]
    NonFiniteValue { label: String },

    #[error("Drawing backend error: {0}")]
    Backend(String),

    #[error("Failed to write chart to '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn backend_error<E: std::fmt::Display>(e: E) -> RenderError {
    RenderError::Backend(e.to_string())
}

impl From<Rgb> for RGBColor {
    fn from(c: Rgb) -> Self {
        RGBColor(c.0, c.1, c.2)
    }
}

/// Renders the chart as an SVG document held in memory.
pub fn render_svg_string(chart: &ChartData) -> Result<String, RenderError> {
    if chart.points().is_empty() {
        return Err(RenderError::EmptyChart);
    }
    if let Some(label) = chart.first_non_finite() {
        return Err(RenderError::NonFiniteValue { label });
    }

    let options = chart.options();
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (options.width, options.height))
            .into_drawing_area();
        draw(&root, chart)?;
        root.present().map_err(backend_error)?;
    }
    Ok(svg)
}

/// Renders the chart to `path`. The format follows the file extension.
pub fn render_to_file(chart: &ChartData, path: &Path) -> Result<(), RenderError> {
    let is_svg = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"));
    if !is_svg {
        return Err(RenderError::UnsupportedFormat {
            path: path.to_path_buf(),
        });
    }

    let svg = render_svg_string(chart)?;
    std::fs::write(path, svg).map_err(|source| RenderError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Chart written to {:?}", path);
    Ok(())
}

fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    data: &ChartData,
) -> Result<(), RenderError> {
    let options = data.options();
    root.fill(&WHITE).map_err(backend_error)?;

    let x_max = (data.x_max() * 1.05).max(1.0);
    let y_max = (data.y_max() * HEADROOM).max(1.0);
    debug!(x_max, y_max, "Building chart coordinates.");

    let mut chart = ChartBuilder::on(root)
        .caption(&options.title, (FONT, TITLE_FONT_SIZE))
        .margin(15)
        .x_label_area_size(55)
        .y_label_area_size(80)
        .build_cartesian_2d(0.0..x_max, 0.0..y_max)
        .map_err(backend_error)?;

    chart
        .configure_mesh()
        .x_desc(options.x_label.as_str())
        .y_desc(options.y_label.as_str())
        .axis_desc_style((FONT, AXIS_FONT_SIZE))
        .label_style((FONT, ANNOTATION_FONT_SIZE))
        .light_line_style(BLACK.mix(0.08))
        .draw()
        .map_err(backend_error)?;

    chart
        .draw_series(LineSeries::new(data.seed_line(), BLACK.stroke_width(2)))
        .map_err(backend_error)?
        .label("Verified - basis for estimate")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK.stroke_width(2)));

    chart
        .draw_series(DashedLineSeries::new(
            data.estimate_line(),
            DASH_PX,
            GAP_PX,
            ESTIMATE_GRAY.stroke_width(2),
        ))
        .map_err(backend_error)?
        .label("Estimated")
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 8, y)], ESTIMATE_GRAY.stroke_width(2))
        });

    let reference = data
        .reference()
        .iter()
        .map(|&(c, m)| (c as f64, m))
        .collect::<Vec<_>>();
    chart
        .draw_series(LineSeries::new(reference, BLUE.stroke_width(2)))
        .map_err(backend_error)?
        .label("Verified")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(2)));

    chart
        .draw_series(data.points().iter().map(|p| {
            Circle::new(
                (p.carbon_count as f64, p.memory_mb),
                MARKER_RADIUS,
                RGBColor::from(p.color).filled(),
            )
        }))
        .map_err(backend_error)?;

    let annotation_style = TextStyle::from((FONT, ANNOTATION_FONT_SIZE).into_font())
        .pos(Pos::new(HPos::Right, VPos::Bottom));
    chart
        .draw_series(data.points().iter().map(|p| {
            Text::new(
                format!("{:.1}", p.memory_mb),
                (p.carbon_count as f64, p.memory_mb),
                annotation_style.clone(),
            )
        }))
        .map_err(backend_error)?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .label_font((FONT, LEGEND_FONT_SIZE))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(backend_error)?;

    draw_molecule_legend(root, data)
}

fn draw_molecule_legend<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    data: &ChartData,
) -> Result<(), RenderError> {
    let (width, height) = root.dim_in_pixel();
    let rows = data.points().len().div_ceil(LEGEND_COLUMNS) as i32;
    let columns = data.points().len().min(LEGEND_COLUMNS) as i32;
    let origin = (
        width as i32 - 120 - columns * LEGEND_CELL.0,
        height as i32 - 80 - rows * LEGEND_CELL.1,
    );

    root.draw(&Rectangle::new(
        [
            (origin.0 - 8, origin.1 - 8),
            (
                origin.0 + columns * LEGEND_CELL.0,
                origin.1 + rows * LEGEND_CELL.1 - 4,
            ),
        ],
        WHITE.mix(0.8).filled(),
    ))
    .map_err(backend_error)?;

    let label_style =
        TextStyle::from((FONT, LEGEND_FONT_SIZE).into_font()).pos(Pos::new(HPos::Left, VPos::Center));
    for (point, (x, y)) in data
        .points()
        .iter()
        .zip(legend_slots(data.points().len(), LEGEND_COLUMNS, origin, LEGEND_CELL))
    {
        let marker_center = (x + MARKER_RADIUS as i32, y + LEGEND_CELL.1 / 2 - 4);
        root.draw(&Circle::new(
            marker_center,
            MARKER_RADIUS,
            RGBColor::from(point.color).filled(),
        ))
        .map_err(backend_error)?;
        root.draw(&Text::new(
            point.label.clone(),
            (marker_center.0 + 12, marker_center.1),
            label_style.clone(),
        ))
        .map_err(backend_error)?;
    }
    Ok(())
}

/// Top-left pixel position of each legend entry, filled row by row.
fn legend_slots(
    count: usize,
    columns: usize,
    origin: (i32, i32),
    cell: (i32, i32),
) -> impl Iterator<Item = (i32, i32)> {
    let columns = columns.max(1);
    (0..count).map(move |i| {
        let (row, col) = ((i / columns) as i32, (i % columns) as i32);
        (origin.0 + col * cell.0, origin.1 + row * cell.1)
    })
}
