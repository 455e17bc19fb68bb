use plotters::prelude::*;
use plotters::coord::Shift;
use plotters::coord::types::RangedCoordf64;

use std::path::Path;

use crate::{
    Sample,
    SoftmaxModel,
    error::{Error, Result},
};
use super::{
    class_color,
    decision_grid,
    is_svg,
    plot_error,
    PlotOptions,
};


const POINT_SIZE: i32 = 4;
const LINE_WIDTH: u32 = 2;
const REGION_ALPHA: f64 = 0.2;
const MARGIN: u32 = 10;


/// Draws three side-by-side panels into `path`:
///
/// 1. the examples colored by class,
/// 2. the examples with the separator line `score_c(x) = 0`
///    of every class `c` in the class color,
/// 3. the examples over the fused decision regions
///    `argmax_c score_c(x)`, with the region boundaries in black.
///
/// A path ending with `.svg` is rendered as SVG,
/// any other path as a bitmap (e.g., PNG).
pub fn plot_all<P: AsRef<Path>>(
    path: P,
    sample: &Sample,
    model: &SoftmaxModel,
    options: &PlotOptions,
) -> Result<()>
{
    options.validate()?;

    let n_feature = sample.shape().1;
    if n_feature != 2 {
        return Err(Error::Dimension(format!(
            "plots need 2 features, the sample has {n_feature}"
        )));
    }
    if model.shape() != (3, sample.n_class()) {
        return Err(Error::Dimension(format!(
            "the model has shape {:?}, expected (3, {})",
            model.shape(), sample.n_class()
        )));
    }

    let path = path.as_ref();
    if is_svg(path) {
        let root = SVGBackend::new(path, options.size).into_drawing_area();
        draw_panels(root, sample, model, options)
    } else {
        let root = BitMapBackend::new(path, options.size).into_drawing_area();
        draw_panels(root, sample, model, options)
    }
}


fn draw_panels<DB>(
    root: DrawingArea<DB, Shift>,
    sample: &Sample,
    model: &SoftmaxModel,
    options: &PlotOptions,
) -> Result<()>
    where DB: DrawingBackend,
{
    root.fill(&WHITE).map_err(plot_error)?;
    let areas = root.split_evenly((1, 3));

    // (a) Data
    let mut chart = panel(&areas[0], "data", options)?;
    draw_examples(&mut chart, sample)?;

    // (b) Per-class separators
    let mut chart = panel(&areas[1], "separators", options)?;
    draw_examples(&mut chart, sample)?;
    for (k, separator) in model.separators().into_iter().enumerate() {
        let segment = separator.and_then(|sep| {
            sep.clip(options.x_range, options.y_range)
        });
        let Some(segment) = segment else { continue; };

        let style = class_color(k + 1).stroke_width(LINE_WIDTH);
        chart.draw_series(LineSeries::new(segment, style))
            .map_err(plot_error)?;
    }

    // (c) Fused decision regions
    let mut chart = panel(&areas[2], "fused rule", options)?;
    let grid = decision_grid(
        model, options.x_range, options.y_range, options.resolution
    )?;
    let (dx, dy) = grid.cell_size();
    let cell = |i: usize, j: usize| {
        let (x, y) = (grid.xs()[i], grid.ys()[j]);
        [(x - dx / 2.0, y - dy / 2.0), (x + dx / 2.0, y + dy / 2.0)]
    };

    let n_grid = options.resolution;
    let regions = (0..n_grid)
        .flat_map(|j| (0..n_grid).map(move |i| (i, j)))
        .map(|(i, j)| {
            let color = class_color(grid.label_at(i, j));
            Rectangle::new(cell(i, j), color.mix(REGION_ALPHA).filled())
        });
    chart.draw_series(regions).map_err(plot_error)?;

    let boundary = grid.boundary_cells()
        .into_iter()
        .map(|(i, j)| Rectangle::new(cell(i, j), BLACK.filled()));
    chart.draw_series(boundary).map_err(plot_error)?;

    draw_examples(&mut chart, sample)?;

    root.present().map_err(plot_error)?;
    Ok(())
}


type Panel<'a, DB> = ChartContext<
    'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>
>;


/// Builds an axis-free panel over the plot window.
fn panel<'a, DB>(
    area: &'a DrawingArea<DB, Shift>,
    title: &str,
    options: &PlotOptions,
) -> Result<Panel<'a, DB>>
    where DB: DrawingBackend,
{
    let (x0, x1) = options.x_range;
    let (y0, y1) = options.y_range;

    let mut builder = ChartBuilder::on(area);
    builder.margin(MARGIN);
    if options.titles {
        builder.caption(title, ("sans-serif", 20));
    }
    builder.build_cartesian_2d(x0..x1, y0..y1)
        .map_err(plot_error)
}


/// Scatters the examples, one color per class.
fn draw_examples<DB>(chart: &mut Panel<'_, DB>, sample: &Sample)
    -> Result<()>
    where DB: DrawingBackend,
{
    let features = sample.features();
    for label in 1..=sample.n_class() {
        let style = class_color(label).filled();
        let points = sample.class_indices(label)
            .into_iter()
            .map(|i| {
                let xy = (features[1][i], features[2][i]);
                Circle::new(xy, POINT_SIZE, style)
            });
        chart.draw_series(points).map_err(plot_error)?;
    }
    Ok(())
}
