use plotters::prelude::*;
use plotters::coord::Shift;

use std::path::Path;

use crate::error::{Error, Result};
use super::{is_svg, plot_error};


const SIZE: (u32, u32) = (960, 540);


/// Draws the cost value per iteration into `path`.
/// `costs[t]` is the cost after iteration `t + 1`.
pub fn plot_cost_history<P: AsRef<Path>>(path: P, costs: &[f64])
    -> Result<()>
{
    if costs.is_empty() {
        return Err(Error::Argument("the cost history is empty".into()));
    }
    if costs.iter().any(|c| !c.is_finite()) {
        return Err(Error::Argument(
            "the cost history has a non-finite value".into()
        ));
    }

    let path = path.as_ref();
    if is_svg(path) {
        draw_history(SVGBackend::new(path, SIZE).into_drawing_area(), costs)
    } else {
        draw_history(BitMapBackend::new(path, SIZE).into_drawing_area(), costs)
    }
}


fn draw_history<DB>(root: DrawingArea<DB, Shift>, costs: &[f64])
    -> Result<()>
    where DB: DrawingBackend,
{
    let max_iter = costs.len();
    let max_cost = costs.iter().copied().fold(0.0, f64::max);

    root.fill(&WHITE).map_err(plot_error)?;

    let mut chart = ChartBuilder::on(&root)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .margin(10)
        .caption("Softmax cost", ("sans-serif", 30))
        .build_cartesian_2d(1..max_iter.max(2), 0.0..(max_cost * 1.05 + 1e-12))
        .map_err(plot_error)?;

    chart.configure_mesh()
        .x_desc("iteration")
        .y_desc("cost")
        .draw()
        .map_err(plot_error)?;

    let points = costs.iter()
        .enumerate()
        .map(|(t, &c)| (t + 1, c));
    chart.draw_series(LineSeries::new(points, BLUE.stroke_width(2)))
        .map_err(plot_error)?;

    root.present().map_err(plot_error)?;
    Ok(())
}
