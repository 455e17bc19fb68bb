use crate::error::{Error, Result};


const DEFAULT_SIZE: (u32, u32) = (1200, 400);
const DEFAULT_RESOLUTION: usize = 300;


/// Options of [`plot_all`](super::plot_all).
#[derive(Debug, Clone, PartialEq)]
pub struct PlotOptions {
    /// Size of the whole figure in pixels.
    pub size: (u32, u32),
    /// Number of grid points per axis for the fused decision regions.
    pub resolution: usize,
    /// Horizontal extent of each panel.
    pub x_range: (f64, f64),
    /// Vertical extent of each panel.
    pub y_range: (f64, f64),
    /// Draw a title above each panel.
    pub titles: bool,
}


impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            resolution: DEFAULT_RESOLUTION,
            x_range: (0.0, 1.0),
            y_range: (0.0, 1.0),
            titles: true,
        }
    }
}


impl PlotOptions {
    /// Set the figure size in pixels.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }


    /// Set the grid resolution.
    pub fn resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }


    /// Set the plotted window.
    pub fn window(mut self, x_range: (f64, f64), y_range: (f64, f64)) -> Self {
        self.x_range = x_range;
        self.y_range = y_range;
        self
    }


    /// Set whether the panels have titles.
    pub fn titles(mut self, flag: bool) -> Self {
        self.titles = flag;
        self
    }


    pub(crate) fn validate(&self) -> Result<()> {
        let (x0, x1) = self.x_range;
        let (y0, y1) = self.y_range;
        if !(x0 < x1 && y0 < y1) {
            return Err(Error::Argument(format!(
                "empty plot window {:?} × {:?}", self.x_range, self.y_range
            )));
        }
        if self.resolution < 2 {
            return Err(Error::Argument(
                "the grid resolution must be at least 2".into()
            ));
        }
        if self.size.0 == 0 || self.size.1 == 0 {
            return Err(Error::Argument("the figure size is zero".into()));
        }
        Ok(())
    }
}
