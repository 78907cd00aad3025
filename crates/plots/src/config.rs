//! Configuration for second-stage plot sampling.

use crate::error::PlotError;

/// Configuration for plot allocation and measurement simulation.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use cruise_plots::PlotConfig;
///
/// let config = PlotConfig::new()
///     .with_plot_spacing_acres(4.0)
///     .with_max_plots(20);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    /// Acres represented by one plot; `ceil(acres / spacing)` plots are laid out.
    plot_spacing_acres: f64,
    /// Minimum plots per stand (>= 2 so variance is computable).
    min_plots: usize,
    /// Maximum plots per stand (cost cap).
    max_plots: usize,
    /// Upper truncation bound for per-acre volume observations.
    volume_cap: f64,
}

impl PlotConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `plot_spacing_acres = 5.0`, `min_plots = 2`,
    /// `max_plots = 30`, `volume_cap = 6000.0`.
    pub fn new() -> Self {
        Self {
            plot_spacing_acres: 5.0,
            min_plots: 2,
            max_plots: 30,
            volume_cap: 6000.0,
        }
    }

    /// Sets the acres-per-plot spacing.
    pub fn with_plot_spacing_acres(mut self, spacing: f64) -> Self {
        self.plot_spacing_acres = spacing;
        self
    }

    /// Sets the minimum plots per stand.
    pub fn with_min_plots(mut self, min: usize) -> Self {
        self.min_plots = min;
        self
    }

    /// Sets the maximum plots per stand.
    pub fn with_max_plots(mut self, max: usize) -> Self {
        self.max_plots = max;
        self
    }

    /// Sets the per-acre volume truncation cap.
    pub fn with_volume_cap(mut self, cap: f64) -> Self {
        self.volume_cap = cap;
        self
    }

    /// Returns the acres-per-plot spacing.
    pub fn plot_spacing_acres(&self) -> f64 {
        self.plot_spacing_acres
    }

    /// Returns the minimum plots per stand.
    pub fn min_plots(&self) -> usize {
        self.min_plots
    }

    /// Returns the maximum plots per stand.
    pub fn max_plots(&self) -> usize {
        self.max_plots
    }

    /// Returns the per-acre volume truncation cap.
    pub fn volume_cap(&self) -> f64 {
        self.volume_cap
    }

    /// Validates this configuration.
    ///
    /// Returns an error if the spacing or cap is non-finite / non-positive,
    /// `min_plots < 2`, or `max_plots < min_plots`.
    pub fn validate(&self) -> Result<(), PlotError> {
        if !self.plot_spacing_acres.is_finite() || self.plot_spacing_acres <= 0.0 {
            return Err(PlotError::InvalidSpacing {
                spacing: self.plot_spacing_acres,
            });
        }
        if self.min_plots < 2 {
            return Err(PlotError::MinPlotsTooSmall {
                min_plots: self.min_plots,
            });
        }
        if self.max_plots < self.min_plots {
            return Err(PlotError::MaxBelowMin {
                min_plots: self.min_plots,
                max_plots: self.max_plots,
            });
        }
        if !self.volume_cap.is_finite() || self.volume_cap <= 0.0 {
            return Err(PlotError::InvalidCap {
                cap: self.volume_cap,
            });
        }
        Ok(())
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self::new()
    }
}
