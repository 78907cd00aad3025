//! Pure conversion functions: TOML config structs -> crate API config types.

use cruise_ht::HtConfig;
use cruise_plots::PlotConfig;
use cruise_pps::PpsConfig;

use crate::config::DesignToml;

/// Builds a [`PpsConfig`] from the TOML design configuration.
pub fn build_pps_config(design: &DesignToml) -> PpsConfig {
    PpsConfig::new(design.sample_size).with_mc_trials(design.mc_trials)
}

/// Builds a [`PlotConfig`] from the TOML design configuration.
pub fn build_plot_config(design: &DesignToml) -> PlotConfig {
    PlotConfig::new()
        .with_plot_spacing_acres(design.plot_spacing_acres)
        .with_min_plots(design.min_plots)
        .with_max_plots(design.max_plots)
        .with_volume_cap(design.volume_cap)
}

/// Builds an [`HtConfig`] from the TOML design configuration.
pub fn build_ht_config(design: &DesignToml) -> HtConfig {
    HtConfig::new().with_confidence_level(design.confidence_level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_from_defaults() {
        let design = DesignToml::default();
        let pps = build_pps_config(&design);
        assert_eq!(pps.sample_size(), 5);
        assert_eq!(pps.mc_trials(), 10_000);
        assert!(pps.validate().is_ok());

        let plots = build_plot_config(&design);
        assert!((plots.plot_spacing_acres() - 5.0).abs() < f64::EPSILON);
        assert!(plots.validate().is_ok());

        let ht = build_ht_config(&design);
        assert!((ht.confidence_level() - 0.90).abs() < f64::EPSILON);
        assert!(ht.validate().is_ok());
    }
}
