//! Tracing setup for the cruise CLI.

use tracing_subscriber::EnvFilter;

/// Workspace crates whose spans and events the default filter admits.
/// Dependency noise stays at the subscriber's silence level.
const WORKSPACE_TARGETS: [&str; 6] = [
    "cruise",
    "cruise_frame",
    "cruise_pps",
    "cruise_plots",
    "cruise_ht",
    "cruise_sim",
];

/// Installs the fmt subscriber, filtered by the repeated `-v` flag
/// count: bare invocations log warnings only, `-v` adds the per-command
/// progress lines, `-vv` the per-trial detail, `-vvv` everything.
///
/// An explicit `RUST_LOG` environment variable takes precedence over
/// the flag.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directives = WORKSPACE_TARGETS
            .map(|krate| format!("{krate}={level}"))
            .join(",");
        EnvFilter::new(directives)
    });

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
