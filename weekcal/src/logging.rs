use tracing_subscriber::EnvFilter;

/// Workspace crate targets that receive log output.
const CRATE_TARGETS: &[&str] = &[
    "weekcal",
    "wcal_core",
    "wcal_time",
    "wcal_planner",
    "wcal_holidays",
];

/// Initialize tracing from the repeated `-v` flag.
///
/// No flag shows warnings only; `-v` adds progress at info, `-vv`
/// debug, `-vvv` trace.  A set `RUST_LOG` overrides the flag entirely.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let directives = CRATE_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
