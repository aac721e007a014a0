//! Process-wide log filtering.
//!
//! Legacy workbooks routinely trip warn-level styling diagnostics in the
//! writer library on every open and save. The filter composed here caps
//! that one target at ERROR for the lifetime of the process; every other
//! target follows `RUST_LOG`.

use tracing_subscriber::EnvFilter;

/// Log target whose warn-level diagnostics are dropped process-wide.
pub const STYLING_TARGET: &str = "rust_xlsxwriter";

/// Base directives applied when `RUST_LOG` is unset.
const DEFAULT_DIRECTIVES: &str = "info";

fn directives(base: &str) -> String {
    format!("{base},{STYLING_TARGET}=error")
}

fn base_directives() -> String {
    std::env::var("RUST_LOG")
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_DIRECTIVES.to_string())
}

/// Compose the process filter: the `RUST_LOG` directives when set, `info`
/// otherwise, always capping [`STYLING_TARGET`] at ERROR.
///
/// Invalid directives are dropped rather than failing startup.
pub fn build_filter() -> EnvFilter {
    EnvFilter::new(directives(&base_directives()))
}

/// Compose the filter from explicit directives instead of the environment.
pub fn filter_from(base: &str) -> EnvFilter {
    EnvFilter::new(directives(base))
}

/// Install the global subscriber with the composed filter.
///
/// Later calls, or calls after another subscriber is installed, are no-ops.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter())
        .try_init();
}
