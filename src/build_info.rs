//! Process-wide build metadata and uptime formatting.
//!
//! The version strings are baked in at compile time by `build.rs`; the start
//! instant is captured once when the server initializes.

use std::time::{Duration, Instant};

/// Toolchain that compiled this binary, e.g. `rustc 1.83.0 (90b35a623 2024-11-26)`
pub const RUNTIME_VERSION: &str = env!("MJOLNIR_RUSTC_VERSION");

/// Release version, overridable at compile time with `MJOLNIR_VERSION`
pub const VERSION: &str = match option_env!("MJOLNIR_VERSION") {
    Some(version) => version,
    None => env!("CARGO_PKG_VERSION"),
};

/// Build timestamp (RFC 3339, UTC)
pub const BUILD_TIME: &str = env!("MJOLNIR_BUILD_TIMESTAMP");

/// Immutable build metadata shared by all handlers.
#[derive(Debug, Clone)]
pub struct BuildInfo {
    pub version: String,
    pub build_time: String,
    pub runtime_version: String,
    pub started_at: Instant,
}

impl BuildInfo {
    /// Metadata for the running binary, with the start instant taken now.
    pub fn current() -> Self {
        Self::new(VERSION, BUILD_TIME, RUNTIME_VERSION)
    }

    pub fn new(
        version: impl Into<String>,
        build_time: impl Into<String>,
        runtime_version: impl Into<String>,
    ) -> Self {
        Self {
            version: version.into(),
            build_time: build_time.into(),
            runtime_version: runtime_version.into(),
            started_at: Instant::now(),
        }
    }

    /// Elapsed time since the process initialized.
    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}

/// Render a duration rounded to whole seconds, e.g. `0s`, `42s`, `3m7s`, `2h0m5s`.
///
/// Halves round up. Units above the largest non-zero one are omitted, lower
/// ones are always printed.
pub fn format_uptime(elapsed: Duration) -> String {
    let total = (elapsed.as_millis() + 500) / 1000;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{}h{}m{}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m{}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_uptime_zero() {
        assert_eq!(format_uptime(Duration::ZERO), "0s");
        assert_eq!(format_uptime(Duration::from_millis(499)), "0s");
    }

    #[test]
    fn test_format_uptime_rounds_half_up() {
        assert_eq!(format_uptime(Duration::from_millis(500)), "1s");
        assert_eq!(format_uptime(Duration::from_millis(59_600)), "1m0s");
    }

    #[test]
    fn test_format_uptime_minutes_and_hours() {
        assert_eq!(format_uptime(Duration::from_secs(42)), "42s");
        assert_eq!(format_uptime(Duration::from_secs(187)), "3m7s");
        assert_eq!(format_uptime(Duration::from_secs(3600)), "1h0m0s");
        assert_eq!(format_uptime(Duration::from_secs(7205)), "2h0m5s");
        assert_eq!(
            format_uptime(Duration::from_secs(100 * 3600 + 61)),
            "100h1m1s"
        );
    }

    #[test]
    fn test_build_info_constants_present() {
        let info = BuildInfo::current();
        assert!(!info.version.is_empty());
        assert!(!info.build_time.is_empty());
        assert!(!info.runtime_version.is_empty());
    }

    #[test]
    fn test_uptime_non_decreasing() {
        let info = BuildInfo::new("1.0.0", "unknown", "rustc 1.83.0");
        let first = info.uptime();
        let second = info.uptime();
        assert!(second >= first);
    }
}
