//! Build script for mjolnir
//!
//! Captures build identification at compile time:
//! - rustc version (reported as the runtime version)
//! - Build timestamp (overridable with `MJOLNIR_BUILD_TIME`)

use std::process::Command;

fn main() {
    let rustc = std::env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let rustc_version = Command::new(rustc)
        .arg("--version")
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                String::from_utf8(output.stdout).ok()
            } else {
                None
            }
        })
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    // Release pipelines pin the build time for reproducible images
    let build_time = std::env::var("MJOLNIR_BUILD_TIME")
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| {
            chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
        });

    println!("cargo:rustc-env=MJOLNIR_RUSTC_VERSION={}", rustc_version);
    println!("cargo:rustc-env=MJOLNIR_BUILD_TIMESTAMP={}", build_time);
    println!("cargo:rerun-if-env-changed=MJOLNIR_BUILD_TIME");
    println!("cargo:rerun-if-env-changed=MJOLNIR_VERSION");
    println!("cargo:rerun-if-changed=build.rs");
}
