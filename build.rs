use std::env;
use std::process::Command;

fn main() {
    emit("GCO_GIT_SHA", &short_head().unwrap_or_else(|| "unknown".into()));
    emit(
        "GCO_BUILD_TIME",
        &chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
    );
    emit(
        "GCO_TARGET",
        &env::var("TARGET").unwrap_or_else(|_| "unknown-target".into()),
    );
}

fn emit(key: &str, value: &str) {
    println!("cargo:rustc-env={key}={value}");
}

/// Abbreviated commit of the checkout, if built from one.
fn short_head() -> Option<String> {
    let out = Command::new("git")
        .args(["rev-parse", "--short=12", "HEAD"])
        .output()
        .ok()?;
    out.status
        .success()
        .then(|| String::from_utf8_lossy(&out.stdout).trim().to_string())
}
