use std::env;
use std::fs;
use std::path::PathBuf;

/// Build-time tunables and their defaults
///
/// Each value is forwarded to the crate through `rustc-env` and parsed at
/// startup by `parameters::BuildParameters`.
const TUNABLES: &[(&str, &str)] = &[
    ("HAT_MODE", "heading"),
    ("HAT_TICK_HZ", "60"),
    ("HAT_HEADING_THRESHOLD", "0.8"),
    ("HAT_RATE_THRESHOLD", "0.3"),
];

fn main() {
    for (name, default) in TUNABLES {
        if let Ok(value) = env::var(name) {
            println!("cargo:rustc-env={}={}", name, value);
            println!("cargo:warning=Using {} from environment: {}", name, value);
        } else {
            println!("cargo:rustc-env={}={}", name, default);
        }
        println!("cargo:rerun-if-env-changed={}", name);
    }

    // Put memory.x where the linker can find it
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR not set"));
    fs::write(out_dir.join("memory.x"), include_bytes!("memory.x"))
        .expect("Failed to write memory.x");
    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rerun-if-changed=memory.x");
}
