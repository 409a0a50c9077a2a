use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");

    let hash = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_default();

    let is_dirty = Command::new("git")
        .args(["status", "--porcelain"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| !o.stdout.is_empty())
        .unwrap_or(false);

    let version = env!("CARGO_PKG_VERSION");
    let full = match (hash.is_empty(), is_dirty) {
        (true, _) => version.to_string(),
        (false, false) => format!("{} ({})", version, hash),
        (false, true) => format!("{} ({}-dirty)", version, hash),
    };

    println!("cargo:rustc-env=WISATA_VERSION={}", full);
}
