use std::process::Command;

// Exposes GIT_VERSION for `keepsake --version` and the startup banner.
fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs");

    let pkg_version = std::env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "unknown".into());
    let version = describe_head()
        .map(|described| version_from_describe(&described, &pkg_version))
        .unwrap_or(pkg_version);

    println!("cargo:rustc-env=GIT_VERSION={version}");
}

fn describe_head() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--always", "--dirty", "--tags", "--match", "v[0-9]*"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let described = String::from_utf8(output.stdout).ok()?.trim().to_string();
    (!described.is_empty()).then_some(described)
}

/// `v1.2.0` -> `1.2.0`, `v1.2.0-3-gabc123` -> `1.2.0-3-gabc123`,
/// untagged `abc123-dirty` -> `<pkg>+gabc123-dirty`.
fn version_from_describe(described: &str, pkg_version: &str) -> String {
    match described.strip_prefix('v') {
        Some(tagged) => tagged.to_string(),
        None => format!("{pkg_version}+g{described}"),
    }
}
