//! Embeds the workspace's git short SHA as CONFDL_BUILD_SHA for `confdl --version`.

use std::path::{Path, PathBuf};
use std::process::Command;

fn git_short_sha(workspace: &Path) -> Option<String> {
    let out = Command::new("git")
        .arg("-C")
        .arg(workspace)
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !out.status.success() {
        return None;
    }
    let sha = String::from_utf8_lossy(&out.stdout).trim().to_string();
    (!sha.is_empty()).then_some(sha)
}

fn main() {
    let crate_dir = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".into()));
    let workspace = crate_dir.parent().map(Path::to_path_buf).unwrap_or(crate_dir);

    let sha = git_short_sha(&workspace).unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=CONFDL_BUILD_SHA={sha}");
    println!("cargo:rerun-if-changed={}", workspace.join(".git/HEAD").display());
}
