//! Stamps `--version` with the source revision.
//!
//! `SPENDSCOPE_REVISION` wins when set (source tarballs carry no `.git`);
//! otherwise `git describe`, with a `-dirty` suffix for uncommitted changes.

use std::env;
use std::path::PathBuf;
use std::process::Command;

const OVERRIDE_VAR: &str = "SPENDSCOPE_REVISION";

fn git_describe(workspace: &PathBuf) -> Option<String> {
    let out = Command::new("git")
        .arg("-C")
        .arg(workspace)
        .args(["describe", "--always", "--dirty", "--abbrev=10"])
        .output()
        .ok()?;
    if !out.status.success() {
        return None;
    }
    let rev = String::from_utf8(out.stdout).ok()?.trim().to_owned();
    (!rev.is_empty()).then_some(rev)
}

fn main() {
    let workspace = env::var_os("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .and_then(|dir| dir.parent().map(PathBuf::from))
        .unwrap_or_default();

    let revision = env::var(OVERRIDE_VAR)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .or_else(|| git_describe(&workspace))
        .unwrap_or_else(|| "unknown".to_owned());

    println!("cargo:rustc-env=SPENDSCOPE_BUILD_SHA={revision}");
    println!("cargo:rerun-if-env-changed={OVERRIDE_VAR}");
    println!("cargo:rerun-if-changed={}", workspace.join(".git/HEAD").display());
    println!("cargo:rerun-if-changed={}", workspace.join(".git/index").display());
}
