use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");
    println!("cargo:rerun-if-env-changed=GYMTRACK_BUILD_ID");

    let version = env!("CARGO_PKG_VERSION");
    let build = std::env::var("GYMTRACK_BUILD_ID")
        .ok()
        .filter(|id| !id.trim().is_empty())
        .or_else(commit_id);

    match build {
        Some(id) => println!("cargo:rustc-env=GIT_VERSION={}+{}", version, id.trim()),
        None => println!("cargo:rustc-env=GIT_VERSION={}", version),
    }
}

/// Short commit hash, suffixed with `.dirty` when the tree has local changes.
fn commit_id() -> Option<String> {
    let hash = git(&["rev-parse", "--short", "HEAD"])?;
    let dirty = git(&["status", "--porcelain", "--untracked-files=no"])
        .map(|status| !status.is_empty())
        .unwrap_or(false);
    Some(if dirty { format!("{hash}.dirty") } else { hash })
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    output
        .status
        .success()
        .then(|| String::from_utf8_lossy(&output.stdout).trim().to_string())
}
