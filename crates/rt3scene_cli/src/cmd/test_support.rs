use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::OnceLock;

use rt3scene_testkit::{fixture_path as shared_fixture_path, stdout_json, target_dir as workspace_target_dir};

static RT3SCENE_BIN: OnceLock<PathBuf> = OnceLock::new();

pub(crate) fn fixture_path(name: &str) -> String {
	shared_fixture_path(name).to_string_lossy().into_owned()
}

pub(crate) fn run_rt3scene(args: &[&str]) -> Output {
	Command::new(rt3scene_bin()).args(args).output().expect("rt3scene command executes")
}

pub(crate) fn run_rt3scene_json(args: &[&str]) -> serde_json::Value {
	stdout_json(&run_rt3scene(args))
}

fn rt3scene_bin() -> &'static PathBuf {
	RT3SCENE_BIN.get_or_init(resolve_rt3scene_bin)
}

fn resolve_rt3scene_bin() -> PathBuf {
	if let Ok(path) = std::env::var("CARGO_BIN_EXE_rt3scene") {
		return PathBuf::from(path);
	}

	let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
	let target_dir = workspace_target_dir();

	let mut bin = target_dir.join("debug");
	bin.push(if cfg!(windows) { "rt3scene.exe" } else { "rt3scene" });

	let status = Command::new("cargo")
		.current_dir(&manifest_dir)
		.args(["build", "--quiet", "--bin", "rt3scene"])
		.status()
		.expect("cargo build executes");
	assert!(status.success(), "failed to build rt3scene binary at {}", bin.display());

	bin
}
