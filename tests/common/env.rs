//! Test environment for isolated distpack runs.
//!
//! `TestEnv` is a temp project holding the packager inputs, a
//! `distpack.toml`, a fake packager script, the component stylesheet and an
//! image tree.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

use super::fixtures::*;

/// Result of running a distpack command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// NDJSON lines of stdout, parsed
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("not JSON: {line:?}: {e}"))
            })
            .collect()
    }

    /// Last NDJSON record with the given `event` name
    pub fn last_event(&self, name: &str) -> Option<serde_json::Value> {
        self.json_lines()
            .into_iter()
            .rev()
            .find(|line| line["event"] == name)
    }
}

pub struct TestEnv {
    pub project_root: TempDir,
    distpack_bin: PathBuf,
}

impl TestEnv {
    /// Project whose packager succeeds
    pub fn new() -> Self {
        Self::with_packager(FAKE_PACKAGER)
    }

    /// Project whose packager exits non-zero
    pub fn with_failing_packager() -> Self {
        Self::with_packager(FAILING_PACKAGER)
    }

    fn with_packager(script: &str) -> Self {
        let env = Self {
            project_root: TempDir::new().expect("Failed to create temp dir"),
            distpack_bin: PathBuf::from(env!("CARGO_BIN_EXE_distpack")),
        };

        env.write_project_file("ng-package.json", r#"{ "lib": { "entryFile": "src/public_api.ts" } }"#);
        env.write_project_file("tsconfig.dist.json", r#"{ "compilerOptions": {} }"#);
        env.write_project_file("distpack.toml", CONFIG);
        env.write_project_file("fake-ng-packagr.sh", script);
        env.write_project_file(STYLESHEET_PATH, STYLESHEET);
        for (path, content) in IMAGES {
            env.write_project_file(path, content);
        }
        env
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn dist_path(&self, relative: &str) -> PathBuf {
        self.project_path("dist").join(relative)
    }

    /// Run distpack from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run distpack from the project root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.distpack_bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env_remove("DISTPACK_LOG")
            .env_remove("RUST_LOG")
            .env_remove("DISTPACK_DIST_ROOT")
            .env_remove("DISTPACK_PACKAGER")
            .env_remove("DISTPACK_LEGACY_BUNDLE");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute distpack");
        output_to_result(output)
    }

    pub fn write_project_file(&self, relative: &str, content: &str) {
        let full_path = self.project_path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    pub fn read_dist_file(&self, relative: &str) -> String {
        std::fs::read_to_string(self.dist_path(relative))
            .unwrap_or_else(|e| panic!("Failed to read dist/{}: {}", relative, e))
    }

    pub fn read_manifest(&self) -> serde_json::Value {
        serde_json::from_str(&self.read_dist_file("package.json")).expect("manifest is JSON")
    }

    /// Every file under `dist/`, keyed by forward-slash relative path
    pub fn dist_tree(&self) -> BTreeMap<String, Vec<u8>> {
        let mut tree = BTreeMap::new();
        let root = self.project_path("dist");
        if root.is_dir() {
            collect(&root, &root, &mut tree);
        }
        tree
    }
}

fn collect(root: &Path, dir: &Path, tree: &mut BTreeMap<String, Vec<u8>>) {
    for entry in std::fs::read_dir(dir).expect("Failed to read dir") {
        let path = entry.expect("Failed to read entry").path();
        if path.is_dir() {
            collect(root, &path, tree);
        } else {
            let relative = path
                .strip_prefix(root)
                .expect("path under root")
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/");
            tree.insert(relative, std::fs::read(&path).expect("Failed to read file"));
        }
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
