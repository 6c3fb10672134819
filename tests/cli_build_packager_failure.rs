//! A failing packager terminates the process before any later stage.

#![cfg(unix)]

mod common;

use common::*;

#[test]
fn packager_failure_exits_with_status_one() {
    let env = TestEnv::with_failing_packager();

    let result = env.run(&["build"]);

    assert!(!result.success);
    assert_eq!(result.exit_code, 1);
    assert!(
        result.stderr.contains("exited with"),
        "stderr:\n{}",
        result.stderr
    );
    assert!(result.stderr.contains("TS2304"), "stderr:\n{}", result.stderr);
}

#[test]
fn packager_failure_skips_later_stages() {
    let env = TestEnv::with_failing_packager();

    env.run(&["build"]);

    assert!(env.dist_tree().is_empty());
}

#[test]
fn missing_tsconfig_fails_compile() {
    let env = TestEnv::new();
    std::fs::remove_file(env.project_path("tsconfig.dist.json")).unwrap();

    let result = env.run(&["build"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("tsconfig.dist.json"), "stderr:\n{}", result.stderr);
    assert!(!env.dist_path("package.json").exists());
}

#[test]
fn packager_failure_reported_in_json() {
    let env = TestEnv::with_failing_packager();

    let result = env.run(&["build", "--json"]);

    assert_eq!(result.exit_code, 1);
    let error = result.last_event("error").expect("error event");
    assert_eq!(error["stage"], "compile");
    assert!(result.last_event("complete").is_none());
}

#[test]
fn later_stage_failure_also_exits_non_zero() {
    let env = TestEnv::new();
    env.write_project_file(STYLESHEET_PATH, ".a { color: $missing; }");

    let result = env.run(&["build"]);

    assert!(!result.success);
    assert!(result.stderr.contains("assets stage failed"), "stderr:\n{}", result.stderr);
    // Stages before the failure already ran
    assert!(env.dist_path("esm5/areo-ionic-selectable.min.js").exists());
}
