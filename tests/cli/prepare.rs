use crate::harness::TestContext;
use predicates::prelude::*;
use std::fs;

#[test]
fn prepare_creates_placeholder_tree() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("prepare")
        .assert()
        .success()
        .stdout(predicate::str::contains("32 directories created"));

    ctx.assert_placeholders_exist();
    assert_eq!(fs::read_dir(ctx.workspace_root()).unwrap().count(), 30);
    assert!(ctx.extraction_target().is_dir());
}

#[test]
fn prepare_is_idempotent() {
    let ctx = TestContext::new();

    ctx.cli().arg("prepare").assert().success();
    ctx.cli()
        .arg("prepare")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 directories created"));

    ctx.assert_placeholders_exist();
}

#[test]
fn prepare_honours_base_dir_flag() {
    let ctx = TestContext::new();
    let elsewhere = ctx.work_dir().join("nested/base");
    fs::create_dir_all(&elsewhere).unwrap();

    ctx.cli().args(["prepare", "--base-dir"]).arg(&elsewhere).assert().success();

    assert!(elsewhere.join("node_modules/lx/axios").is_dir());
    assert!(!ctx.workspace_root().exists());
}

#[test]
fn prepare_rejects_unknown_settings_keys() {
    let ctx = TestContext::new();
    fs::write(ctx.work_dir().join("botstrap.toml"), "[archive]\nmirror = \"x\"\n").unwrap();

    ctx.cli()
        .arg("prepare")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: TOML parse error"));

    assert!(!ctx.workspace_root().exists());
}

#[test]
fn prepare_rejects_missing_explicit_settings_file() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["prepare", "--config", "absent.toml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Settings file not found"));
}
