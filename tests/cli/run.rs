use crate::harness::{ArchiveBuilder, TestContext};
use predicates::prelude::*;
use std::fs;

fn serve(server: &mut mockito::Server, payload: Vec<u8>) -> mockito::Mock {
    server.mock("GET", "/main.zip").with_status(200).with_body(payload).expect(1).create()
}

#[test]
fn run_stops_when_download_fails() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mock = server.mock("GET", "/main.zip").with_status(404).expect(1).create();
    ctx.write_settings(&format!("{}/main.zip", server.url()), "sh");
    ctx.write_local_config("module.exports = {};");

    ctx.cli()
        .arg("run")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to download"))
        .stderr(predicate::str::contains("launching program").not());

    mock.assert();
    assert_eq!(ctx.extraction_entries(), 0);
}

#[test]
fn run_is_the_default_command() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mock = server.mock("GET", "/main.zip").with_status(503).expect(1).create();
    ctx.write_settings(&format!("{}/main.zip", server.url()), "sh");

    ctx.cli().assert().code(1).stderr(predicate::str::contains("HTTP 503"));

    mock.assert();
    ctx.assert_placeholders_exist();
}

#[test]
fn run_fails_when_archive_has_no_directory() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let _mock = serve(&mut server, ArchiveBuilder::new().file("index.js", "exit 0").build());
    ctx.write_settings(&format!("{}/main.zip", server.url()), "sh");
    ctx.write_local_config("local");

    ctx.cli()
        .arg("run")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Archive extracted no directory"));

    assert!(!ctx.extraction_target().join("config.js").exists());
}

#[test]
fn run_fails_when_entry_point_is_missing() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let _mock = serve(&mut server, ArchiveBuilder::new().file("app/main.js", "").build());
    ctx.write_settings(&format!("{}/main.zip", server.url()), "sh");

    ctx.cli()
        .arg("run")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Entry point not found"))
        .stderr(predicate::str::contains("launching program").not());
}

#[test]
fn run_reports_missing_runtime() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let _mock = serve(&mut server, ArchiveBuilder::new().file("app/index.js", "").build());
    ctx.write_settings(&format!("{}/main.zip", server.url()), "botstrap-missing-runtime");

    ctx.cli()
        .arg("run")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to launch 'botstrap-missing-runtime index.js'"));
}

#[cfg(unix)]
#[test]
fn run_launches_sample_app_in_its_directory() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let payload = ArchiveBuilder::new()
        .dir("sample-app/")
        .file("sample-app/index.js", "pwd > marker\n")
        .file("sample-app/config.js", "module.exports = { default: true };")
        .build();
    let mock = serve(&mut server, payload);
    ctx.write_settings(&format!("{}/main.zip", server.url()), "sh");
    ctx.write_local_config("module.exports = { owner: '254700000000' };\n");

    ctx.cli().arg("run").assert().success();

    mock.assert();
    let app = ctx.extraction_target().join("sample-app");
    let marker = fs::read_to_string(app.join("marker")).expect("entry point should write marker");
    assert_eq!(
        fs::canonicalize(marker.trim()).unwrap(),
        fs::canonicalize(&app).unwrap(),
        "entry point should run inside the program root"
    );
    assert_eq!(
        fs::read(app.join("config.js")).unwrap(),
        fs::read(ctx.work_dir().join("config.js")).unwrap()
    );
}

#[cfg(unix)]
#[test]
fn run_keeps_default_config_when_local_one_is_absent() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let payload = ArchiveBuilder::new()
        .file("app/index.js", "exit 0\n")
        .file("app/config.js", "default")
        .build();
    let _mock = serve(&mut server, payload);
    ctx.write_settings(&format!("{}/main.zip", server.url()), "sh");

    ctx.cli().arg("run").assert().success().stderr(predicate::str::contains("config.js not found"));

    let config = fs::read_to_string(ctx.extraction_target().join("app/config.js")).unwrap();
    assert_eq!(config, "default");
}

#[cfg(unix)]
#[test]
fn run_propagates_program_exit_code() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let _mock = serve(&mut server, ArchiveBuilder::new().file("app/index.js", "exit 5\n").build());
    ctx.write_settings(&format!("{}/main.zip", server.url()), "sh");

    ctx.cli().arg("run").assert().code(5);
}
