// tests/end_to_end.rs
//
// Real shell, real filesystem, temp directories.

#![cfg(unix)]

use std::fs;
use std::path::Path;

use gitter::config::{load_from_path, parse_str};
use gitter::console::{Console, SEPARATOR};
use gitter::exec::ShellExecutor;
use gitter::fs::RealFileSystem;
use gitter::runner::{run_all, PublishStatus, RunOptions, RunSummary, StageStatus};
use gitter_test_utils::{init_tracing, with_timeout};
use tempfile::TempDir;

struct Sandbox {
    _root: TempDir,
    src: String,
    out: String,
    binary: String,
}

fn sandbox() -> Sandbox {
    let root = tempfile::tempdir().unwrap();
    let src = root.path().join("src");
    let out = root.path().join("out");
    fs::create_dir_all(&src).unwrap();
    fs::create_dir_all(&out).unwrap();
    let binary = src.join("demo-bin");
    fs::write(&binary, "#!/bin/sh\n").unwrap();

    Sandbox {
        src: src.display().to_string(),
        out: out.display().to_string(),
        binary: binary.display().to_string(),
        _root: root,
    }
}

fn demo_config(sb: &Sandbox, update: &str, export: &str) -> String {
    format!(
        r#"
[program.demo]
path = "{src}"
update = "{update}"
build = "true"
export = "{export}"
binary_path = "{binary}"
"#,
        src = sb.src,
        binary = sb.binary,
    )
}

async fn run_text(config: &str) -> (RunSummary, String) {
    init_tracing();
    let cfg = parse_str(config).unwrap();
    let mut exec = ShellExecutor::new();
    let (mut console, captured) = Console::captured();

    let summary = with_timeout(run_all(
        &cfg,
        "/unused-home",
        &RunOptions::default(),
        &mut exec,
        &RealFileSystem,
        &mut console,
    ))
    .await
    .unwrap();

    (summary, captured.stdout())
}

#[tokio::test]
async fn demo_is_updated_built_and_linked() {
    let sb = sandbox();
    let (summary, out) = run_text(&demo_config(&sb, "true", &sb.out)).await;

    let link = Path::new(&sb.out).join("demo-bin");
    assert_eq!(fs::read_link(&link).unwrap(), Path::new(&sb.binary));

    let report = summary.get("demo").unwrap();
    assert_eq!(report.update, StageStatus::Succeeded);
    assert_eq!(report.build, StageStatus::Succeeded);
    assert_eq!(report.publish, PublishStatus::Linked { link: link.clone() });

    assert!(out.contains("Updated: demo\n"));
    assert!(out.contains("Built: demo\n"));
    assert!(out.contains(&format!("Linked {} -> {}\n", sb.binary, link.display())));
}

#[tokio::test]
async fn failing_update_prints_banner_and_still_builds() {
    let sb = sandbox();
    let (summary, out) = run_text(&demo_config(&sb, "false", &sb.out)).await;

    let report = summary.get("demo").unwrap();
    assert_eq!(
        report.update,
        StageStatus::Failed {
            exit_code: 1,
            stderr: String::new()
        }
    );
    assert_eq!(report.build, StageStatus::Succeeded);

    assert!(!out.contains("Updated: demo"));
    assert!(out.contains("There Was A Problem Updating: demo\n"));
    assert!(out.contains(SEPARATOR));
    assert!(out.contains("Built: demo\n"));
}

#[tokio::test]
async fn empty_export_skips_publishing() {
    let sb = sandbox();
    let (summary, out) = run_text(&demo_config(&sb, "true", "")).await;

    assert_eq!(summary.get("demo").unwrap().publish, PublishStatus::Skipped);
    assert!(out.contains("Provided Export Path Is Empty, Skipping Symlink\n"));
    assert_eq!(fs::read_dir(&sb.out).unwrap().count(), 0);
}

#[tokio::test]
async fn existing_regular_file_is_left_alone() {
    let sb = sandbox();
    let occupied = Path::new(&sb.out).join("demo-bin");
    fs::write(&occupied, "keep me").unwrap();

    let (summary, out) = run_text(&demo_config(&sb, "true", &sb.out)).await;

    assert!(matches!(
        summary.get("demo").unwrap().publish,
        PublishStatus::AlreadyExists { .. }
    ));
    assert!(out.contains("Symlink already exists at: "));
    assert_eq!(fs::read_to_string(&occupied).unwrap(), "keep me");
    assert!(!fs::symlink_metadata(&occupied).unwrap().file_type().is_symlink());
}

#[tokio::test]
async fn running_twice_is_idempotent() {
    let sb = sandbox();
    let config = demo_config(&sb, "true", &sb.out);

    run_text(&config).await;
    let (summary, _) = run_text(&config).await;

    assert!(matches!(
        summary.get("demo").unwrap().publish,
        PublishStatus::AlreadyExists { .. }
    ));
    assert_eq!(fs::read_dir(&sb.out).unwrap().count(), 1);
}

#[tokio::test]
async fn build_stderr_is_captured_verbatim() {
    let sb = sandbox();
    let config = format!(
        r#"
[program.demo]
path = "{src}"
update = "true"
build = "echo 'error[E0425]: cannot find value' >&2; exit 101"
"#,
        src = sb.src
    );

    let (summary, out) = run_text(&config).await;

    assert_eq!(
        summary.get("demo").unwrap().build,
        StageStatus::Failed {
            exit_code: 101,
            stderr: "error[E0425]: cannot find value\n".to_string()
        }
    );
    assert!(out.contains("There Was A Problem Building: demo\nerror[E0425]: cannot find value\n"));
}

#[tokio::test]
async fn missing_source_dir_is_a_stage_failure() {
    let sb = sandbox();
    let config = format!(
        r#"
[program.demo]
path = "{src}/does-not-exist"
"#,
        src = sb.src
    );

    let (summary, out) = run_text(&config).await;

    let report = summary.get("demo").unwrap();
    assert!(matches!(report.update, StageStatus::LaunchFailed { .. }));
    assert!(matches!(report.build, StageStatus::LaunchFailed { .. }));
    assert!(out.contains("There Was A Problem Building: demo\n"));
}

#[test]
fn config_file_round_trip_through_real_fs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[program.demo]\npath = \"~/src/demo\"\n").unwrap();

    let cfg = load_from_path(&RealFileSystem, &path).unwrap();
    assert_eq!(cfg.program["demo"].path, "~/src/demo");
}
