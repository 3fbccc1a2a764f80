use crate::common::{TestWorkspace, row, stderr_of, stdout_of};

fn setup() -> TestWorkspace {
    let ws = TestWorkspace::new();
    let app = ws.add_repo("app");
    ws.write_file(&app, "notes.txt", "draft");
    let app_docs = ws.add_repo("app-docs");
    ws.write_config(&[
        TestWorkspace::repo_entry("app", &app),
        TestWorkspace::repo_entry("app-docs", &app_docs),
    ]
    .join("\n"));
    ws
}

#[test]
fn test_preview_shows_path_and_short_status() {
    let ws = setup();
    let table = stdout_of(&ws.gitz().arg("list").output().unwrap());

    let output = ws
        .gitz()
        .args(["preview", row(&table, "app")])
        .output()
        .unwrap();

    assert_eq!(
        stdout_of(&output),
        "~/code/app\n\n## main\n?? notes.txt\n"
    );
}

#[test]
fn test_preview_prefers_longest_name() {
    let ws = setup();
    let table = stdout_of(&ws.gitz().arg("list").output().unwrap());

    let output = ws
        .gitz()
        .args(["preview", row(&table, "app-docs")])
        .output()
        .unwrap();

    assert_eq!(stdout_of(&output), "~/code/app-docs\n\n## main\n");
}

#[test]
fn test_preview_survives_missing_scan_dir() {
    let ws = TestWorkspace::new();
    let kept = ws.add_repo("kept");
    let scan_root = ws.home().join("src");
    ws.add_repo_in(&scan_root, "scanned");
    ws.write_config(&format!(
        "repos-under = [\"{}\", \"{}\"]\n\n{}",
        ws.home().join("gone").display(),
        scan_root.display(),
        TestWorkspace::repo_entry("kept", &kept),
    ));
    let table = stdout_of(&ws.gitz().arg("list").output().unwrap());

    let output = ws
        .gitz()
        .args(["preview", row(&table, "kept")])
        .output()
        .unwrap();
    assert_eq!(stdout_of(&output), "~/code/kept\n\n## main\n");

    let output = ws
        .gitz()
        .args(["preview", "       scanned                main"])
        .output()
        .unwrap();
    assert_eq!(stdout_of(&output), "~/src/scanned\n\n## main\n");
}

#[test]
fn test_preview_unknown_row() {
    let ws = setup();

    let output = ws
        .gitz()
        .args(["preview", "   nowhere   3   main"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = stderr_of(&output);
    assert!(stderr.contains("No repository named nowhere"), "{stderr}");
}

#[test]
fn test_preview_is_hidden_from_help() {
    let ws = TestWorkspace::new();

    let output = ws.gitz().arg("--help").output().unwrap();

    let help = stdout_of(&output);
    assert!(help.contains("list"), "{help}");
    assert!(!help.contains("preview"), "{help}");
}
