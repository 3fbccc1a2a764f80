use crate::common::{TestWorkspace, row, row_names, stderr_of, stdout_of};

fn list(ws: &TestWorkspace, args: &[&str]) -> std::process::Output {
    ws.gitz()
        .arg("list")
        .args(args)
        .output()
        .expect("Failed to run gitz")
}

#[test]
fn test_list_ranks_by_activity() {
    let ws = TestWorkspace::new();
    let quiet = ws.add_repo("quiet");
    let scratch = ws.add_repo("scratch");
    let edited = ws.add_repo("edited");
    ws.write_file(&scratch, "a.txt", "a");
    ws.write_file(&scratch, "b.txt", "b");
    ws.write_file(&edited, "initial-commit.txt", "changed");
    ws.write_config(&[
        TestWorkspace::repo_entry("quiet", &quiet),
        TestWorkspace::repo_entry("scratch", &scratch),
        TestWorkspace::repo_entry("edited", &edited),
    ]
    .join("\n"));

    let table = stdout_of(&list(&ws, &[]));

    let mut lines = table.lines();
    let titles = lines.next().unwrap();
    assert!(titles.contains("REPO"), "{table}");
    assert!(titles.contains("UPDATE"), "{table}");
    assert!(titles.contains("UNTRACKED"), "{table}");
    assert!(!titles.contains("UNMERGED"), "{table}");
    assert!(titles.contains("BRANCH INFO"), "{table}");
    assert_eq!(row_names(&table), ["scratch", "edited", "quiet"]);

    let words = |name| row(&table, name).split_whitespace().collect::<Vec<_>>();
    assert_eq!(words("scratch"), ["scratch", "2", "main"]);
    assert_eq!(words("edited"), ["edited", "1", "main"]);
    assert_eq!(words("quiet"), ["quiet", "main"]);
}

#[test]
fn test_list_rows_share_one_width() {
    let ws = TestWorkspace::new();
    let short = ws.add_repo("a");
    let long = ws.add_repo("a-much-longer-name");
    ws.write_file(&long, "new.txt", "new");
    ws.write_config(&[
        TestWorkspace::repo_entry("a", &short),
        TestWorkspace::repo_entry("a-much-longer-name", &long),
    ]
    .join("\n"));

    let table = stdout_of(&list(&ws, &[]));

    let widths: Vec<usize> = table
        .lines()
        .skip(1)
        .map(|line| line.chars().count())
        .collect();
    assert_eq!(widths.len(), 3, "{table}");
    assert!(widths.iter().all(|w| *w == widths[0]), "{table}");
}

#[test]
fn test_list_shows_upstream_link() {
    let ws = TestWorkspace::new();
    let ahead = ws.add_repo("ahead");
    ws.setup_upstream(&ahead);
    ws.commit(&ahead, "Second");
    ws.commit(&ahead, "Third");
    let synced = ws.add_repo("synced");
    ws.setup_upstream(&synced);
    ws.write_config(&[
        TestWorkspace::repo_entry("ahead", &ahead),
        TestWorkspace::repo_entry("synced", &synced),
    ]
    .join("\n"));

    let table = stdout_of(&list(&ws, &[]));

    assert_eq!(row_names(&table), ["ahead", "synced"]);
    assert_eq!(
        row(&table, "ahead").split_whitespace().collect::<Vec<_>>(),
        ["ahead", "main", "2", "⇢", "origin/main"]
    );
    assert_eq!(
        row(&table, "synced").split_whitespace().collect::<Vec<_>>(),
        ["synced", "main", "⟚", "origin/main"]
    );
}

#[test]
fn test_list_priority_beats_activity() {
    let ws = TestWorkspace::new();
    let pinned = ws.add_repo("pinned");
    let busy = ws.add_repo("busy");
    for n in 0..5 {
        ws.write_file(&busy, &format!("{n}.txt"), "x");
    }
    ws.write_config(&format!(
        "{}priority = 11\n\n{}",
        TestWorkspace::repo_entry("pinned", &pinned),
        TestWorkspace::repo_entry("busy", &busy),
    ));

    let table = stdout_of(&list(&ws, &[]));

    assert_eq!(row_names(&table), ["pinned", "busy"]);
}

#[test]
fn test_list_all_scans_repos_under() {
    let ws = TestWorkspace::new();
    let pinned = ws.add_repo("pinned");
    let scan_root = ws.home().join("src");
    ws.add_repo_in(&scan_root, "zeta");
    let alpha = ws.add_repo_in(&scan_root, "alpha");
    ws.write_file(&alpha, "todo.txt", "x");
    ws.add_repo_in(&scan_root, ".hidden");
    std::fs::create_dir_all(scan_root.join("plain")).unwrap();
    ws.write_config(&format!(
        "repos-under = [\"{}\"]\n\n{}",
        scan_root.display(),
        TestWorkspace::repo_entry("pinned", &pinned),
    ));

    let configured = stdout_of(&list(&ws, &[]));
    assert_eq!(row_names(&configured), ["pinned"]);

    let all = stdout_of(&list(&ws, &["--all"]));
    assert_eq!(row_names(&all), ["pinned", "alpha", "zeta"]);
}

#[test]
fn test_list_global_all_flag() {
    let ws = TestWorkspace::new();
    let scan_root = ws.home().join("src");
    ws.add_repo_in(&scan_root, "found");
    ws.write_config(&format!("repos-under = [\"{}\"]\n", scan_root.display()));

    let output = ws
        .gitz()
        .args(["--all", "list"])
        .output()
        .expect("Failed to run gitz");

    assert_eq!(row_names(&stdout_of(&output)), ["found"]);
}

#[test]
fn test_list_duplicate_names_fail() {
    let ws = TestWorkspace::new();
    let pinned = ws.add_repo("tools");
    let scan_root = ws.home().join("src");
    ws.add_repo_in(&scan_root, "tools");
    ws.write_config(&format!(
        "repos-under = [\"{}\"]\n\n{}",
        scan_root.display(),
        TestWorkspace::repo_entry("tools", &pinned),
    ));

    let output = list(&ws, &["--all"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = stderr_of(&output);
    assert!(stderr.contains("Repository name tools is used twice"), "{stderr}");
    assert!(stderr.contains("~/code/tools"), "{stderr}");
    assert!(stderr.contains("~/src/tools"), "{stderr}");
}

#[test]
fn test_list_fails_for_non_repository() {
    let ws = TestWorkspace::new();
    let good = ws.add_repo("good");
    let plain = ws.home().join("plain");
    std::fs::create_dir_all(&plain).unwrap();
    ws.write_config(&[
        TestWorkspace::repo_entry("good", &good),
        TestWorkspace::repo_entry("plain", &plain),
    ]
    .join("\n"));

    let output = list(&ws, &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty(), "no partial table");
    let stderr = stderr_of(&output);
    assert!(
        stderr.contains("Failed to read status of plain at ~/plain"),
        "{stderr}"
    );
}

#[test]
fn test_list_verbose_logs_git_commands() {
    let ws = TestWorkspace::new();
    let repo = ws.add_repo("logged");
    ws.write_config(&TestWorkspace::repo_entry("logged", &repo));

    let output = list(&ws, &["-v"]);

    stdout_of(&output);
    let stderr = stderr_of(&output);
    assert!(stderr.contains("status --porcelain=v2"), "{stderr}");
    assert!(stderr.contains("[logged]"), "{stderr}");
}
