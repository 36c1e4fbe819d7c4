//! 端到端测试
//!
//! 用 svnadmin 在临时目录里搭建真实仓库，验证 log / diff 全流程。
//! 环境里没有 svn / svnadmin 时各用例直接跳过。

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use svn_tool::{AppError, Client, Revision};
use tempfile::TempDir;

fn svn_available() -> bool {
    which::which("svn").is_ok() && which::which("svnadmin").is_ok()
}

fn run(program: &str, args: &[&str], cwd: &Path) {
    let output = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("failed to spawn command");
    assert!(
        output.status.success(),
        "{} {:?} failed: {}",
        program,
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}

struct TestRepo {
    _dir: TempDir,
    wc: PathBuf,
}

/// 创建一个空仓库并检出工作副本
fn setup_repo() -> TestRepo {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let repo_path = dir.path().join("repo");
    let wc_path = dir.path().join("wc");

    run(
        "svnadmin",
        &["create", repo_path.to_str().unwrap()],
        dir.path(),
    );

    let url = format!("file://{}", repo_path.display());
    run(
        "svn",
        &["checkout", &url, wc_path.to_str().unwrap()],
        dir.path(),
    );

    TestRepo { _dir: dir, wc: wc_path }
}

/// 写入文件并提交
fn commit_file(wc: &Path, name: &str, content: &str, message: &str) {
    fs::write(wc.join(name), content).expect("failed to write file");
    run("svn", &["add", name], wc);
    run("svn", &["commit", "-m", message], wc);
}

#[test]
fn construction_resolves_workdir() {
    if !svn_available() {
        eprintln!("svn not available, skipping");
        return;
    }

    let repo = setup_repo();
    let client = Client::new(Some(&repo.wc)).expect("construction should succeed");

    assert!(client.workdir().is_absolute());
    assert_eq!(
        client.workdir(),
        repo.wc.canonicalize().unwrap().as_path()
    );
}

#[test]
fn construction_rejects_missing_path() {
    if !svn_available() {
        eprintln!("svn not available, skipping");
        return;
    }

    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");

    match Client::new(Some(&missing)) {
        Err(AppError::RepositoryDirNotFound(path)) => {
            assert!(path.contains("does-not-exist"));
        }
        other => panic!("expected RepositoryDirNotFound, got {:?}", other.err()),
    }
}

#[test]
fn construction_rejects_file_path() {
    if !svn_available() {
        eprintln!("svn not available, skipping");
        return;
    }

    let dir = tempfile::tempdir().unwrap();
    let file_path = dir.path().join("a-file");
    fs::write(&file_path, "not a directory").unwrap();

    assert!(matches!(
        Client::new(Some(&file_path)),
        Err(AppError::NotADirectory(_))
    ));
}

#[test]
fn log_returns_latest_entry() {
    if !svn_available() {
        eprintln!("svn not available, skipping");
        return;
    }

    let repo = setup_repo();
    commit_file(&repo.wc, "a.txt", "one", "add a");
    commit_file(&repo.wc, "b.txt", "two", "add b");
    run("svn", &["update"], &repo.wc);

    let client = Client::new(Some(&repo.wc)).unwrap();

    let entries = client.log(None, Revision::Head).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].revision, 2);
    assert_eq!(entries[0].message.as_deref(), Some("add b"));
    assert!(entries[0].author.is_some());
    assert!(entries[0].date.is_some());
}

#[test]
fn log_scoped_to_file_and_revision() {
    if !svn_available() {
        eprintln!("svn not available, skipping");
        return;
    }

    let repo = setup_repo();
    commit_file(&repo.wc, "a.txt", "one", "add a");
    run("svn", &["update"], &repo.wc);

    let client = Client::new(Some(&repo.wc)).unwrap();

    let entries = client
        .log(Some(Path::new("a.txt")), Revision::Number(1))
        .unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].revision, 1);
    assert_eq!(entries[0].message.as_deref(), Some("add a"));
}

#[test]
fn log_unknown_revision() {
    if !svn_available() {
        eprintln!("svn not available, skipping");
        return;
    }

    let repo = setup_repo();
    commit_file(&repo.wc, "a.txt", "one", "add a");

    let client = Client::new(Some(&repo.wc)).unwrap();

    match client.log(None, Revision::Number(99)) {
        Err(AppError::NoSuchRevision(rev)) => assert_eq!(rev, "99"),
        other => panic!("expected NoSuchRevision, got {:?}", other.err()),
    }
}

#[test]
fn diff_reports_added_file() {
    if !svn_available() {
        eprintln!("svn not available, skipping");
        return;
    }

    let repo = setup_repo();
    commit_file(&repo.wc, "a.txt", "one", "add a");

    let client = Client::new(Some(&repo.wc)).unwrap();

    let diff = client.diff(0, Some(1)).unwrap();
    assert_eq!(diff.len(), 1);

    let path = &diff.paths()[0];
    assert_eq!(path.item, "added");
    assert_eq!(path.kind, "file");
    assert_eq!(path.filepath, "a.txt");
}

#[test]
fn diff_end_defaults_to_head() {
    if !svn_available() {
        eprintln!("svn not available, skipping");
        return;
    }

    let repo = setup_repo();
    commit_file(&repo.wc, "a.txt", "one", "add a");

    let client = Client::new(Some(&repo.wc)).unwrap();

    let explicit = client.diff(0, Some(1)).unwrap();
    let defaulted = client.diff(0, None).unwrap();
    assert_eq!(explicit, defaulted);
}

#[test]
fn diff_unknown_revision() {
    if !svn_available() {
        eprintln!("svn not available, skipping");
        return;
    }

    let repo = setup_repo();
    commit_file(&repo.wc, "a.txt", "one", "add a");

    let client = Client::new(Some(&repo.wc)).unwrap();

    match client.diff(1, Some(99)) {
        Err(AppError::NoSuchRevision(rev)) => assert_eq!(rev, "99"),
        other => panic!("expected NoSuchRevision, got {:?}", other.err()),
    }
}
