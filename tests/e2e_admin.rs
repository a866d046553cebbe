mod common;
use common::cli::{CivicWorkspace, report, run_civic};

#[test]
fn test_status_requires_admin() {
    let workspace = CivicWorkspace::new();
    let id = report(&workspace, "Pothole", "roads", &[]).to_string();

    let anonymous = run_civic(&workspace, ["status", &id, "resolved"], "anonymous");
    assert!(!anonymous.status.success());
    assert!(anonymous.stderr.contains("anonymous"));

    workspace.sign_in(1, "user@example.com", "Test User", "user");
    let user = run_civic(&workspace, ["status", &id, "resolved"], "user");
    assert!(!user.status.success());
    assert!(user.stderr.contains("Administrator role required"));

    assert_eq!(workspace.snapshot().unwrap()[0]["status"], "pending");
}

#[test]
fn test_forbidden_before_status_parse() {
    let workspace = CivicWorkspace::new();
    let id = report(&workspace, "Pothole", "roads", &[]).to_string();

    let out = run_civic(&workspace, ["status", &id, "closed"], "bogus");
    assert!(out.stderr.contains("Administrator role required"));
}

#[test]
fn test_admin_changes_status() {
    let workspace = CivicWorkspace::new();
    let id = report(&workspace, "Pothole", "roads", &[]).to_string();

    let out = run_civic(&workspace, ["--role", "admin", "status", &id, "in-progress"], "status");
    assert!(out.status.success(), "stderr: {}", out.stderr);
    assert!(out.stdout.contains("In Progress"));

    let snapshot = workspace.snapshot().unwrap();
    assert_eq!(snapshot[0]["status"], "in-progress");
    assert_eq!(snapshot[0]["title"], "Pothole");

    let bad = run_civic(&workspace, ["--role", "admin", "status", &id, "closed"], "bad");
    assert!(!bad.status.success());
    assert!(bad.stderr.contains("status"));
}

#[test]
fn test_admin_session_changes_status_of_missing_issue() {
    let workspace = CivicWorkspace::new();
    workspace.sign_in(2, "admin@example.com", "Admin User", "admin");

    let out = run_civic(&workspace, ["status", "7", "resolved"], "missing");
    assert!(!out.status.success());
    assert!(out.stderr.contains("Issue not found: 7"));
}

#[test]
fn test_delete_is_idempotent() {
    let workspace = CivicWorkspace::new();
    workspace.sign_in(2, "admin@example.com", "Admin User", "admin");
    let keep = report(&workspace, "Keep me", "parks", &[]);
    let drop = report(&workspace, "Drop me", "parks", &[]).to_string();

    let first = run_civic(&workspace, ["delete", &drop], "delete");
    assert!(first.status.success());
    assert!(first.stdout.contains(&format!("Deleted #{drop}")));

    let again = run_civic(&workspace, ["--json", "delete", &drop], "again");
    assert!(again.status.success());
    let result: serde_json::Value = serde_json::from_str(&again.stdout).unwrap();
    assert_eq!(result["deleted"], false);

    let snapshot = workspace.snapshot().unwrap();
    assert_eq!(snapshot.as_array().unwrap().len(), 1);
    assert_eq!(snapshot[0]["id"], keep);
}

#[test]
fn test_delete_forbidden_for_user() {
    let workspace = CivicWorkspace::new();
    let id = report(&workspace, "Stay", "other", &[]).to_string();

    let out = run_civic(&workspace, ["--role", "user", "delete", &id], "delete");
    assert!(!out.status.success());
    assert_eq!(workspace.snapshot().unwrap().as_array().unwrap().len(), 1);
}

#[test]
fn test_whoami_reflects_session_and_overrides() {
    let workspace = CivicWorkspace::new();
    let anon = run_civic(&workspace, ["whoami"], "anon");
    assert!(anon.stdout.contains("Not signed in"));

    workspace.sign_in(1, "user@example.com", "Test User", "user");
    let user = run_civic(&workspace, ["--json", "whoami"], "user");
    let who: serde_json::Value = serde_json::from_str(&user.stdout).unwrap();
    assert_eq!(who["admin"], false);
    assert_eq!(who["user"]["name"], "Test User");

    let admin = run_civic(&workspace, ["--json", "--role", "admin", "whoami"], "admin");
    let who: serde_json::Value = serde_json::from_str(&admin.stdout).unwrap();
    assert_eq!(who["admin"], true);
}
