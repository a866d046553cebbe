use std::ffi::OsStr;
use std::fs;
use std::path::PathBuf;
use std::process::ExitStatus;

use assert_cmd::Command;
use tempfile::TempDir;

/// A scratch working directory for one test.
pub struct CivicWorkspace {
    pub temp_dir: TempDir,
    pub root: PathBuf,
}

impl CivicWorkspace {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("create temp dir");
        let root = temp_dir.path().to_path_buf();
        Self { temp_dir, root }
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root.join(".civic")
    }

    /// Write the session slot the identity collaborator would leave behind.
    pub fn sign_in(&self, id: i64, email: &str, name: &str, role: &str) {
        fs::create_dir_all(self.data_dir()).expect("create data dir");
        let session = serde_json::json!({
            "user": { "id": id, "email": email, "name": name, "role": role },
            "isAuthenticated": true,
        });
        fs::write(self.data_dir().join("user.json"), session.to_string()).expect("write session");
    }

    pub fn snapshot(&self) -> Option<serde_json::Value> {
        let text = fs::read_to_string(self.data_dir().join("civic-issues.json")).ok()?;
        serde_json::from_str(&text).ok()
    }
}

pub struct CmdOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

pub fn run_civic<I, S>(workspace: &CivicWorkspace, args: I, label: &str) -> CmdOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut cmd = Command::cargo_bin("civic").expect("civic binary");
    cmd.current_dir(&workspace.root)
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("CIVIC_DATA_DIR")
        .env_remove("CIVIC_USER_ID")
        .env_remove("CIVIC_USER_EMAIL")
        .env_remove("CIVIC_USER_NAME")
        .env_remove("CIVIC_ROLE");

    let output = cmd.output().expect("run civic");
    let out = CmdOutput {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    };
    if !out.status.success() {
        eprintln!("[{label}] stderr: {}", out.stderr);
    }
    out
}

/// Report an issue with the given title and category at a fixed location.
pub fn report(workspace: &CivicWorkspace, title: &str, category: &str, extra: &[&str]) -> i64 {
    let mut args = vec![
        "--json",
        "report",
        "--title",
        title,
        "--description",
        "reported from a test",
        "--category",
        category,
        "--lat",
        "19.07",
        "--lng",
        "72.87",
    ];
    args.extend_from_slice(extra);
    let out = run_civic(workspace, args, "report");
    assert!(out.status.success(), "report failed: {}", out.stderr);
    let issue: serde_json::Value = serde_json::from_str(&out.stdout).expect("report json");
    issue["id"].as_i64().expect("id")
}
