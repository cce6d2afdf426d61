//! Integration tests for the dagger binary.
//!
//! Every test runs against its own temporary HOME and config file, so the
//! user's real apps directory and shell profile are never touched.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Isolated home, config file and apps directory.
struct TestEnv {
    home: TempDir,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            home: TempDir::new().unwrap(),
        }
    }

    /// Environment whose apps are shell scripts run by `sh`.
    fn with_sh() -> Self {
        let env = Self::new();
        env.write_config(&format!(
            "apps_dir = {:?}\ninterpreter = \"sh\"\nentrypoint = \"main.sh\"\n\n[alias]\nprofile = {:?}\n",
            env.apps_dir(),
            env.profile()
        ));
        env
    }

    fn config_path(&self) -> PathBuf {
        self.home.path().join("config.toml")
    }

    fn apps_dir(&self) -> PathBuf {
        self.home.path().join("apps")
    }

    fn profile(&self) -> PathBuf {
        self.home.path().join(".bashrc")
    }

    fn write_config(&self, contents: &str) {
        fs::write(self.config_path(), contents).unwrap();
    }

    /// Write an app at a `/`-separated display path with the given script.
    fn app(&self, path: &str, script: Option<&str>) -> PathBuf {
        let dir = path
            .split('/')
            .fold(self.apps_dir(), |dir, name| dir.join(format!("[{name}]")));
        fs::create_dir_all(&dir).unwrap();
        if let Some(script) = script {
            fs::write(dir.join("main.sh"), script).unwrap();
        }
        dir
    }

    fn dagger(&self) -> Command {
        let mut cmd = Command::cargo_bin("dagger").unwrap();
        cmd.env("HOME", self.home.path())
            .env("DAGGER_CONFIG", self.config_path())
            .env_remove("XDG_CONFIG_HOME")
            .env_remove("RUST_LOG")
            .env("SHELL", "/bin/bash");
        cmd
    }
}

fn bracket(root: &Path, name: &str) -> PathBuf {
    root.join(format!("[{name}]"))
}

#[test]
fn version_flag_works() {
    TestEnv::new()
        .dagger()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("dagger"));
}

#[test]
fn help_lists_commands() {
    TestEnv::new()
        .dagger()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("menu"))
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("alias"));
}

#[test]
fn list_without_apps() {
    let env = TestEnv::with_sh();
    env.dagger()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No apps available yet."));
}

#[test]
fn list_skips_plain_and_reserved_directories() {
    let env = TestEnv::with_sh();
    env.app("Zed", Some("echo z\n"));
    env.app("Alpha", Some("echo a\n"));
    fs::create_dir_all(env.apps_dir().join("plain")).unwrap();
    fs::create_dir_all(env.apps_dir().join("config")).unwrap();
    fs::create_dir_all(env.apps_dir().join("[config]")).unwrap();

    env.dagger()
        .arg("list")
        .assert()
        .success()
        .stdout("Alpha\nZed\n");
}

#[test]
fn list_json_nests_sub_apps() {
    let env = TestEnv::with_sh();
    env.app("Foo", Some("echo foo\n"));
    env.app("Foo/Bar", None);

    let output = env.dagger().args(["list", "--json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{
            "name": "Foo",
            "runnable": true,
            "apps": [{ "name": "Bar", "runnable": false, "apps": [] }]
        }])
    );
}

#[test]
fn apps_dir_flag_overrides_config() {
    let env = TestEnv::with_sh();
    let other = TempDir::new().unwrap();
    fs::create_dir(bracket(other.path(), "Elsewhere")).unwrap();

    env.dagger()
        .arg("list")
        .arg("--apps-dir")
        .arg(other.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Elsewhere"));
}

#[test]
fn new_creates_sample_app() {
    let env = TestEnv::with_sh();
    env.dagger()
        .args(["new", "Hello World"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sample app 'Hello World' created"));

    let script = fs::read_to_string(bracket(&env.apps_dir(), "Hello World").join("main.sh")).unwrap();
    assert!(script.contains("Hello from Hello World!"));
}

#[test]
fn new_refuses_existing_app() {
    let env = TestEnv::with_sh();
    let dir = env.app("Foo", Some("echo original\n"));

    env.dagger()
        .args(["new", "Foo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(fs::read_to_string(dir.join("main.sh")).unwrap(), "echo original\n");
}

#[test]
fn new_refuses_reserved_name() {
    let env = TestEnv::with_sh();
    env.dagger()
        .args(["new", "config"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("reserved"));

    assert!(!bracket(&env.apps_dir(), "config").exists());
}

#[test]
fn quiet_suppresses_confirmation() {
    let env = TestEnv::with_sh();
    env.dagger()
        .args(["-q", "new", "Foo"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[cfg(unix)]
#[test]
fn run_sample_app() {
    let env = TestEnv::with_sh();
    env.dagger().args(["new", "Hello"]).assert().success();

    env.dagger()
        .args(["run", "Hello"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello from Hello!"))
        .stdout(predicate::str::contains("App 'Hello' finished"));
}

#[cfg(unix)]
#[test]
fn run_nested_app() {
    let env = TestEnv::with_sh();
    env.app("Foo", Some("echo foo\n"));
    env.app("Foo/Bar", Some("echo bar\n"));

    env.dagger()
        .args(["run", "Foo/Bar"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bar"))
        .stdout(predicate::str::contains("foo").not());
}

#[cfg(unix)]
#[test]
fn run_passes_stdin_to_app() {
    let env = TestEnv::with_sh();
    env.app("Echo", Some("read line\necho \"got $line\"\n"));

    env.dagger()
        .args(["run", "Echo"])
        .write_stdin("typed\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("got typed"));
}

#[cfg(unix)]
#[test]
fn run_failing_app_exits_nonzero() {
    let env = TestEnv::with_sh();
    env.app("Bad", Some("echo partial\necho boom >&2\nexit 3\n"));

    env.dagger()
        .args(["run", "Bad"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("partial"))
        .stderr(predicate::str::contains("Running app 'Bad': boom"));
}

#[test]
fn run_without_entrypoint() {
    let env = TestEnv::with_sh();
    env.app("Empty", None);

    env.dagger()
        .args(["run", "Empty"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "App 'Empty' does not have a main.sh file.",
        ));
}

#[test]
fn run_unknown_app() {
    let env = TestEnv::with_sh();
    env.dagger()
        .args(["run", "Ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("App 'Ghost' not found"));
}

#[test]
fn menu_quits_immediately() {
    let env = TestEnv::with_sh();
    env.dagger()
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No apps available yet."))
        .stdout(predicate::str::contains("Exiting Dagger."));

    assert!(env.apps_dir().is_dir());
}

#[test]
fn menu_treats_end_of_input_as_quit() {
    let env = TestEnv::with_sh();
    env.dagger().arg("menu").write_stdin("").assert().success();
}

#[cfg(unix)]
#[test]
fn menu_runs_leaf_app() {
    let env = TestEnv::with_sh();
    env.app("Foo", Some("echo from-foo\n"));

    env.dagger()
        .arg("menu")
        .write_stdin("1\n\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Foo"))
        .stdout(predicate::str::contains("Running app: Foo"))
        .stdout(predicate::str::contains("from-foo"))
        .stdout(predicate::str::contains("App 'Foo' finished"));
}

#[cfg(unix)]
#[test]
fn menu_descends_into_group() {
    let env = TestEnv::with_sh();
    env.app("Foo", Some("echo from-foo\n"));
    env.app("Foo/Bar", Some("echo from-bar\n"));

    env.dagger()
        .arg("menu")
        .write_stdin("1\n2\n\nb\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("App: Foo"))
        .stdout(predicate::str::contains("1. Run this app"))
        .stdout(predicate::str::contains("2. Bar"))
        .stdout(predicate::str::contains("from-bar"))
        .stdout(predicate::str::contains("from-foo").not());
}

#[test]
fn menu_creates_app() {
    let env = TestEnv::with_sh();
    env.dagger()
        .write_stdin("n\nFresh\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sample app 'Fresh' created."))
        .stdout(predicate::str::contains("1. Fresh"));

    assert!(bracket(&env.apps_dir(), "Fresh").join("main.sh").is_file());
}

#[test]
fn menu_reports_invalid_choices() {
    let env = TestEnv::with_sh();
    env.dagger()
        .write_stdin("7\nzz\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid app number."))
        .stdout(predicate::str::contains("Invalid choice."));
}

#[test]
fn alias_add_status_remove() {
    let env = TestEnv::with_sh();
    fs::write(env.profile(), "export PATH=/usr/bin\n").unwrap();

    env.dagger()
        .args(["alias", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("is not set"));

    env.dagger()
        .args(["alias", "add"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alias 'dagger' added"));

    let profile = fs::read_to_string(env.profile()).unwrap();
    assert!(profile.starts_with("export PATH=/usr/bin\n"));
    assert!(profile.contains("# Dagger tool alias - do not edit"));
    assert!(profile.contains("alias dagger='"));

    env.dagger()
        .args(["alias", "add"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already set"));

    env.dagger()
        .args(["alias", "remove"])
        .assert()
        .success()
        .stdout(predicate::str::contains("removed"));

    assert_eq!(
        fs::read_to_string(env.profile()).unwrap(),
        "export PATH=/usr/bin\n"
    );
}

#[test]
fn config_set_then_get() {
    let env = TestEnv::with_sh();

    env.dagger()
        .args(["config", "set", "navigation.back_to_root", "true"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set navigation.back_to_root = true"));

    env.dagger()
        .args(["config", "get", "navigation.back_to_root"])
        .assert()
        .success()
        .stdout("true\n");

    // Earlier values survive the rewrite.
    env.dagger()
        .args(["config", "get", "interpreter"])
        .assert()
        .success()
        .stdout("sh\n");
}

#[test]
fn config_set_rejects_invalid_entrypoint() {
    let env = TestEnv::with_sh();
    let before = fs::read_to_string(env.config_path()).unwrap();

    env.dagger()
        .args(["config", "set", "entrypoint", "../escape.sh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("plain filename"));

    assert_eq!(fs::read_to_string(env.config_path()).unwrap(), before);
}

#[test]
fn config_list_shows_defaults() {
    let env = TestEnv::new();
    env.dagger()
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No config file found"))
        .stdout(predicate::str::contains("interpreter = python3"))
        .stdout(predicate::str::contains("entrypoint = main.py"));
}

#[test]
fn malformed_config_is_reported() {
    let env = TestEnv::new();
    env.write_config("interpreter = \n");

    env.dagger()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: Failed to load config"));
}

#[test]
fn completion_generates_script() {
    TestEnv::new()
        .dagger()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dagger"));
}
