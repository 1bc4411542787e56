use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::Duration;

use rusqlite::Connection;
use tempfile::TempDir;

/// Assert command succeeded
#[macro_export]
macro_rules! assert_command_success {
    ($output:expr) => {
        assert!(
            $output.success,
            "Command failed with exit code {}\nstdout: {}\nstderr: {}",
            $output.exit_code, $output.stdout, $output.stderr
        );
    };
    ($output:expr, $msg:expr) => {
        assert!(
            $output.success,
            "{}: exit code {}\nstdout: {}\nstderr: {}",
            $msg, $output.exit_code, $output.stdout, $output.stderr
        );
    };
}

/// Assert stdout contains expected text
#[macro_export]
macro_rules! assert_stdout_contains {
    ($output:expr, $expected:expr) => {
        assert!(
            $output.stdout.contains($expected),
            "stdout does not contain '{}'\nActual stdout:\n{}",
            $expected,
            $output.stdout
        );
    };
}

/// Sample catalog used by most tests, as a TSV export.
pub const SAMPLE_TSV: &str = "\
item_name\tcategory\tsubcategories\trarity\tvoi\tnotes
Frost Sword\tWeapon\tice, blade\tRelic\tyes\tDrops from the glacier boss
Ember Blade\tweapon\tfire, blade\tLegendary\tno\t
Light Dagger\tweapon\tlight\tNamed\tno\t
Dagger of Light\tweapon\tlight, holy\tnormal\tyes\t
Pumpkin Lantern\ttrinket\tlight, seasonal\tHallowtide\tno\t
Flame Shield\tarmor\tfire\trelic\tyes\t
Rusty Key\tquest\t\tcommon\tno\t
";

/// Integration test fixture providing an isolated catalog root
pub struct TestFixture {
    pub temp_dir: TempDir,
    /// Working directory for commands
    pub root: PathBuf,
    /// il root directory (./.il)
    pub il_root: PathBuf,
    pub config_path: PathBuf,
    test_name: String,
}

impl TestFixture {
    pub fn new(test_name: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        let il_root = root.join(".il");
        let config_path = il_root.join("config.toml");

        println!("\n[FIXTURE] Test: {test_name}");
        println!("[FIXTURE] Root: {}", root.display());

        Self {
            temp_dir,
            root,
            il_root,
            config_path,
            test_name: test_name.to_string(),
        }
    }

    /// Initialized root with [`SAMPLE_TSV`] imported.
    pub fn with_sample_items(test_name: &str) -> Self {
        let fixture = Self::new(test_name);
        let init = fixture.init();
        assert_command_success!(init, "init failed");

        let import = fixture.import_str("items.tsv", SAMPLE_TSV);
        assert_command_success!(import, "import failed");
        fixture
    }

    pub fn init(&self) -> CommandOutput {
        self.run_il(&["--robot", "init"])
    }

    /// Write `contents` to `file_name` under the root and import it.
    pub fn import_str(&self, file_name: &str, contents: &str) -> CommandOutput {
        let path = self.root.join(file_name);
        std::fs::write(&path, contents).expect("Failed to write import file");
        self.run_il(&["--robot", "import", path.to_str().expect("utf-8 path")])
    }

    pub fn db_path(&self) -> PathBuf {
        self.il_root.join("items.db")
    }

    pub fn open_db(&self) -> Connection {
        Connection::open(self.db_path()).expect("Failed to open items.db")
    }

    pub fn item_count(&self) -> i64 {
        self.open_db()
            .query_row("SELECT COUNT(*) FROM items", [], |r| r.get(0))
            .expect("count items")
    }

    fn command(&self, args: &[&str]) -> Command {
        println!("[CMD] {}: il {}", self.test_name, args.join(" "));
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_il"));
        cmd.args(args)
            .env("HOME", &self.root)
            .env("IL_ROOT", &self.il_root)
            .env("IL_CONFIG", &self.config_path)
            .env_remove("RUST_LOG")
            .current_dir(&self.root);
        cmd
    }

    pub fn run_il(&self, args: &[&str]) -> CommandOutput {
        self.run_il_with_env(args, &[])
    }

    pub fn run_il_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> CommandOutput {
        let start = std::time::Instant::now();
        let mut cmd = self.command(args);
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        let output = cmd.output().expect("Failed to execute il command");
        CommandOutput::from_output(&output, start.elapsed())
    }

    /// Run with `stdin` piped in, as `il chat` reads it.
    pub fn run_il_with_stdin(&self, args: &[&str], stdin: &str) -> CommandOutput {
        let start = std::time::Instant::now();
        let mut child = self
            .command(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn il command");

        child
            .stdin
            .take()
            .expect("stdin piped")
            .write_all(stdin.as_bytes())
            .expect("Failed to write stdin");

        let output = child.wait_with_output().expect("Failed to wait for il");
        CommandOutput::from_output(&output, start.elapsed())
    }
}

#[derive(Debug)]
pub struct CommandOutput {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
    pub elapsed: Duration,
}

impl CommandOutput {
    fn from_output(output: &std::process::Output, elapsed: Duration) -> Self {
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        println!("[CMD] Exit code: {:?} ({elapsed:?})", output.status.code());
        if !stderr.is_empty() {
            println!("[STDERR]\n{stderr}");
        }
        Self {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout,
            stderr,
            elapsed,
        }
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({e}):\n{}", self.stdout))
    }
}
