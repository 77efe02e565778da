//! Subprocess execution.
//!
//! Probes shell out to external tools (`git`, a Python interpreter) and parse
//! what they print. The revision probe runs its child with an explicit
//! allow-list plus a forced neutral locale. The dependency probe keeps the
//! caller's environment, so it sees the same interpreter setup the caller
//! does, and only has the locale forced. Every call is bounded by an optional
//! timeout, after which the child is killed.

use crate::error::{VerstampError, Result};
use std::collections::HashMap;
use std::io::Read;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Variables passed through from the parent environment when present.
///
/// `SYSTEMROOT` is required for process creation on Windows.
pub const ENV_ALLOW_LIST: &[&str] = &["SYSTEMROOT", "PATH"];

/// Locale forced onto every child so messages and formatting don't vary.
pub const NEUTRAL_LOCALE: &str = "C";

const LOCALE_VARS: &[&str] = &["LANGUAGE", "LANG", "LC_ALL"];

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Result of executing a command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Environment variables to set on the child.
    pub env: HashMap<String, String>,

    /// Keep the parent environment underneath `env`. When false, `env` is
    /// the complete child environment.
    pub inherit_env: bool,

    /// Kill the child after this long (None = wait indefinitely).
    pub timeout: Option<Duration>,
}

impl CommandOptions {
    /// Options with the minimal environment and the given timeout.
    pub fn minimal(timeout: Duration) -> Self {
        Self {
            cwd: None,
            env: minimal_env(),
            inherit_env: false,
            timeout: Some(timeout),
        }
    }

    /// Options that keep the caller's environment, with only the locale
    /// forced, and the given timeout.
    pub fn inherited(timeout: Duration) -> Self {
        Self {
            cwd: None,
            env: neutral_locale_env(),
            inherit_env: true,
            timeout: Some(timeout),
        }
    }

    /// Set the working directory.
    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }
}

/// Build the minimal child environment from the real process environment.
pub fn minimal_env() -> HashMap<String, String> {
    minimal_env_with(|key: &str| std::env::var(key))
}

/// Build the minimal child environment with a custom variable lookup.
///
/// This allows testing without modifying actual environment variables.
pub fn minimal_env_with<F>(env_fn: F) -> HashMap<String, String>
where
    F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
{
    let mut env = HashMap::new();
    for key in ENV_ALLOW_LIST {
        if let Ok(value) = env_fn(key) {
            env.insert((*key).to_string(), value);
        }
    }
    env.extend(neutral_locale_env());
    env
}

/// The locale variables, all set to [`NEUTRAL_LOCALE`].
pub fn neutral_locale_env() -> HashMap<String, String> {
    LOCALE_VARS
        .iter()
        .map(|key| ((*key).to_string(), NEUTRAL_LOCALE.to_string()))
        .collect()
}

/// Execute `program` with `args`, capturing stdout and stderr.
///
/// Returns `Ok` for any child that ran to completion, successful or not.
/// Spawn failures yield [`VerstampError::CommandFailed`]; exceeding the
/// timeout kills the child and yields [`VerstampError::CommandTimedOut`].
pub fn execute(program: &str, args: &[&str], options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();
    let command_line = display_command(program, args);

    let mut cmd = Command::new(program);
    cmd.args(args);
    if !options.inherit_env {
        cmd.env_clear();
    }
    cmd.envs(&options.env);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    let mut child = cmd.spawn().map_err(|e| {
        tracing::debug!("Failed to spawn {}: {}", command_line, e);
        VerstampError::CommandFailed {
            command: command_line.clone(),
            code: None,
        }
    })?;

    // Drain both pipes concurrently so a chatty child can't block on a full pipe.
    let stdout_handle = child.stdout.take().map(spawn_reader);
    let stderr_handle = child.stderr.take().map(spawn_reader);

    // On timeout the readers are left detached: a grandchild may still hold the pipes.
    let status = wait_with_timeout(&mut child, options.timeout, &command_line)?;

    let stdout = join_reader(stdout_handle);
    let stderr = join_reader(stderr_handle);
    let duration = start.elapsed();

    tracing::debug!(
        "{} exited with {:?} in {}ms",
        command_line,
        status.code(),
        duration.as_millis()
    );

    Ok(CommandResult {
        exit_code: status.code(),
        stdout,
        stderr,
        duration,
        success: status.success(),
    })
}

fn wait_with_timeout(
    child: &mut Child,
    timeout: Option<Duration>,
    command_line: &str,
) -> Result<std::process::ExitStatus> {
    let Some(timeout) = timeout else {
        return child.wait().map_err(|_| VerstampError::CommandFailed {
            command: command_line.to_string(),
            code: None,
        });
    };

    let deadline = Instant::now() + timeout;
    loop {
        match child.try_wait() {
            Ok(Some(status)) => return Ok(status),
            Ok(None) if Instant::now() >= deadline => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(VerstampError::CommandTimedOut {
                    command: command_line.to_string(),
                    seconds: timeout.as_secs(),
                });
            }
            Ok(None) => thread::sleep(POLL_INTERVAL),
            Err(_) => {
                let _ = child.kill();
                return Err(VerstampError::CommandFailed {
                    command: command_line.to_string(),
                    code: None,
                });
            }
        }
    }
}

fn spawn_reader<R: Read + Send + 'static>(mut pipe: R) -> JoinHandle<String> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = pipe.read_to_end(&mut buf);
        String::from_utf8_lossy(&buf).to_string()
    })
}

fn join_reader(handle: Option<JoinHandle<String>>) -> String {
    handle
        .and_then(|h| h.join().ok())
        .unwrap_or_default()
}

fn display_command(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}
