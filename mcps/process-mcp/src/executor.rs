//! Process executor - runs one command behind the launcher prefix
//!
//! Spawns the child, drains stdout and stderr concurrently, and enforces a
//! wall-clock timeout measured from spawn. On Unix the child leads its own
//! process group; on timeout the whole group is killed and the child reaped
//! before returning, so neither the launcher nor anything it started outlives
//! a timed-out request.

use std::process::{ExitStatus, Stdio};
use std::time::Duration;

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;

use crate::types::ExecError;

/// Fixed launcher prefix that selects the execution context
///
/// The command line seen by operators is `prefix + " " + command`: the two
/// parts are joined literally, nothing is quoted or escaped. To spawn it, the
/// prefix is split into words once at startup (POSIX rules) and the user
/// command is appended as a single, untouched final argument. With a prefix
/// such as `sh -c` the command is therefore interpreted by that shell, with
/// all of its operators and quoting rules; the gateway adds no shell of its
/// own. Commands that rely on characters special to the launcher are the
/// caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Launcher {
    prefix: String,
    program: String,
    args: Vec<String>,
}

impl Launcher {
    pub fn parse(prefix: &str) -> Result<Self, ExecError> {
        let mut words = shell_words::split(prefix)
            .map_err(|e| ExecError::InvalidLauncher(prefix.to_string(), e.to_string()))?
            .into_iter();

        let program = words.next().ok_or_else(|| {
            ExecError::InvalidLauncher(prefix.to_string(), "no program given".to_string())
        })?;

        Ok(Self {
            prefix: prefix.to_string(),
            program,
            args: words.collect(),
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// The literal command line for `command`
    pub fn command_line(&self, command: &str) -> String {
        format!("{} {}", self.prefix, command)
    }

    fn command(&self, command: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args).arg(command);
        cmd
    }
}

/// Raw output of a process that exited on its own
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit code; on Unix a signal death is reported as `-signal`
    pub exit_code: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunResult {
    Completed(ProcessOutput),
    TimedOut,
    SpawnError(String),
}

#[derive(Debug, Clone)]
pub struct ProcessExecutor {
    launcher: Launcher,
}

impl ProcessExecutor {
    pub fn new(launcher: Launcher) -> Self {
        Self { launcher }
    }

    pub fn launcher(&self) -> &Launcher {
        &self.launcher
    }

    /// Run `command` behind the launcher, killing it after `timeout_secs`
    pub async fn run(&self, command: &str, timeout_secs: u64) -> RunResult {
        let mut cmd = self.launcher.command(command);
        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        #[cfg(unix)]
        cmd.process_group(0);

        let mut child = match cmd.spawn() {
            Ok(child) => child,
            Err(e) => return RunResult::SpawnError(e.to_string()),
        };
        // The id is gone once the child is reaped, but the group may live on.
        let pid = child.id();
        tracing::debug!(pid = ?pid, "spawned {}", self.launcher.command_line(command));

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();

        // Draining counts against the deadline too: a background job holding
        // the pipes open must not outlive the timeout.
        let limit = Duration::from_secs(timeout_secs);
        let collected = tokio::time::timeout(limit, async {
            let (status, out, err) =
                tokio::join!(child.wait(), read_stream(stdout), read_stream(stderr));
            Ok::<_, std::io::Error>((status?, out?, err?))
        })
        .await;

        match collected {
            Ok(Ok((status, stdout, stderr))) => RunResult::Completed(ProcessOutput {
                exit_code: exit_code(status),
                stdout,
                stderr,
            }),
            Ok(Err(e)) => {
                reap(&mut child, pid).await;
                RunResult::SpawnError(e.to_string())
            }
            Err(_elapsed) => {
                reap(&mut child, pid).await;
                RunResult::TimedOut
            }
        }
    }
}

/// Kill the child's process group, then kill and wait for the child itself
async fn reap(child: &mut tokio::process::Child, pid: Option<u32>) {
    if let Some(pid) = pid {
        kill_group(pid);
    }
    if let Err(e) = child.kill().await {
        // Already exited and reaped; nothing left to reclaim.
        tracing::debug!("kill after timeout: {}", e);
    }
}

#[cfg(unix)]
fn kill_group(pgid: u32) {
    use nix::sys::signal::{killpg, Signal};
    use nix::unistd::Pid;

    if let Err(e) = killpg(Pid::from_raw(pgid as i32), Signal::SIGKILL) {
        // ESRCH: every member already exited.
        tracing::debug!(pgid, "killpg: {}", e);
    }
}

#[cfg(not(unix))]
fn kill_group(_pgid: u32) {}

async fn read_stream<R: AsyncRead + Unpin>(stream: Option<R>) -> std::io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    if let Some(mut stream) = stream {
        stream.read_to_end(&mut buf).await?;
    }
    Ok(buf)
}

#[cfg(unix)]
fn exit_code(status: ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.code().or_else(|| status.signal().map(|s| -s))
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> Option<i32> {
    status.code()
}
