//! Clipboard access through external command line tools.
//!
//! Every invocation runs under a timeout and the child process is killed
//! when the timeout fires, so a stuck tool costs at most one timeout per
//! call and never blocks the caller indefinitely.

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use lc_core::ports::{ClipboardAccessError, LocalClipboardPort};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::debug;

use super::detect::detect_commands;

/// Upper bound for a single clipboard read or write.
pub const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_secs(2);

/// A program plus its arguments, e.g. `xclip -o -selection clipboard`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ClipboardCommand {
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    pub fn display(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }

    fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args).kill_on_drop(true);
        cmd
    }

    fn spawn_error(&self, err: std::io::Error) -> ClipboardAccessError {
        if err.kind() == std::io::ErrorKind::NotFound {
            ClipboardAccessError::ToolMissing(self.program.clone())
        } else {
            ClipboardAccessError::Io(err)
        }
    }
}

/// [`LocalClipboardPort`] backed by a read command and an optional write command.
pub struct CommandClipboard {
    read: ClipboardCommand,
    write: Option<ClipboardCommand>,
    timeout: Duration,
}

impl CommandClipboard {
    pub fn new(read: ClipboardCommand, write: Option<ClipboardCommand>, timeout: Duration) -> Self {
        Self {
            read,
            write,
            timeout,
        }
    }

    /// Pick the clipboard tools available on this host.
    ///
    /// Fails with [`ClipboardAccessError::ToolMissing`] when no supported
    /// tool is installed.
    pub fn detect() -> Result<Self, ClipboardAccessError> {
        let (read, write) = detect_commands().ok_or_else(|| {
            ClipboardAccessError::ToolMissing(
                "wl-clipboard, xclip, xsel or pbpaste".to_string(),
            )
        })?;
        Ok(Self::new(read, write, DEFAULT_COMMAND_TIMEOUT))
    }

    pub fn read_command(&self) -> &ClipboardCommand {
        &self.read
    }

    pub fn write_command(&self) -> Option<&ClipboardCommand> {
        self.write.as_ref()
    }

    fn timed_out(&self, command: &ClipboardCommand) -> ClipboardAccessError {
        ClipboardAccessError::Timeout {
            command: command.display(),
            timeout: self.timeout,
        }
    }
}

#[async_trait]
impl LocalClipboardPort for CommandClipboard {
    async fn read_text(&self) -> Result<String, ClipboardAccessError> {
        let mut cmd = self.read.to_command();
        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let output = match timeout(self.timeout, cmd.output()).await {
            Ok(result) => result.map_err(|e| self.read.spawn_error(e))?,
            Err(_) => return Err(self.timed_out(&self.read)),
        };

        if !output.status.success() {
            return Err(ClipboardAccessError::CommandFailed {
                command: self.read.display(),
                message: format!(
                    "{}: {}",
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn can_write(&self) -> bool {
        self.write.is_some()
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardAccessError> {
        let write = self.write.as_ref().ok_or(ClipboardAccessError::NotConfigured)?;

        // Tools like xclip keep a forked child alive to serve the selection,
        // so output pipes are not captured: waiting on them would never end.
        let mut cmd = write.to_command();
        cmd.stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        let mut child = cmd.spawn().map_err(|e| write.spawn_error(e))?;
        let stdin = child.stdin.take();

        let run = async move {
            if let Some(mut stdin) = stdin {
                stdin.write_all(text.as_bytes()).await?;
                stdin.shutdown().await?;
            }
            child.wait().await
        };

        let status = match timeout(self.timeout, run).await {
            Ok(result) => result?,
            Err(_) => return Err(self.timed_out(write)),
        };

        if !status.success() {
            return Err(ClipboardAccessError::CommandFailed {
                command: write.display(),
                message: status.to_string(),
            });
        }

        debug!(command = %write.display(), bytes = text.len(), "clipboard written");
        Ok(())
    }
}
