// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! External process invocation.
//!
//! Every tool the pipeline drives is run through [`ProcessRunner`], so
//! tests can substitute scripted outcomes for real binaries.

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::config::CommandLine;

/// A single external command to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
    pub timeout: Option<Duration>,
}

impl Invocation {
    /// Start from a configured command prefix.
    pub fn from_command(command: &CommandLine) -> Self {
        Self {
            program: command.program.clone(),
            args: command.args.clone(),
            cwd: None,
            timeout: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn path_arg(self, path: &Path) -> Self {
        self.arg(path.to_string_lossy())
    }

    pub fn current_dir(mut self, dir: &Path) -> Self {
        self.cwd = Some(dir.to_path_buf());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Human-readable command line for diagnostics.
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Captured result of a process that ran to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit code (None if terminated by a signal).
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    fn from_parts(status: ExitStatus, stdout: Vec<u8>, stderr: Vec<u8>) -> Self {
        Self {
            code: status.code(),
            stdout: String::from_utf8_lossy(&stdout).into_owned(),
            stderr: String::from_utf8_lossy(&stderr).into_owned(),
        }
    }
}

/// A process that did not run to completion.
#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    /// The binary could not be started (missing, not executable, ...).
    #[error("could not launch `{program}`: {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The process exceeded its time limit and was killed.
    #[error("timed out after {timeout:?}: `{command}`")]
    TimedOut { command: String, timeout: Duration },

    /// Waiting on a started process failed.
    #[error("failed waiting for `{command}`: {source}")]
    Wait {
        command: String,
        #[source]
        source: io::Error,
    },
}

/// Capability to run external commands.
pub trait ProcessRunner {
    fn run(&self, invocation: &Invocation) -> Result<ProcessOutput, ProcessError>;
}

/// Runs commands as real child processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProcess;

impl ProcessRunner for SystemProcess {
    fn run(&self, invocation: &Invocation) -> Result<ProcessOutput, ProcessError> {
        let mut command = Command::new(&invocation.program);
        command
            .args(&invocation.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(cwd) = &invocation.cwd {
            command.current_dir(cwd);
        }

        tracing::debug!("running {}", invocation.display());
        let start = Instant::now();

        let child = command.spawn().map_err(|source| ProcessError::Launch {
            program: invocation.program.clone(),
            source,
        })?;

        let result = run_with_timeout(child, invocation.timeout);
        tracing::trace!(
            "{} finished in {:?}",
            invocation.program,
            start.elapsed()
        );

        match result {
            Ok(output) => Ok(output),
            Err(e) if e.kind() == io::ErrorKind::TimedOut => Err(ProcessError::TimedOut {
                command: invocation.display(),
                // Only a timed invocation can time out
                timeout: invocation.timeout.unwrap_or_default(),
            }),
            Err(source) => Err(ProcessError::Wait {
                command: invocation.display(),
                source,
            }),
        }
    }
}

/// Drain a pipe on a separate thread so a chatty child never blocks.
fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> JoinHandle<Vec<u8>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            pipe.read_to_end(&mut buf).ok();
        }
        buf
    })
}

/// Run a child process with an optional timeout.
///
/// If timeout is None, waits indefinitely.
/// If timeout expires, kills the process and returns a TimedOut error.
pub fn run_with_timeout(mut child: Child, timeout: Option<Duration>) -> io::Result<ProcessOutput> {
    let stdout = drain(child.stdout.take());
    let stderr = drain(child.stderr.take());

    let status = match timeout {
        Some(t) => {
            let start = Instant::now();
            let poll_interval = Duration::from_millis(50);

            loop {
                if let Some(status) = child.try_wait()? {
                    break status;
                }
                if start.elapsed() > t {
                    child.kill().ok();
                    child.wait().ok();
                    return Err(io::Error::new(
                        io::ErrorKind::TimedOut,
                        format!("command timed out after {t:?}"),
                    ));
                }
                thread::sleep(poll_interval);
            }
        }
        None => child.wait()?,
    };

    let stdout = stdout.join().unwrap_or_default();
    let stderr = stderr.join().unwrap_or_default();
    Ok(ProcessOutput::from_parts(status, stdout, stderr))
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
