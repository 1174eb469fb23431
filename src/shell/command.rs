//! External command invocations.
//!
//! An [`Invocation`] is a fully-resolved external call: program, arguments,
//! and whether it needs root. Nothing here depends on the ambient working
//! directory; paths inside arguments are always fully qualified by callers.

use std::fmt;
use std::process::{Command, Stdio};

/// One external process invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: String,
    args: Vec<String>,
    needs_root: bool,
}

impl Invocation {
    /// An invocation that runs with the caller's privileges.
    pub fn new<S: Into<String>>(program: S, args: impl IntoIterator<Item = S>) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            needs_root: false,
        }
    }

    /// An invocation that needs root; `sudo` is prefixed at execution
    /// time unless the process is already elevated.
    pub fn elevated<S: Into<String>>(program: S, args: impl IntoIterator<Item = S>) -> Self {
        Self {
            needs_root: true,
            ..Self::new(program, args)
        }
    }

    /// A shell line run through `sh -c` (post-install steps are declared
    /// as shell lines with embedded `cd`/pipes).
    pub fn shell(line: &str) -> Self {
        Self::new("sh", ["-c", line])
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn needs_root(&self) -> bool {
        self.needs_root
    }

    /// The command line as logged, without the sudo prefix.
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }

    /// Build the process command, prefixing `sudo` when the invocation
    /// needs root and the current process is not elevated.
    fn to_command(&self, elevated: bool) -> Command {
        if self.needs_root && !elevated {
            let mut cmd = Command::new("sudo");
            cmd.arg(&self.program).args(&self.args);
            cmd
        } else {
            let mut cmd = Command::new(&self.program);
            cmd.args(&self.args);
            cmd
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}

/// Run an invocation to completion, inheriting the terminal so the child's
/// own progress output stays visible. Returns true on exit code 0.
pub fn run(invocation: &Invocation, elevated: bool) -> bool {
    let mut cmd = invocation.to_command(elevated);
    cmd.stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    tracing::debug!(command = %invocation, "running external command");

    match cmd.status() {
        Ok(status) => status.success(),
        Err(err) => {
            tracing::error!(command = %invocation, %err, "failed to spawn command");
            false
        }
    }
}
