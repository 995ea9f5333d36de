//! # Code Execution Module / 代码执行模块
//!
//! The boundary to the interpreter that evaluates assertion cells. The
//! production implementation keeps one interpreter child process alive for
//! the whole report run and captures its standard output per submitted
//! cell; tests substitute scripted executors.
//!
//! 评估断言单元格的解释器边界。生产实现为整个报告运行
//! 保持一个解释器子进程存活，并按提交的单元格捕获其标准输出；
//! 测试中则以脚本化执行器替代。

use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

use crate::error::{Error, Result};

/// Default interpreter command. `-i` keeps the session alive across cells,
/// `-q` suppresses the startup banner and `-u` keeps stdout unbuffered so
/// captured output arrives promptly.
pub const DEFAULT_INTERPRETER: &str = "python3 -i -q -u";

/// Line the session prints after every submitted cell; everything read
/// before it is that cell's output.
const OUTPUT_DELIMITER: &str = "__nb2report_cell_done__";

/// Executes a source snippet and returns its captured textual output.
/// Implementations are free to sandbox, swap interpreters or replay canned
/// output; the runner only depends on this contract.
pub trait CodeExecutor {
    fn run_code(&mut self, source: &str) -> Result<String>;
}

/// A long-lived interpreter session. The child process is spawned lazily on
/// the first `run_code` call and reused for every subsequent cell, so side
/// effects of one notebook are visible to the next within the same run.
pub struct InterpreterSession {
    command: String,
    process: Option<SessionProcess>,
}

struct SessionProcess {
    child: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
}

impl InterpreterSession {
    /// Creates a session around the given interpreter command. The command
    /// is not spawned until the first cell is submitted.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            process: None,
        }
    }

    /// The running child process, spawned on first use.
    fn session(&mut self) -> Result<&mut SessionProcess> {
        if self.process.is_none() {
            self.process = Some(SessionProcess::spawn(&self.command)?);
        }
        self.process
            .as_mut()
            .ok_or_else(|| Error::Interpreter("session not initialized".to_string()))
    }
}

impl CodeExecutor for InterpreterSession {
    fn run_code(&mut self, source: &str) -> Result<String> {
        let process = self.session()?;

        process.stdin.write_all(source.as_bytes())?;
        process.stdin.write_all(b"\n")?;
        writeln!(process.stdin, "print({OUTPUT_DELIMITER:?})")?;
        process.stdin.flush()?;

        let mut output = String::new();
        loop {
            let mut line = String::new();
            let read = process.stdout.read_line(&mut line)?;
            if read == 0 {
                return Err(Error::Interpreter(
                    "interpreter session closed unexpectedly".to_string(),
                ));
            }
            if line.trim_end() == OUTPUT_DELIMITER {
                break;
            }
            output.push_str(&line);
        }

        Ok(output)
    }
}

impl Drop for InterpreterSession {
    fn drop(&mut self) {
        if let Some(process) = self.process.as_mut() {
            let _ = process.child.kill();
            let _ = process.child.wait();
        }
    }
}

impl SessionProcess {
    /// Expands and splits the configured command, then spawns it with piped
    /// stdin/stdout. Interpreter prompts and tracebacks on stderr are
    /// discarded; only stdout is part of the capture contract.
    fn spawn(command: &str) -> Result<Self> {
        let expanded = shellexpand::full(command)
            .map_err(|e| Error::Interpreter(format!("failed to expand command {command:?}: {e}")))?
            .to_string();

        let parts = shlex::split(&expanded)
            .ok_or_else(|| Error::Interpreter(format!("failed to parse command {expanded:?}")))?;
        let (program, args) = parts
            .split_first()
            .ok_or_else(|| Error::Interpreter("empty interpreter command".to_string()))?;

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| Error::Interpreter(format!("failed to start {program:?}: {e}")))?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| Error::Interpreter("interpreter stdin unavailable".to_string()))?;
        let stdout = child
            .stdout
            .take()
            .map(BufReader::new)
            .ok_or_else(|| Error::Interpreter("interpreter stdout unavailable".to_string()))?;

        Ok(Self {
            child,
            stdin,
            stdout,
        })
    }
}
