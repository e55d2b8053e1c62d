//! Line-oriented shell that turns `create_file <path>|<content>` commands
//! into file writes.
//!
//! Each input line is handled on its own: a failed command is reported and
//! the loop reads the next line. `exit`, `quit` and end of input stop it.

use crate::core::{ConfigProvider, Operation, OperationRunner, Payload};
use crate::utils::error::{FileToolError, Result};
use std::path::PathBuf;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

pub const CREATE_FILE_COMMAND: &str = "create_file";
pub const BANNER: &str = "🧠 filecraft shell ready.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    CreateFile { path: String, content: String },
    Exit,
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    Running,
    Terminated,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellSummary {
    pub lines_read: usize,
    pub files_created: usize,
    pub errors: usize,
}

/// Parses one input line.
///
/// A `create_file` line is split on the first space, then the remainder on
/// the first `|`. With `trim_fields` the path and content lose surrounding
/// whitespace.
pub fn parse_command(line: &str, trim_fields: bool) -> Result<ShellCommand> {
    let trimmed = line.trim();
    if trimmed == "exit" || trimmed == "quit" {
        return Ok(ShellCommand::Exit);
    }

    if !line.starts_with(CREATE_FILE_COMMAND) {
        return Ok(ShellCommand::Ignored);
    }

    let (_, payload) = line
        .split_once(' ')
        .ok_or_else(|| FileToolError::malformed("expected 'create_file <path>|<content>'"))?;
    let (path, content) = payload
        .split_once('|')
        .ok_or_else(|| FileToolError::malformed("missing '|' between path and content"))?;

    let (path, content) = if trim_fields {
        (path.trim(), content.trim())
    } else {
        (path, content)
    };

    if path.trim().is_empty() {
        return Err(FileToolError::malformed("missing file path"));
    }

    Ok(ShellCommand::CreateFile {
        path: path.to_string(),
        content: content.to_string(),
    })
}

pub struct DevShell<R: OperationRunner> {
    runner: R,
    prompt: String,
    trim_fields: bool,
}

impl<R: OperationRunner> DevShell<R> {
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            prompt: crate::config::toml_config::DEFAULT_PROMPT.to_string(),
            trim_fields: true,
        }
    }

    pub fn from_config<C: ConfigProvider>(runner: R, config: &C) -> Self {
        Self {
            runner,
            prompt: config.prompt().to_string(),
            trim_fields: config.trim_fields(),
        }
    }

    /// Reads commands from `input` until exit or end of input, writing the
    /// banner, prompts and status lines to `output`.
    pub async fn run<I, O>(&self, mut input: I, output: &mut O) -> Result<ShellSummary>
    where
        I: AsyncBufRead + Unpin,
        O: AsyncWrite + Unpin,
    {
        let mut buf = Vec::new();
        let mut summary = ShellSummary::default();
        let mut state = ShellState::Running;

        output.write_all(format!("{}\n", BANNER).as_bytes()).await?;

        while state == ShellState::Running {
            output.write_all(self.prompt.as_bytes()).await?;
            output.flush().await?;

            buf.clear();
            if input.read_until(b'\n', &mut buf).await? == 0 {
                tracing::debug!("end of input");
                output.write_all(b"\n").await?;
                state = ShellState::Terminated;
                continue;
            }
            summary.lines_read += 1;

            let line = match decode_line(&buf) {
                Ok(line) => line,
                Err(e) => {
                    summary.errors += 1;
                    report(output, &e).await?;
                    continue;
                }
            };

            match parse_command(&line, self.trim_fields) {
                Ok(ShellCommand::Exit) => state = ShellState::Terminated,
                Ok(ShellCommand::Ignored) => {
                    tracing::debug!(line = %line, "ignoring unrecognised input");
                }
                Ok(ShellCommand::CreateFile { path, content }) => {
                    match self.create_file(&path, content).await {
                        Ok(()) => {
                            summary.files_created += 1;
                            output
                                .write_all(format!("✅ File created: {}\n", path).as_bytes())
                                .await?;
                        }
                        Err(e) => {
                            summary.errors += 1;
                            report(output, &e).await?;
                        }
                    }
                }
                Err(e) => {
                    summary.errors += 1;
                    report(output, &e).await?;
                }
            }
        }

        output.flush().await?;
        tracing::info!(
            lines = summary.lines_read,
            created = summary.files_created,
            errors = summary.errors,
            "shell terminated"
        );
        Ok(summary)
    }

    async fn create_file(&self, path: &str, content: String) -> Result<()> {
        self.runner
            .execute(Operation::CreateFile {
                path: PathBuf::from(path),
                content: Payload::Text(content),
            })
            .await?;
        Ok(())
    }
}

/// Strips the line ending and checks the bytes are UTF-8.
fn decode_line(raw: &[u8]) -> Result<String> {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8(raw.to_vec())
        .map_err(|_| FileToolError::malformed("input line is not valid UTF-8"))
}

async fn report<O: AsyncWrite + Unpin>(output: &mut O, error: &FileToolError) -> Result<()> {
    tracing::warn!(category = ?error.category(), "command failed: {}", error);
    output
        .write_all(format!("❌ Error: {}\n", error.user_friendly_message()).as_bytes())
        .await?;
    Ok(())
}
