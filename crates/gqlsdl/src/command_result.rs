use crate::output_utils;
use std::process::ExitCode;

#[derive(Debug)]
pub(crate) struct CommandResult {
    pub exit_code: ExitCode,
    pub stderr: Option<String>,
    pub stdout: Option<String>,
}

impl CommandResult {
    /// Reports a command-level failure (bad arguments, unreadable paths).
    pub fn error(err: anyhow::Error) -> Self {
        Self::stderr(format_args!("{} {err:#}\n", output_utils::RED_X))
    }

    pub fn stderr(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::FAILURE,
            stderr: Some(format!("{fmt_args}")),
            stdout: None,
        }
    }

    pub fn stdout(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::SUCCESS,
            stderr: None,
            stdout: Some(format!("{fmt_args}")),
        }
    }
}
