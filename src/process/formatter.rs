//! External formatter invocation
//!
//! After the sorted schema is written, the Prisma CLI normalizes its layout.
//! The command runs synchronously with stdout and stderr captured.

use std::path::Path;
use std::process::Command;

use anyhow::{bail, Context};

use crate::Result;

/// Formatter run when none is configured
pub const DEFAULT_FORMATTER: &str = "npx prisma format";

/// A formatter command split into program and arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatterCommand {
    pub program: String,
    pub args: Vec<String>,
    /// Append `--schema <path>` so the formatter targets the sorted file
    pub pass_schema: bool,
}

impl FormatterCommand {
    /// Parse a whitespace-separated command line such as `npx prisma format`
    pub fn parse(command: &str, pass_schema: bool) -> Result<Self> {
        let mut parts = command.split_whitespace().map(str::to_string);
        let Some(program) = parts.next() else {
            bail!("formatter command is empty");
        };
        Ok(FormatterCommand {
            program,
            args: parts.collect(),
            pass_schema,
        })
    }

    /// Full argument list for a given schema file
    #[must_use]
    pub fn args_for(&self, schema_path: &Path) -> Vec<String> {
        let mut args = self.args.clone();
        if self.pass_schema {
            args.push("--schema".to_string());
            args.push(schema_path.display().to_string());
        }
        args
    }

    /// Human-readable command line, for debug output
    #[must_use]
    pub fn display_for(&self, schema_path: &Path) -> String {
        let mut line = self.program.clone();
        for arg in self.args_for(schema_path) {
            line.push(' ');
            line.push_str(&arg);
        }
        line
    }
}

impl Default for FormatterCommand {
    fn default() -> Self {
        FormatterCommand {
            program: "npx".to_string(),
            args: vec!["prisma".to_string(), "format".to_string()],
            pass_schema: true,
        }
    }
}

/// Run the formatter and return its standard output
///
/// A non-zero exit becomes an error carrying the formatter's diagnostics
/// (stderr, or stdout when stderr is empty). The schema file has already been
/// written at this point and is left as is.
pub fn run_formatter(command: &FormatterCommand, schema_path: &Path) -> Result<String> {
    let output = Command::new(&command.program)
        .args(command.args_for(schema_path))
        .output()
        .with_context(|| format!("Failed to launch formatter '{}'", command.program))?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let diagnostics = if stderr.trim().is_empty() {
            stdout.trim()
        } else {
            stderr.trim()
        };
        bail!(
            "Error running prisma format (exit code {}): {}",
            output.status.code().unwrap_or(-1),
            diagnostics
        );
    }

    Ok(stdout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_parse_default_command() {
        let cmd = FormatterCommand::parse(DEFAULT_FORMATTER, true).unwrap();
        assert_eq!(cmd, FormatterCommand::default());
    }

    #[test]
    fn test_parse_extra_whitespace() {
        let cmd = FormatterCommand::parse("  pnpm   prisma\tformat ", false).unwrap();
        assert_eq!(cmd.program, "pnpm");
        assert_eq!(cmd.args, vec!["prisma", "format"]);
        assert!(!cmd.pass_schema);
    }

    #[test]
    fn test_parse_empty_command() {
        assert!(FormatterCommand::parse("", true).is_err());
        assert!(FormatterCommand::parse("   ", true).is_err());
    }

    #[test]
    fn test_args_for_schema() {
        let cmd = FormatterCommand::default();
        let path = PathBuf::from("prisma/schema.prisma");
        assert_eq!(
            cmd.args_for(&path),
            vec!["prisma", "format", "--schema", "prisma/schema.prisma"]
        );
        assert_eq!(
            cmd.display_for(&path),
            "npx prisma format --schema prisma/schema.prisma"
        );
    }

    #[test]
    fn test_args_without_schema() {
        let cmd = FormatterCommand::parse("npx prisma format", false).unwrap();
        assert_eq!(cmd.args_for(Path::new("x.prisma")), vec!["prisma", "format"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_run_formatter_success() {
        let cmd = FormatterCommand::parse("echo formatted", false).unwrap();
        let stdout = run_formatter(&cmd, Path::new("schema.prisma")).unwrap();
        assert_eq!(stdout.trim(), "formatted");
    }

    #[cfg(unix)]
    #[test]
    fn test_run_formatter_failure() {
        let cmd = FormatterCommand::parse("false", false).unwrap();
        let err = run_formatter(&cmd, Path::new("schema.prisma")).unwrap_err();
        assert!(err.to_string().contains("Error running prisma format"));
        assert!(err.to_string().contains("exit code 1"));
    }

    #[test]
    fn test_run_formatter_missing_program() {
        let cmd = FormatterCommand::parse("prisma-sort-no-such-formatter-binary", false).unwrap();
        let err = run_formatter(&cmd, Path::new("schema.prisma")).unwrap_err();
        assert!(err.to_string().contains("Failed to launch formatter"));
    }
}
