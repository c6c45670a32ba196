pub mod argparse;
pub mod commands;
pub mod config;
pub mod utils;

use std::path::PathBuf;

/// Errors with a fix the user can apply: bad environment or input files
#[derive(Debug)]
pub enum CliError {
    InvalidEnvVar {
        name: String,
        value: String,
    },
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseInput {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::InvalidEnvVar { name, value } => {
                write!(
                    f,
                    "Invalid value '{}' for {}\n\nFix the variable in your environment or .env file, or unset it to use the default.",
                    value, name
                )
            }
            CliError::ReadInput { path, source } => {
                write!(
                    f,
                    "Failed to read {}: {}\n\nCheck that the file exists and is readable.",
                    path.display(),
                    source
                )
            }
            CliError::ParseInput { path, source } => {
                write!(
                    f,
                    "Failed to parse {}: {}\n\nThe file must hold JSON in the shape the command expects. See `sbf <command> --help`.",
                    path.display(),
                    source
                )
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::InvalidEnvVar { .. } => None,
            CliError::ReadInput { source, .. } => Some(source),
            CliError::ParseInput { source, .. } => Some(source),
        }
    }
}
