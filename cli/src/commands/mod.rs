mod catalog;
mod codec;
mod compose;
mod options;
mod restore;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

use crate::argparse::Commands;
use crate::config::Config;
use crate::CliError;

pub use catalog::handle_catalog_command;
pub use codec::{handle_decode_command, handle_encode_command};
pub use compose::handle_compose_command;
pub use options::handle_options_command;
pub use restore::handle_restore_command;

/// Run `command` and return what it prints
pub fn handle_command(command: Commands, config: &Config) -> anyhow::Result<String> {
    match command {
        Commands::Catalog(args) => handle_catalog_command(args),
        Commands::Encode(args) => handle_encode_command(args),
        Commands::Decode(args) => handle_decode_command(args),
        Commands::Compose(args) => handle_compose_command(args, config),
        Commands::Restore(args) => handle_restore_command(args),
        Commands::Options(args) => handle_options_command(args),
    }
}

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CliError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| CliError::ParseInput {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn to_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
