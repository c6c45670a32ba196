use seedbank_filters::{resolve_options, FieldValuesResponse};

use super::{read_json, to_json};
use crate::argparse::OptionsArgs;

pub fn handle_options_command(args: OptionsArgs) -> anyhow::Result<String> {
    let all: FieldValuesResponse = read_json(&args.all_file)?;
    let available: FieldValuesResponse = read_json(&args.available_file)?;
    let options = resolve_options(
        &all.into_values_by_field(),
        &available.into_values_by_field(),
    );
    to_json(&options)
}
