use seedbank_filters::FilterSet;

use super::{read_json, to_json};
use crate::argparse::RestoreArgs;

pub fn handle_restore_command(args: RestoreArgs) -> anyhow::Result<String> {
    let filters: FilterSet = read_json(&args.filters_file)?;
    let mut states = filters.restore();
    if !args.all {
        states.retain(|key, _| filters.contains(*key));
    }
    to_json(&states)
}
