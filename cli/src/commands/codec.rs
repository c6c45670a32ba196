use seedbank_filters::{decode_field, encode_field, FieldState, FilterNode};

use super::{read_json, to_json};
use crate::argparse::{DecodeArgs, EncodeArgs};

/// Prints the tree, or `null` when the state sets no filter
pub fn handle_encode_command(args: EncodeArgs) -> anyhow::Result<String> {
    let state: FieldState = read_json(&args.state_file)?;
    let node = encode_field(args.field, &state)?;
    if node.is_none() {
        tracing::info!("{} has no active filter", args.field);
    }
    to_json(&node)
}

pub fn handle_decode_command(args: DecodeArgs) -> anyhow::Result<String> {
    let node: Option<FilterNode> = read_json(&args.node_file)?;
    to_json(&decode_field(args.field, node.as_ref()))
}
