use indexmap::IndexMap;
use seedbank_filters::{catalog, FieldState, FieldValuesRequest, FilterSet, SearchRequest};

use super::{read_json, to_json};
use crate::argparse::{ComposeArgs, ComposeOutput};
use crate::config::Config;

/// Fold field states, in file order, into a filter set
pub fn compose_states(states: IndexMap<String, FieldState>) -> anyhow::Result<FilterSet> {
    states
        .into_iter()
        .try_fold(FilterSet::new(), |set, (name, state)| {
            let key = catalog::lookup(&name)?;
            Ok(set.with_state(key, &state)?)
        })
}

pub fn handle_compose_command(args: ComposeArgs, config: &Config) -> anyhow::Result<String> {
    let states: IndexMap<String, FieldState> = read_json(&args.states_file)?;
    let filters = compose_states(states)?;
    tracing::debug!("Composed {} active filters", filters.len());

    match args.output {
        ComposeOutput::Filters => to_json(&filters),
        ComposeOutput::Pills => to_json(&filters.pills()),
        ComposeOutput::Values => to_json(&FieldValuesRequest::for_option_fields(
            &filters,
            config.facility_id,
        )),
        ComposeOutput::Search | ComposeOutput::Export => {
            let fields = if args.fields.is_empty() {
                catalog::definitions()
                    .map(|definition| definition.key.to_string())
                    .collect()
            } else {
                args.fields
            };
            let request = SearchRequest::new(fields, &filters)
                .with_sort(
                    args.sort_field.unwrap_or_else(|| config.sort_field.clone()),
                    args.sort_direction.unwrap_or(config.sort_direction),
                )
                .with_count(args.count.unwrap_or(config.search_count))
                .with_facility(config.facility_id);
            if args.output == ComposeOutput::Export {
                to_json(&request.to_export())
            } else {
                to_json(&request)
            }
        }
    }
}
