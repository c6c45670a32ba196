use seedbank_filters::catalog;
use serde::Serialize;
use tabular::{Row, Table};

use super::to_json;
use crate::argparse::CatalogArgs;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CatalogEntry {
    key: String,
    label: &'static str,
    filter_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    backing_fields: Option<[&'static str; 3]>,
}

pub fn handle_catalog_command(args: CatalogArgs) -> anyhow::Result<String> {
    let entries: Vec<CatalogEntry> = catalog::definitions()
        .map(|definition| CatalogEntry {
            key: definition.key.to_string(),
            label: definition.label,
            filter_type: definition.filter_type.to_string(),
            backing_fields: definition
                .composite
                .map(|c| [c.count_field, c.weight_field, c.units_field]),
        })
        .collect();

    if args.json {
        return to_json(&entries);
    }

    #[allow(clippy::literal_string_with_formatting_args)]
    let mut table = Table::new("{:<}  {:<}  {:<}  {:<}")
        .with_row(Row::from_cells(["Field", "Label", "Filter", "Backing fields"].iter().cloned()));
    for entry in entries {
        table.add_row(
            Row::new()
                .with_cell(entry.key)
                .with_cell(entry.label)
                .with_cell(entry.filter_type)
                .with_cell(
                    entry
                        .backing_fields
                        .map(|fields| fields.join(", "))
                        .unwrap_or_default(),
                ),
        );
    }
    Ok(table.to_string().trim_end().to_string())
}
