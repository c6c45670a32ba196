//! Request and response bodies of the search, export and field-values
//! endpoints. The filter layer only builds and reads these; sending them is
//! up to the caller.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use strum::{Display, EnumString};
use ts_rs::TS;

use crate::catalog::{self, FieldKey};
use crate::filter_set::FilterSet;
use crate::node::FilterNode;
use crate::options::ValuesByField;

/// Default page size for search requests
pub const DEFAULT_SEARCH_COUNT: u32 = 1000;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, TS,
)]
#[ts(export)]
#[strum(ascii_case_insensitive)]
pub enum SearchDirection {
    #[default]
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SortOrder {
    pub field: String,
    pub direction: SearchDirection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub fields: Vec<String>,
    pub filters: Vec<FilterNode>,
    pub sort_order: Vec<SortOrder>,
    pub count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(type = "number | undefined")]
    pub facility_id: Option<i64>,
}

impl SearchRequest {
    pub fn new(fields: Vec<String>, filters: &FilterSet) -> Self {
        Self {
            fields,
            filters: filters.to_filters(),
            sort_order: Vec::new(),
            count: DEFAULT_SEARCH_COUNT,
            facility_id: None,
        }
    }

    pub fn with_sort(mut self, field: impl Into<String>, direction: SearchDirection) -> Self {
        self.sort_order.push(SortOrder {
            field: field.into(),
            direction,
        });
        self
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    pub fn with_facility(mut self, facility_id: Option<i64>) -> Self {
        self.facility_id = facility_id;
        self
    }

    /// The same query for the CSV export endpoint
    pub fn to_export(&self) -> ExportRequest {
        ExportRequest {
            fields: self.fields.clone(),
            filters: self.filters.clone(),
            sort_order: self.sort_order.clone(),
            facility_id: self.facility_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    pub fields: Vec<String>,
    pub filters: Vec<FilterNode>,
    pub sort_order: Vec<SortOrder>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(type = "number | undefined")]
    pub facility_id: Option<i64>,
}

/// Asks which values `fields` take among records matching `filters`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FieldValuesRequest {
    pub fields: Vec<String>,
    pub filters: Vec<FilterNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(type = "number | undefined")]
    pub facility_id: Option<i64>,
}

impl FieldValuesRequest {
    /// Values of every option field, under `filters`
    pub fn for_option_fields(filters: &FilterSet, facility_id: Option<i64>) -> Self {
        Self {
            fields: catalog::option_fields()
                .map(|key| key.as_str().to_string())
                .collect(),
            filters: filters.to_filters(),
            facility_id,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldValues {
    pub values: Vec<Option<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldValuesResponse {
    pub results: HashMap<String, FieldValues>,
}

impl FieldValuesResponse {
    /// Values keyed by catalog field. Fields outside the catalog are skipped.
    pub fn into_values_by_field(self) -> ValuesByField {
        let mut by_field: Vec<(FieldKey, Vec<Option<String>>)> = self
            .results
            .into_iter()
            .filter_map(|(name, values)| match catalog::lookup(&name) {
                Ok(key) => Some((key, values.values)),
                Err(_) => {
                    tracing::debug!("Skipping values for unknown field {}", name);
                    None
                }
            })
            .collect();
        by_field.sort_by_key(|(key, _)| *key);
        by_field.into_iter().collect()
    }
}
