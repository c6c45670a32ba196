//! Select option lists.
//!
//! Options come from two value lists per field: every value the field can
//! take, and the values still present under the current filters. Values
//! that would return nothing are kept in the list but disabled, so the list
//! does not reshuffle as filters change.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use ts_rs::TS;

use crate::catalog::{self, FieldKey};
use crate::codecs::{SelectMode, BOOLEAN_FALSE};

pub const UNSPECIFIED_LABEL: &str = "Unspecified";

/// Raw field values per field; `None` is a record with no value
pub type ValuesByField = IndexMap<FieldKey, Vec<Option<String>>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SelectOption {
    pub label: String,
    pub value: Option<String>,
    pub disabled: bool,
}

impl SelectOption {
    fn new(value: &str, disabled: bool) -> Self {
        Self {
            label: value.to_string(),
            value: Some(value.to_string()),
            disabled,
        }
    }
}

/// Option order: case-insensitive, lowercase first among values that differ
/// only in case, so distinct values never compare equal.
///
/// This is not a locale collation. Letters are compared by code point after
/// lowercasing, so accented letters sort after `z` (`"Éclair"` after
/// `"zeta"`).
pub fn case_insensitive_order(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

/// Options for one select widget.
///
/// Non-null values are sorted and deduplicated. For regular selects a
/// present `null` becomes a trailing "Unspecified" option. Boolean selects
/// have no such row; there a `null` counts as "false", both for showing and
/// for enabling the `"false"` option.
pub fn select_options(
    mode: SelectMode,
    all: &[Option<String>],
    available: &[Option<String>],
) -> Vec<SelectOption> {
    let is_available = |value: Option<&str>| available.iter().any(|v| v.as_deref() == value);
    let has_null = all.iter().chain(available).any(Option::is_none);

    let mut values: Vec<&str> = all
        .iter()
        .chain(available)
        .flatten()
        .map(String::as_str)
        .collect();
    if mode == SelectMode::Boolean && has_null {
        values.push(BOOLEAN_FALSE);
    }
    values.sort_by(|a, b| case_insensitive_order(a, b));
    values.dedup();

    let mut options: Vec<SelectOption> = values
        .into_iter()
        .map(|value| {
            let enabled = is_available(Some(value))
                || (mode == SelectMode::Boolean && value == BOOLEAN_FALSE && is_available(None));
            SelectOption::new(value, !enabled)
        })
        .collect();

    if mode != SelectMode::Boolean && has_null {
        options.push(SelectOption {
            label: UNSPECIFIED_LABEL.to_string(),
            value: None,
            disabled: !is_available(None),
        });
    }
    options
}

/// Option lists for every select field that has values.
///
/// A field missing from `available` has every option disabled.
pub fn resolve_options(
    all: &ValuesByField,
    available: &ValuesByField,
) -> IndexMap<FieldKey, Vec<SelectOption>> {
    catalog::option_fields()
        .filter(|key| all.contains_key(key) || available.contains_key(key))
        .filter_map(|key| {
            let mode = SelectMode::for_filter_type(key.filter_type())?;
            let all_values = all.get(&key).map(Vec::as_slice).unwrap_or_default();
            let available_values = available.get(&key).map(Vec::as_slice).unwrap_or_default();
            Some((key, select_options(mode, all_values, available_values)))
        })
        .collect()
}
