//! The set of active filters, keyed by field.
//!
//! A field with no filter is absent from the set; empty nodes are never
//! stored. Every change returns a new set.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::catalog::{self, FieldKey};
use crate::errors::FilterError;
use crate::field_state::{decode_field, encode_field, FieldState};
use crate::node::FilterNode;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    into = "IndexMap<String, FilterNode>",
    try_from = "IndexMap<String, FilterNode>"
)]
pub struct FilterSet {
    filters: IndexMap<FieldKey, FilterNode>,
}

/// One removable chip in the active-filter summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterPill {
    pub field: FieldKey,
    pub label: &'static str,
    pub value: String,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert `node` under `key`, or drop `key` when the node is missing or
    /// empty. Empty leaves and groups inside `node` are removed first.
    pub fn on_filter_change(mut self, key: FieldKey, node: Option<FilterNode>) -> Self {
        match node.and_then(FilterNode::pruned) {
            Some(node) => {
                tracing::debug!("Setting filter on {}", key);
                self.filters.insert(key, node);
            }
            None => {
                if self.filters.shift_remove(&key).is_some() {
                    tracing::debug!("Removing filter on {}", key);
                }
            }
        }
        self
    }

    /// Encode `state` for `key` and apply the result
    pub fn with_state(self, key: FieldKey, state: &FieldState) -> Result<Self, FilterError> {
        let node = encode_field(key, state)?;
        Ok(self.on_filter_change(key, node))
    }

    pub fn clear_filters(self) -> Self {
        Self::default()
    }

    pub fn get(&self, key: FieldKey) -> Option<&FilterNode> {
        self.filters.get(&key)
    }

    pub fn contains(&self, key: FieldKey) -> bool {
        self.filters.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &FilterNode)> {
        self.filters.iter().map(|(key, node)| (*key, node))
    }

    /// Flatten into the `filters` list of a search request
    pub fn to_filters(&self) -> Vec<FilterNode> {
        self.filters.values().cloned().collect()
    }

    /// Summary chips for the active filters. Only plain field nodes get a
    /// value; composite trees show their label with an empty value.
    pub fn pills(&self) -> Vec<FilterPill> {
        self.iter()
            .map(|(field, node)| FilterPill {
                field,
                label: field.label(),
                value: match node {
                    FilterNode::Field(leaf) => leaf
                        .values
                        .iter()
                        .map(|v| v.as_deref().unwrap_or_default())
                        .collect::<Vec<_>>()
                        .join(", "),
                    _ => String::new(),
                },
            })
            .collect()
    }

    /// UI state of every catalog field, for re-opening a saved filter set
    pub fn restore(&self) -> IndexMap<FieldKey, FieldState> {
        FieldKey::iter()
            .map(|key| (key, decode_field(key, self.get(key))))
            .collect()
    }

    pub fn from_json(json: &str) -> Result<Self, FilterError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<FilterSet> for IndexMap<String, FilterNode> {
    fn from(set: FilterSet) -> Self {
        set.filters
            .into_iter()
            .map(|(key, node)| (key.as_str().to_string(), node))
            .collect()
    }
}

impl TryFrom<IndexMap<String, FilterNode>> for FilterSet {
    type Error = FilterError;

    fn try_from(map: IndexMap<String, FilterNode>) -> Result<Self, Self::Error> {
        map.into_iter()
            .try_fold(FilterSet::new(), |set, (name, node)| {
                Ok(set.on_filter_change(catalog::lookup(&name)?, Some(node)))
            })
    }
}
