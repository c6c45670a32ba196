//! Boolean filter tree sent to the search API.
//!
//! Trees are plain values: every UI change builds a new one. A field node
//! with no values is never placed in a tree; "no filter" is expressed by
//! leaving the field out of the [`FilterSet`](crate::FilterSet).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Leaf comparison semantics understood by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum SearchFilterType {
    Exact,
    Fuzzy,
    Range,
}

/// Leaf node. For `Range`, index 0 is the lower bound and index 1 the upper
/// bound; either may be `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldNode {
    pub field: String,
    #[serde(rename = "type")]
    pub filter_type: SearchFilterType,
    pub values: Vec<Option<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AndNode {
    pub children: Vec<FilterNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrNode {
    pub children: Vec<FilterNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NotNode {
    pub child: Box<FilterNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "operation", rename_all = "lowercase")]
pub enum FilterNode {
    Field(FieldNode),
    And(AndNode),
    Or(OrNode),
    Not(NotNode),
}

impl FieldNode {
    pub fn new(
        field: impl Into<String>,
        filter_type: SearchFilterType,
        values: Vec<Option<String>>,
    ) -> Self {
        Self {
            field: field.into(),
            filter_type,
            values,
        }
    }

    /// Value at `index`, with a missing slot and an explicit `null` both
    /// reading as `None`.
    pub fn value(&self, index: usize) -> Option<String> {
        self.values.get(index).cloned().flatten()
    }

    pub fn is_range_on(&self, field: &str) -> bool {
        self.filter_type == SearchFilterType::Range && self.field == field
    }

    /// True for the `Exact [null]` leaf that matches records with no value
    pub fn is_null_match(&self) -> bool {
        self.filter_type == SearchFilterType::Exact && self.values == [None]
    }
}

impl FilterNode {
    pub fn exact(field: impl Into<String>, values: Vec<Option<String>>) -> Self {
        FilterNode::Field(FieldNode::new(field, SearchFilterType::Exact, values))
    }

    pub fn fuzzy(field: impl Into<String>, text: impl Into<String>) -> Self {
        FilterNode::Field(FieldNode::new(
            field,
            SearchFilterType::Fuzzy,
            vec![Some(text.into())],
        ))
    }

    pub fn range(field: impl Into<String>, min: Option<String>, max: Option<String>) -> Self {
        FilterNode::Field(FieldNode::new(
            field,
            SearchFilterType::Range,
            vec![min, max],
        ))
    }

    pub fn and(children: Vec<FilterNode>) -> Self {
        FilterNode::And(AndNode { children })
    }

    pub fn or(children: Vec<FilterNode>) -> Self {
        FilterNode::Or(OrNode { children })
    }

    pub fn not(child: FilterNode) -> Self {
        FilterNode::Not(NotNode {
            child: Box::new(child),
        })
    }

    pub fn as_field(&self) -> Option<&FieldNode> {
        match self {
            FilterNode::Field(field) => Some(field),
            _ => None,
        }
    }

    /// A node is empty when it cannot constrain anything: a leaf without
    /// values, or a group whose children are all empty.
    pub fn is_empty(&self) -> bool {
        match self {
            FilterNode::Field(field) => field.values.is_empty(),
            FilterNode::And(AndNode { children }) | FilterNode::Or(OrNode { children }) => {
                children.iter().all(FilterNode::is_empty)
            }
            FilterNode::Not(NotNode { child }) => child.is_empty(),
        }
    }

    /// The tree with every empty leaf removed, groups left without children
    /// dropped, and `None` when nothing is left.
    pub fn pruned(self) -> Option<FilterNode> {
        let prune_all = |children: Vec<FilterNode>| -> Option<Vec<FilterNode>> {
            let kept: Vec<FilterNode> = children.into_iter().filter_map(Self::pruned).collect();
            (!kept.is_empty()).then_some(kept)
        };
        match self {
            FilterNode::Field(field) if field.values.is_empty() => None,
            FilterNode::Field(field) => Some(FilterNode::Field(field)),
            FilterNode::And(AndNode { children }) => prune_all(children).map(FilterNode::and),
            FilterNode::Or(OrNode { children }) => prune_all(children).map(FilterNode::or),
            FilterNode::Not(NotNode { child }) => (*child).pruned().map(FilterNode::not),
        }
    }

    /// Parse a tree from its JSON wire form
    pub fn from_json(json: &str) -> Result<Self, crate::FilterError> {
        Ok(serde_json::from_str(json)?)
    }
}
