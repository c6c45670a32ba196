use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::FilterCodec;
use crate::catalog::FieldKey;
use crate::node::FilterNode;

/// Free-text search box. Matching fuzziness is decided by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchCodec {
    field: FieldKey,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchState {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    SetText(String),
    Clear,
}

impl SearchCodec {
    pub fn new(field: FieldKey) -> Self {
        Self { field }
    }
}

impl FilterCodec for SearchCodec {
    type State = SearchState;
    type Event = SearchEvent;

    fn encode(&self, state: &SearchState) -> Option<FilterNode> {
        let text = state.text.trim();
        if text.is_empty() {
            return None;
        }
        Some(FilterNode::fuzzy(self.field.as_str(), text))
    }

    fn decode(&self, node: Option<&FilterNode>) -> SearchState {
        let text = node
            .and_then(FilterNode::as_field)
            .filter(|field| field.field == self.field.as_str())
            .and_then(|field| field.value(0))
            .unwrap_or_default();
        SearchState { text }
    }

    fn normalize(&self, state: &SearchState) -> SearchState {
        SearchState {
            text: state.text.trim().to_string(),
        }
    }

    fn reduce(&self, _state: &SearchState, event: SearchEvent) -> SearchState {
        match event {
            SearchEvent::SetText(text) => SearchState { text },
            SearchEvent::Clear => SearchState::default(),
        }
    }
}
