use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::FilterCodec;
use crate::catalog::{FieldKey, UiFilterType};
use crate::node::FilterNode;

/// Raw value of a boolean column that means "no"
pub const BOOLEAN_FALSE: &str = "false";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectMode {
    Single,
    Multi,
    /// Single select over a boolean column. `null` and `"false"` both mean
    /// "no" on the backend, so choosing `"false"` sends both.
    Boolean,
}

impl SelectMode {
    pub fn for_filter_type(filter_type: UiFilterType) -> Option<Self> {
        match filter_type {
            UiFilterType::SingleSelect => Some(SelectMode::Single),
            UiFilterType::MultiSelect => Some(SelectMode::Multi),
            UiFilterType::BooleanSelect => Some(SelectMode::Boolean),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectCodec {
    field: FieldKey,
    mode: SelectMode,
}

/// Ordered selection; `None` is the "unspecified" choice
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default, rename_all = "camelCase")]
pub struct SelectState {
    pub selected: Vec<Option<String>>,
}

impl SelectState {
    pub fn is_selected(&self, value: Option<&str>) -> bool {
        self.selected.iter().any(|v| v.as_deref() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectEvent {
    /// Check or uncheck one option
    Toggle(Option<String>),
    /// Make `value` the only selection
    Select(Option<String>),
    Clear,
}

impl SelectCodec {
    pub fn new(field: FieldKey, mode: SelectMode) -> Self {
        Self { field, mode }
    }

    pub fn mode(&self) -> SelectMode {
        self.mode
    }
}

impl FilterCodec for SelectCodec {
    type State = SelectState;
    type Event = SelectEvent;

    fn encode(&self, state: &SelectState) -> Option<FilterNode> {
        if state.selected.is_empty() {
            return None;
        }
        let values = match self.mode {
            SelectMode::Single | SelectMode::Multi => state.selected.clone(),
            SelectMode::Boolean => state
                .selected
                .iter()
                .flatten()
                .flat_map(|value| {
                    if value == BOOLEAN_FALSE {
                        vec![None, Some(value.clone())]
                    } else {
                        vec![Some(value.clone())]
                    }
                })
                .collect(),
        };
        if values.is_empty() {
            return None;
        }
        Some(FilterNode::exact(self.field.as_str(), values))
    }

    fn decode(&self, node: Option<&FilterNode>) -> SelectState {
        let Some(field) = node
            .and_then(FilterNode::as_field)
            .filter(|field| field.field == self.field.as_str())
        else {
            return SelectState::default();
        };
        let selected = match self.mode {
            SelectMode::Single | SelectMode::Multi => field.values.clone(),
            // The null that rides along with "false" is not a separate choice
            SelectMode::Boolean => field.values.iter().filter(|v| v.is_some()).cloned().collect(),
        };
        SelectState { selected }
    }

    fn normalize(&self, state: &SelectState) -> SelectState {
        match self.mode {
            SelectMode::Single | SelectMode::Multi => state.clone(),
            SelectMode::Boolean => SelectState {
                selected: state.selected.iter().filter(|v| v.is_some()).cloned().collect(),
            },
        }
    }

    fn reduce(&self, state: &SelectState, event: SelectEvent) -> SelectState {
        match event {
            SelectEvent::Clear => SelectState::default(),
            SelectEvent::Select(value) => {
                if self.mode == SelectMode::Boolean && value.is_none() {
                    return state.clone();
                }
                SelectState {
                    selected: vec![value],
                }
            }
            SelectEvent::Toggle(value) => {
                if self.mode == SelectMode::Boolean && value.is_none() {
                    return state.clone();
                }
                if state.selected.contains(&value) {
                    SelectState {
                        selected: state
                            .selected
                            .iter()
                            .filter(|v| **v != value)
                            .cloned()
                            .collect(),
                    }
                } else if self.mode == SelectMode::Multi {
                    let mut selected = state.selected.clone();
                    selected.push(value);
                    SelectState { selected }
                } else {
                    SelectState {
                        selected: vec![value],
                    }
                }
            }
        }
    }
}
