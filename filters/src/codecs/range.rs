use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{normalize_input, numeric_bound, FilterCodec};
use crate::catalog::{FieldKey, UiFilterType};
use crate::node::FilterNode;

/// Wire format for date bounds
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Input formats accepted for date bounds, tried in order
const DATE_INPUT_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeKind {
    Number,
    Date,
}

impl RangeKind {
    pub fn for_filter_type(filter_type: UiFilterType) -> Option<Self> {
        match filter_type {
            UiFilterType::NumberRange => Some(RangeKind::Number),
            UiFilterType::DateRange => Some(RangeKind::Date),
            _ => None,
        }
    }

    /// Wire form of one bound; `None` for blank or unparsable input
    fn bound(&self, input: Option<&str>) -> Option<String> {
        match self {
            RangeKind::Number => numeric_bound(input),
            RangeKind::Date => date_bound(input),
        }
    }
}

fn date_bound(input: Option<&str>) -> Option<String> {
    let value = normalize_input(input?)?;
    let date = DATE_INPUT_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(&value, format).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(&value)
                .ok()
                .map(|dt| dt.date_naive())
        });
    match date {
        Some(date) => Some(date.format(DATE_FORMAT).to_string()),
        None => {
            tracing::debug!("Dropping unparsable date bound {:?}", value);
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeCodec {
    field: FieldKey,
    kind: RangeKind,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default, rename_all = "camelCase")]
pub struct RangeState {
    pub min: Option<String>,
    pub max: Option<String>,
}

impl RangeState {
    /// Build from raw text inputs; blank inputs are unset
    pub fn from_inputs(min: &str, max: &str) -> Self {
        Self {
            min: normalize_input(min),
            max: normalize_input(max),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeEvent {
    SetMin(String),
    SetMax(String),
    Clear,
}

impl RangeCodec {
    pub fn new(field: FieldKey, kind: RangeKind) -> Self {
        Self { field, kind }
    }
}

impl FilterCodec for RangeCodec {
    type State = RangeState;
    type Event = RangeEvent;

    fn encode(&self, state: &RangeState) -> Option<FilterNode> {
        let min = self.kind.bound(state.min.as_deref());
        let max = self.kind.bound(state.max.as_deref());
        if min.is_none() && max.is_none() {
            return None;
        }
        Some(FilterNode::range(self.field.as_str(), min, max))
    }

    fn decode(&self, node: Option<&FilterNode>) -> RangeState {
        match node.and_then(FilterNode::as_field) {
            Some(field) if field.is_range_on(self.field.as_str()) => RangeState {
                min: field.value(0),
                max: field.value(1),
            },
            Some(field) => {
                tracing::warn!(
                    "Ignoring {:?} filter on {} where a range on {} was expected",
                    field.filter_type,
                    field.field,
                    self.field
                );
                RangeState::default()
            }
            None => {
                if node.is_some() {
                    tracing::warn!("Ignoring non-field filter tree for range field {}", self.field);
                }
                RangeState::default()
            }
        }
    }

    fn normalize(&self, state: &RangeState) -> RangeState {
        RangeState {
            min: self.kind.bound(state.min.as_deref()),
            max: self.kind.bound(state.max.as_deref()),
        }
    }

    fn reduce(&self, state: &RangeState, event: RangeEvent) -> RangeState {
        match event {
            RangeEvent::SetMin(min) => RangeState {
                min: normalize_input(&min),
                max: state.max.clone(),
            },
            RangeEvent::SetMax(max) => RangeState {
                min: state.min.clone(),
                max: normalize_input(&max),
            },
            RangeEvent::Clear => RangeState::default(),
        }
    }
}
