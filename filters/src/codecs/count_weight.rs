//! Count/weight composite filter.
//!
//! One logical quantity is stored in three backend fields: a seed count, a
//! weight, and a units tag saying which of the two a record uses. The
//! widget has three independent branches, sent as children of one `or`
//! node in a fixed order:
//!
//! 1. count: `and[ units Exact ["Seeds"], count Range [min, max] ]`
//! 2. weight: `weight Range ["<n> <unit>", "<n> <unit>"]`
//! 3. empty: `count Exact [null]`
//!
//! Inactive branches are left out, and with no active branch the field is
//! left out of the filter set altogether.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{normalize_input, numeric_bound, FilterCodec};
use crate::catalog::{CompositeFields, SEEDS_UNIT};
use crate::node::{AndNode, FieldNode, FilterNode};
use crate::units::{format_weight, parse_weight, WeightUnit};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountWeightCodec {
    fields: CompositeFields,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default, rename_all = "camelCase")]
pub struct CountWeightState {
    pub seed_count: bool,
    pub count_min: Option<String>,
    pub count_max: Option<String>,
    pub seed_weight: bool,
    pub weight_min: Option<String>,
    pub weight_max: Option<String>,
    pub weight_unit: WeightUnit,
    pub empty_fields: bool,
}

impl CountWeightState {
    /// The state as the backend sees it: a branch with no usable bound is
    /// off, bounds of an inactive branch are dropped, and the unit falls
    /// back to the default when the weight branch is off.
    ///
    /// `decode(encode(s)) == s.normalized()` for every state.
    pub fn normalized(&self) -> Self {
        let count_min = numeric_bound(self.count_min.as_deref());
        let count_max = numeric_bound(self.count_max.as_deref());
        let seed_count = self.seed_count && (count_min.is_some() || count_max.is_some());

        let weight_min = numeric_bound(self.weight_min.as_deref());
        let weight_max = numeric_bound(self.weight_max.as_deref());
        let seed_weight = self.seed_weight && (weight_min.is_some() || weight_max.is_some());

        Self {
            seed_count,
            count_min: count_min.filter(|_| seed_count),
            count_max: count_max.filter(|_| seed_count),
            seed_weight,
            weight_min: weight_min.filter(|_| seed_weight),
            weight_max: weight_max.filter(|_| seed_weight),
            weight_unit: if seed_weight {
                self.weight_unit
            } else {
                WeightUnit::default()
            },
            empty_fields: self.empty_fields,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountWeightEvent {
    ToggleCount,
    SetCountMin(String),
    SetCountMax(String),
    ToggleWeight,
    SetWeightMin(String),
    SetWeightMax(String),
    SetWeightUnit(WeightUnit),
    ToggleEmptyFields,
    Clear,
}

impl CountWeightCodec {
    pub fn new(fields: CompositeFields) -> Self {
        Self { fields }
    }

    fn count_branch(&self, state: &CountWeightState) -> Option<FilterNode> {
        if !state.seed_count {
            return None;
        }
        let min = numeric_bound(state.count_min.as_deref());
        let max = numeric_bound(state.count_max.as_deref());
        if min.is_none() && max.is_none() {
            return None;
        }
        Some(FilterNode::and(vec![
            FilterNode::exact(
                self.fields.units_field,
                vec![Some(SEEDS_UNIT.to_string())],
            ),
            FilterNode::range(self.fields.count_field, min, max),
        ]))
    }

    fn weight_branch(&self, state: &CountWeightState) -> Option<FilterNode> {
        if !state.seed_weight {
            return None;
        }
        let bound = |input: Option<&str>| {
            numeric_bound(input).map(|amount| format_weight(&amount, state.weight_unit))
        };
        let min = bound(state.weight_min.as_deref());
        let max = bound(state.weight_max.as_deref());
        if min.is_none() && max.is_none() {
            return None;
        }
        Some(FilterNode::range(self.fields.weight_field, min, max))
    }

    fn empty_branch(&self, state: &CountWeightState) -> Option<FilterNode> {
        state
            .empty_fields
            .then(|| FilterNode::exact(self.fields.count_field, vec![None]))
    }

    /// Count range inside an `and` child, if it has the expected shape
    fn count_range<'a>(&self, and: &'a AndNode) -> Option<&'a FieldNode> {
        and.children
            .get(1)
            .and_then(FilterNode::as_field)
            .filter(|field| field.is_range_on(self.fields.count_field))
    }
}

impl FilterCodec for CountWeightCodec {
    type State = CountWeightState;
    type Event = CountWeightEvent;

    fn encode(&self, state: &CountWeightState) -> Option<FilterNode> {
        let children: Vec<FilterNode> = [
            self.count_branch(state),
            self.weight_branch(state),
            self.empty_branch(state),
        ]
        .into_iter()
        .flatten()
        .collect();

        if children.is_empty() {
            None
        } else {
            Some(FilterNode::or(children))
        }
    }

    fn decode(&self, node: Option<&FilterNode>) -> CountWeightState {
        let mut state = CountWeightState::default();
        let or = match node {
            Some(FilterNode::Or(or)) => or,
            Some(other) => {
                tracing::warn!(
                    "Expected an or-node for {}, ignoring {:?}",
                    self.fields.count_field,
                    other
                );
                return state;
            }
            None => return state,
        };

        for child in &or.children {
            match child {
                FilterNode::And(and) => match self.count_range(and) {
                    Some(range) => {
                        state.seed_count = true;
                        state.count_min = range.value(0);
                        state.count_max = range.value(1);
                    }
                    None => tracing::warn!(
                        "Ignoring and-node without a count range on {}",
                        self.fields.count_field
                    ),
                },
                FilterNode::Field(field) if field.is_range_on(self.fields.weight_field) => {
                    let min = field.value(0).map(|v| parse_weight(&v));
                    let max = field.value(1).map(|v| parse_weight(&v));
                    let unit = min
                        .iter()
                        .chain(max.iter())
                        .find_map(|parsed| parsed.unit);
                    if unit.is_none() {
                        tracing::warn!(
                            "No recognizable unit in {:?}, using {}",
                            field.values,
                            WeightUnit::default()
                        );
                    }
                    state.seed_weight = true;
                    state.weight_min = min.and_then(|p| normalize_input(&p.amount));
                    state.weight_max = max.and_then(|p| normalize_input(&p.amount));
                    state.weight_unit = unit.unwrap_or_default();
                }
                FilterNode::Field(field) if field.is_null_match() => {
                    state.empty_fields = true;
                }
                other => tracing::warn!(
                    "Ignoring unrecognized child of {} filter: {:?}",
                    self.fields.count_field,
                    other
                ),
            }
        }
        state
    }

    fn normalize(&self, state: &CountWeightState) -> CountWeightState {
        state.normalized()
    }

    fn reduce(&self, state: &CountWeightState, event: CountWeightEvent) -> CountWeightState {
        let mut next = state.clone();
        match event {
            CountWeightEvent::ToggleCount => next.seed_count = !state.seed_count,
            CountWeightEvent::SetCountMin(v) => next.count_min = normalize_input(&v),
            CountWeightEvent::SetCountMax(v) => next.count_max = normalize_input(&v),
            CountWeightEvent::ToggleWeight => next.seed_weight = !state.seed_weight,
            CountWeightEvent::SetWeightMin(v) => next.weight_min = normalize_input(&v),
            CountWeightEvent::SetWeightMax(v) => next.weight_max = normalize_input(&v),
            CountWeightEvent::SetWeightUnit(unit) => next.weight_unit = unit,
            CountWeightEvent::ToggleEmptyFields => next.empty_fields = !state.empty_fields,
            CountWeightEvent::Clear => next = CountWeightState::default(),
        }
        next
    }
}
