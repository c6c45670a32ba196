//! UI state for any catalog field, dispatched to the matching codec.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::{FieldKey, UiFilterType};
use crate::codecs::{
    CountWeightCodec, CountWeightState, FilterCodec, RangeCodec, RangeKind, RangeState,
    SearchCodec, SearchState, SelectCodec, SelectMode, SelectState,
};
use crate::errors::FilterError;
use crate::node::FilterNode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FieldState {
    Search(SearchState),
    Select(SelectState),
    Range(RangeState),
    CountWeight(CountWeightState),
}

impl FieldState {
    /// The all-unset state for `key`
    pub fn empty_for(key: FieldKey) -> Self {
        decode_field(key, None)
    }
}

fn mismatch(key: FieldKey) -> FilterError {
    FilterError::KindMismatch {
        field: key.to_string(),
        expected: key.filter_type(),
    }
}

/// Encode `state` with the codec the catalog assigns to `key`
pub fn encode_field(key: FieldKey, state: &FieldState) -> Result<Option<FilterNode>, FilterError> {
    let filter_type = key.filter_type();
    match state {
        FieldState::Search(state) if filter_type == UiFilterType::Search => {
            Ok(SearchCodec::new(key).encode(state))
        }
        FieldState::Select(state) => {
            let mode = SelectMode::for_filter_type(filter_type).ok_or_else(|| mismatch(key))?;
            Ok(SelectCodec::new(key, mode).encode(state))
        }
        FieldState::Range(state) => {
            let kind = RangeKind::for_filter_type(filter_type).ok_or_else(|| mismatch(key))?;
            Ok(RangeCodec::new(key, kind).encode(state))
        }
        FieldState::CountWeight(state) => {
            let fields = key.composite_fields().ok_or_else(|| mismatch(key))?;
            Ok(CountWeightCodec::new(fields).encode(state))
        }
        FieldState::Search(_) => Err(mismatch(key)),
    }
}

/// Restore the UI state of `key` from its filter tree. Never fails: a tree
/// the codec does not recognize decodes as unset.
pub fn decode_field(key: FieldKey, node: Option<&FilterNode>) -> FieldState {
    let filter_type = key.filter_type();
    if let Some(mode) = SelectMode::for_filter_type(filter_type) {
        return FieldState::Select(SelectCodec::new(key, mode).decode(node));
    }
    if let Some(kind) = RangeKind::for_filter_type(filter_type) {
        return FieldState::Range(RangeCodec::new(key, kind).decode(node));
    }
    if let Some(fields) = key.composite_fields() {
        return FieldState::CountWeight(CountWeightCodec::new(fields).decode(node));
    }
    FieldState::Search(SearchCodec::new(key).decode(node))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::WeightUnit;
    use strum::IntoEnumIterator;

    #[test]
    fn test_empty_state_matches_filter_type() {
        for key in FieldKey::iter() {
            let state = FieldState::empty_for(key);
            let expected = match key.filter_type() {
                UiFilterType::Search => matches!(state, FieldState::Search(_)),
                UiFilterType::SingleSelect
                | UiFilterType::MultiSelect
                | UiFilterType::BooleanSelect => matches!(state, FieldState::Select(_)),
                UiFilterType::NumberRange | UiFilterType::DateRange => {
                    matches!(state, FieldState::Range(_))
                }
                UiFilterType::CountWeight => matches!(state, FieldState::CountWeight(_)),
            };
            assert!(expected, "{} decoded to {:?}", key, state);
            assert_eq!(encode_field(key, &state).unwrap(), None);
        }
    }

    #[test]
    fn test_encode_dispatch() {
        let state = FieldState::Search(SearchState {
            text: "ACC-42".to_string(),
        });
        assert_eq!(
            encode_field(FieldKey::AccessionNumber, &state).unwrap(),
            Some(FilterNode::fuzzy("accessionNumber", "ACC-42"))
        );
    }

    #[test]
    fn test_encode_kind_mismatch() {
        let state = FieldState::Range(RangeState::from_inputs("1", "2"));
        let err = encode_field(FieldKey::State, &state).unwrap_err();
        assert!(matches!(
            err,
            FilterError::KindMismatch {
                expected: UiFilterType::MultiSelect,
                ..
            }
        ));

        let state = FieldState::Search(SearchState::default());
        assert!(encode_field(FieldKey::TotalQuantity, &state).is_err());
    }

    #[test]
    fn test_partial_state_fills_defaults() {
        let state: FieldState =
            serde_json::from_str(r#"{"kind": "countWeight", "emptyFields": true}"#).unwrap();
        assert_eq!(
            state,
            FieldState::CountWeight(CountWeightState {
                empty_fields: true,
                ..Default::default()
            })
        );
        assert_eq!(
            encode_field(FieldKey::TotalQuantity, &state).unwrap(),
            Some(FilterNode::or(vec![FilterNode::exact(
                "totalQuantity",
                vec![None]
            )]))
        );

        let state: FieldState = serde_json::from_str(r#"{"kind": "range", "max": "4"}"#).unwrap();
        assert_eq!(state, FieldState::Range(RangeState::from_inputs("", "4")));
        let state: FieldState = serde_json::from_str(r#"{"kind": "select"}"#).unwrap();
        assert_eq!(state, FieldState::Select(SelectState::default()));
        let state: FieldState = serde_json::from_str(r#"{"kind": "search"}"#).unwrap();
        assert_eq!(state, FieldState::Search(SearchState::default()));
    }

    #[test]
    fn test_field_state_wire_shape() {
        let state = FieldState::CountWeight(CountWeightState {
            seed_weight: true,
            weight_min: Some("10".to_string()),
            weight_unit: WeightUnit::Grams,
            ..Default::default()
        });
        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(value["kind"], "countWeight");
        assert_eq!(value["seedWeight"], true);
        assert_eq!(value["weightUnit"], "Grams");
        let back: FieldState = serde_json::from_value(value).unwrap();
        assert_eq!(back, state);
    }
}
