mod common;

use common::*;
use seedbank_filters::{
    decode_field, encode_field, CountWeightCodec, CountWeightEvent, FieldKey, FieldState,
    FilterCodec, FilterSet, RangeCodec, RangeEvent, RangeKind, SearchCodec, SearchEvent,
    SelectCodec, SelectEvent, SelectMode, UiFilterType, WeightUnit,
};
use strum::IntoEnumIterator;

/// Feed `events` through `codec` one at a time, checking every state
/// reached on the way survives a trip through the wire.
fn assert_reachable_states_round_trip<C: FilterCodec>(codec: &C, events: Vec<C::Event>) {
    let mut state = C::State::default();
    for event in events {
        state = codec.reduce(&state, event);
        let normalized = codec.normalize(&state);
        assert_eq!(
            codec.decode(codec.encode(&state).as_ref()),
            normalized,
            "after reaching {:?}",
            state
        );
        assert_eq!(codec.normalize(&normalized), normalized);
        assert_eq!(codec.decode(codec.encode(&normalized).as_ref()), normalized);
    }
}

#[test]
fn test_unset_state_leaves_every_key_absent() {
    for key in FieldKey::iter() {
        let state = FieldState::empty_for(key);
        let set = FilterSet::new().with_state(key, &state).unwrap();
        assert!(!set.contains(key), "{} produced a filter when unset", key);
        assert_eq!(decode_field(key, set.get(key)), state);
    }
}

#[test]
fn test_search_round_trip() {
    let codec = SearchCodec::new(FieldKey::SpeciesName);
    for text in ["", "banksia", "Acacia pycnantha", "ACC-2024-001"] {
        let state = search(text);
        assert_eq!(codec.decode(codec.encode(&state).as_ref()), state);
    }
}

#[test]
fn test_select_round_trip() {
    let multi = SelectCodec::new(FieldKey::StorageLocation, SelectMode::Multi);
    let cases = [
        selected(&[]),
        selected(&[Some("Freezer 1")]),
        selected(&[Some("Freezer 1"), Some("Cooler")]),
        selected(&[Some("Cooler"), None]),
        selected(&[None]),
    ];
    for state in cases {
        assert_eq!(multi.decode(multi.encode(&state).as_ref()), state);
    }

    let single = SelectCodec::new(FieldKey::CollectionSource, SelectMode::Single);
    for state in [selected(&[]), selected(&[Some("Wild")]), selected(&[None])] {
        assert_eq!(single.decode(single.encode(&state).as_ref()), state);
    }

    let boolean = SelectCodec::new(FieldKey::SpeciesEndangered, SelectMode::Boolean);
    for state in [selected(&[]), selected(&[Some("true")]), selected(&[Some("false")])] {
        assert_eq!(boolean.decode(boolean.encode(&state).as_ref()), state);
    }
}

#[test]
fn test_range_round_trip() {
    let number = RangeCodec::new(FieldKey::EstimatedCount, RangeKind::Number);
    let date = RangeCodec::new(FieldKey::CollectedDate, RangeKind::Date);
    let number_bounds = [None, Some("0"), Some("10"), Some("2.5")];
    let date_bounds = [None, Some("2023-01-31"), Some("2024-12-01")];

    for min in number_bounds {
        for max in number_bounds {
            let state = range(min, max);
            assert_eq!(number.decode(number.encode(&state).as_ref()), state);
        }
    }
    for min in date_bounds {
        for max in date_bounds {
            let state = range(min, max);
            assert_eq!(date.decode(date.encode(&state).as_ref()), state);
        }
    }
}

#[test]
fn test_count_weight_round_trip() {
    for key in [FieldKey::TotalQuantity, FieldKey::RemainingQuantity] {
        let codec = CountWeightCodec::new(key.composite_fields().unwrap());
        for state in count_weight_states() {
            let node = codec.encode(&state);
            assert_eq!(
                codec.decode(node.as_ref()),
                state.normalized(),
                "{} round trip of {:?} via {:?}",
                key,
                state,
                node
            );
            // already-normalized states are fixed points
            let normalized = state.normalized();
            assert_eq!(codec.decode(codec.encode(&normalized).as_ref()), normalized);
        }
    }
}

#[test]
fn test_count_weight_never_emits_empty_or() {
    let codec = CountWeightCodec::new(FieldKey::TotalQuantity.composite_fields().unwrap());
    for state in count_weight_states() {
        let normalized = state.normalized();
        let active = normalized.seed_count || normalized.seed_weight || normalized.empty_fields;
        match codec.encode(&state) {
            Some(node) => {
                assert!(active, "{:?} encoded to {:?}", state, node);
                assert!(!node.is_empty());
            }
            None => assert!(!active, "{:?} was dropped", state),
        }
    }
}

#[test]
fn test_saved_set_restores_through_json() {
    let set = FilterSet::new()
        .with_state(FieldKey::SpeciesName, &FieldState::Search(search("grevillea")))
        .unwrap()
        .with_state(
            FieldKey::StorageLocation,
            &FieldState::Select(selected(&[Some("Cooler"), None])),
        )
        .unwrap()
        .with_state(
            FieldKey::ReceivedDate,
            &FieldState::Range(range(Some("2024-01-01"), None)),
        )
        .unwrap()
        .with_state(
            FieldKey::RemainingQuantity,
            &FieldState::CountWeight(count_weight_states()[200].clone()),
        )
        .unwrap();

    let json = serde_json::to_string(&set).unwrap();
    let reopened = FilterSet::from_json(&json).unwrap();
    assert_eq!(reopened, set);

    for (key, state) in reopened.restore() {
        assert_eq!(encode_field(key, &state).unwrap().as_ref(), set.get(key));
        if key.filter_type() == UiFilterType::Search && key != FieldKey::SpeciesName {
            assert_eq!(state, FieldState::empty_for(key));
        }
    }
}

#[test]
fn test_search_states_reached_by_typing() {
    let events = ["a", "ac", "ac ", "  acacia  ", "   ", "ACC-7"]
        .into_iter()
        .map(|text| SearchEvent::SetText(text.to_string()))
        .chain([SearchEvent::Clear])
        .collect();
    assert_reachable_states_round_trip(&SearchCodec::new(FieldKey::SpeciesName), events);
}

#[test]
fn test_select_states_reached_by_clicking() {
    let clicks = || {
        vec![
            SelectEvent::Toggle(some("A")),
            SelectEvent::Toggle(None),
            SelectEvent::Toggle(some("B")),
            SelectEvent::Toggle(some("A")),
            SelectEvent::Select(some("false")),
            SelectEvent::Toggle(some("true")),
            SelectEvent::Select(None),
            SelectEvent::Toggle(some("true")),
            SelectEvent::Clear,
        ]
    };
    for (key, mode) in [
        (FieldKey::StorageLocation, SelectMode::Multi),
        (FieldKey::CollectionSource, SelectMode::Single),
        (FieldKey::SpeciesRare, SelectMode::Boolean),
    ] {
        assert_reachable_states_round_trip(&SelectCodec::new(key, mode), clicks());
    }
}

#[test]
fn test_range_states_reached_by_typing() {
    let number_events = vec![
        RangeEvent::SetMin("1".into()),
        RangeEvent::SetMin("1e3".into()),
        RangeEvent::SetMax("+5".into()),
        RangeEvent::SetMax(".5".into()),
        RangeEvent::SetMin("abc".into()),
        RangeEvent::SetMax(" 12 ".into()),
        RangeEvent::Clear,
    ];
    assert_reachable_states_round_trip(
        &RangeCodec::new(FieldKey::EstimatedCount, RangeKind::Number),
        number_events,
    );

    let date_events = vec![
        RangeEvent::SetMin("03/15/2024".into()),
        RangeEvent::SetMax("2024/12/01".into()),
        RangeEvent::SetMin("2024-02-30".into()),
        RangeEvent::SetMax("2024-06-01T08:00:00Z".into()),
        RangeEvent::SetMin("".into()),
        RangeEvent::Clear,
    ];
    assert_reachable_states_round_trip(
        &RangeCodec::new(FieldKey::ReceivedDate, RangeKind::Date),
        date_events,
    );
}

#[test]
fn test_count_weight_states_reached_by_clicking() {
    let events = vec![
        CountWeightEvent::ToggleCount,
        CountWeightEvent::SetCountMin(" 5".into()),
        CountWeightEvent::SetCountMax("1e2".into()),
        CountWeightEvent::ToggleWeight,
        CountWeightEvent::SetWeightUnit(WeightUnit::Ounces),
        CountWeightEvent::SetWeightMax("2.50".into()),
        CountWeightEvent::ToggleEmptyFields,
        CountWeightEvent::ToggleCount,
        CountWeightEvent::SetWeightMin("lots".into()),
        CountWeightEvent::ToggleWeight,
        CountWeightEvent::Clear,
    ];
    assert_reachable_states_round_trip(
        &CountWeightCodec::new(FieldKey::TotalQuantity.composite_fields().unwrap()),
        events,
    );
}
