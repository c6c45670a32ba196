//! Shared fixtures for the seedbank-filters integration tests

#![allow(dead_code)]

use seedbank_filters::{
    CountWeightState, FieldKey, RangeState, SearchState, SelectState, ValuesByField, WeightUnit,
};
use strum::IntoEnumIterator;

pub fn some(s: &str) -> Option<String> {
    Some(s.to_string())
}

pub fn values(items: &[Option<&str>]) -> Vec<Option<String>> {
    items.iter().map(|v| v.map(str::to_string)).collect()
}

pub fn search(text: &str) -> SearchState {
    SearchState {
        text: text.to_string(),
    }
}

pub fn selected(items: &[Option<&str>]) -> SelectState {
    SelectState {
        selected: values(items),
    }
}

pub fn range(min: Option<&str>, max: Option<&str>) -> RangeState {
    RangeState {
        min: min.map(str::to_string),
        max: max.map(str::to_string),
    }
}

/// Every combination of the count/weight toggles with a few bound shapes,
/// including toggles switched on without bounds.
pub fn count_weight_states() -> Vec<CountWeightState> {
    let bounds = [
        (None, None),
        (some("5"), None),
        (None, some("40")),
        (some("1.5"), some("250")),
    ];
    let mut states = Vec::new();
    for seed_count in [false, true] {
        for seed_weight in [false, true] {
            for empty_fields in [false, true] {
                for (count_min, count_max) in bounds.iter().cloned() {
                    for (weight_min, weight_max) in bounds.iter().cloned() {
                        for weight_unit in WeightUnit::iter() {
                            states.push(CountWeightState {
                                seed_count,
                                count_min: count_min.clone(),
                                count_max: count_max.clone(),
                                seed_weight,
                                weight_min: weight_min.clone(),
                                weight_max: weight_max.clone(),
                                weight_unit,
                                empty_fields,
                            });
                        }
                    }
                }
            }
        }
    }
    states
}

/// Values a discovery call could return for the option fields
pub fn all_values() -> ValuesByField {
    let mut all = ValuesByField::new();
    all.insert(
        FieldKey::State,
        values(&[Some("Stored"), Some("Drying"), Some("Pending"), Some("Withdrawn")]),
    );
    all.insert(
        FieldKey::StorageLocation,
        values(&[Some("Freezer 2"), Some("freezer 1"), Some("Cooler"), None]),
    );
    all.insert(
        FieldKey::CollectionSource,
        values(&[Some("Wild"), Some("Cultivated")]),
    );
    all.insert(FieldKey::SpeciesRare, values(&[Some("true"), None]));
    all
}

/// A narrower discovery result, as returned under an active filter set
pub fn available_values() -> ValuesByField {
    let mut available = ValuesByField::new();
    available.insert(FieldKey::State, values(&[Some("Drying")]));
    available.insert(
        FieldKey::StorageLocation,
        values(&[Some("Cooler"), Some("Freezer 2"), None]),
    );
    available.insert(FieldKey::SpeciesRare, values(&[None]));
    available
}
