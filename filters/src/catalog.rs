//! Field catalog for accession search filters.
//!
//! Provides:
//! - `FieldKey`: every filterable field, as a closed enum
//! - `FieldKey::definition()`: UI filter type, display label and backing fields
//! - `fields_with_type()` / `option_fields()`: lookups by UI filter type
//! - `lookup()`: resolves a wire field name to a `FieldKey`

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};
use ts_rs::TS;

use crate::errors::FilterError;

/// Constant tag written to the units field of the count branch of a
/// count/weight filter.
pub const SEEDS_UNIT: &str = "Seeds";

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
    TS,
)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum FieldKey {
    AccessionNumber,
    SpeciesName,
    CollectionSiteName,
    State,
    StorageLocation,
    CollectionSource,
    SpeciesEndangered,
    SpeciesRare,
    EstimatedCount,
    AgeMonths,
    CollectedDate,
    ReceivedDate,
    TotalQuantity,
    RemainingQuantity,
}

/// Widget used to edit a field's filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum UiFilterType {
    Search,
    SingleSelect,
    MultiSelect,
    /// Single select over a boolean column where `null` also means "no"
    BooleanSelect,
    NumberRange,
    DateRange,
    CountWeight,
}

impl UiFilterType {
    pub fn is_select(&self) -> bool {
        matches!(
            self,
            UiFilterType::SingleSelect | UiFilterType::MultiSelect | UiFilterType::BooleanSelect
        )
    }
}

/// Backend fields behind one count/weight measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeFields {
    pub count_field: &'static str,
    pub weight_field: &'static str,
    pub units_field: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    pub key: FieldKey,
    pub label: &'static str,
    pub filter_type: UiFilterType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub composite: Option<CompositeFields>,
}

impl FieldDefinition {
    const fn simple(key: FieldKey, label: &'static str, filter_type: UiFilterType) -> Self {
        Self {
            key,
            label,
            filter_type,
            composite: None,
        }
    }

    const fn count_weight(key: FieldKey, label: &'static str, composite: CompositeFields) -> Self {
        Self {
            key,
            label,
            filter_type: UiFilterType::CountWeight,
            composite: Some(composite),
        }
    }
}

impl FieldKey {
    /// Wire name of the field, e.g. `storageLocation`
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    pub const fn definition(self) -> FieldDefinition {
        use FieldKey::*;
        use UiFilterType::*;
        match self {
            AccessionNumber => FieldDefinition::simple(self, "Accession", Search),
            SpeciesName => FieldDefinition::simple(self, "Species", Search),
            CollectionSiteName => FieldDefinition::simple(self, "Collection Site", Search),
            State => FieldDefinition::simple(self, "State", MultiSelect),
            StorageLocation => FieldDefinition::simple(self, "Storage Location", MultiSelect),
            CollectionSource => FieldDefinition::simple(self, "Collection Source", SingleSelect),
            SpeciesEndangered => FieldDefinition::simple(self, "Endangered", BooleanSelect),
            SpeciesRare => FieldDefinition::simple(self, "Rare", BooleanSelect),
            EstimatedCount => FieldDefinition::simple(self, "Estimated Count", NumberRange),
            AgeMonths => FieldDefinition::simple(self, "Age (Months)", NumberRange),
            CollectedDate => FieldDefinition::simple(self, "Collection Date", DateRange),
            ReceivedDate => FieldDefinition::simple(self, "Received Date", DateRange),
            TotalQuantity => FieldDefinition::count_weight(
                self,
                "Total Quantity",
                CompositeFields {
                    count_field: "totalQuantity",
                    weight_field: "totalGrams",
                    units_field: "totalUnits",
                },
            ),
            RemainingQuantity => FieldDefinition::count_weight(
                self,
                "Remaining Quantity",
                CompositeFields {
                    count_field: "remainingQuantity",
                    weight_field: "remainingGrams",
                    units_field: "remainingUnits",
                },
            ),
        }
    }

    pub fn label(self) -> &'static str {
        self.definition().label
    }

    pub fn filter_type(self) -> UiFilterType {
        self.definition().filter_type
    }

    /// Backing sub-fields, for composite fields only
    pub fn composite_fields(self) -> Option<CompositeFields> {
        self.definition().composite
    }
}

/// Resolve a wire field name
pub fn lookup(name: &str) -> Result<FieldKey, FilterError> {
    FieldKey::from_str(name).map_err(|_| FilterError::UnknownField(name.to_string()))
}

pub fn definitions() -> impl Iterator<Item = FieldDefinition> {
    FieldKey::iter().map(FieldKey::definition)
}

pub fn fields_with_type(filter_type: UiFilterType) -> impl Iterator<Item = FieldKey> {
    FieldKey::iter().filter(move |key| key.filter_type() == filter_type)
}

/// Fields whose options are prefetched from the values endpoint
pub fn option_fields() -> impl Iterator<Item = FieldKey> {
    FieldKey::iter().filter(|key| key.filter_type().is_select())
}
