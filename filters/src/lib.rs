//! Search filter construction for the seed bank accession views.
//!
//! UI filter widgets (free-text search, selects, ranges and the composite
//! count/weight filter) are translated into the boolean filter tree the
//! search API understands, and trees are translated back into widget state
//! when a saved filter set is re-opened.
//!
//! ```
//! use seedbank_filters::{FieldKey, FieldState, FilterSet, RangeState, SearchRequest};
//!
//! let filters = FilterSet::new()
//!     .with_state(
//!         FieldKey::AgeMonths,
//!         &FieldState::Range(RangeState::from_inputs("10", "")),
//!     )
//!     .unwrap();
//! let request = SearchRequest::new(vec!["accessionNumber".to_string()], &filters);
//! assert_eq!(request.filters.len(), 1);
//! ```

pub mod catalog;
pub mod codecs;
pub mod errors;
pub mod field_state;
pub mod filter_set;
pub mod node;
pub mod options;
pub mod request;
pub mod units;

pub use catalog::{CompositeFields, FieldDefinition, FieldKey, UiFilterType, SEEDS_UNIT};
pub use codecs::{
    CountWeightCodec, CountWeightEvent, CountWeightState, FilterCodec, RangeCodec, RangeEvent,
    RangeKind, RangeState, SearchCodec, SearchEvent, SearchState, SelectCodec, SelectEvent,
    SelectMode, SelectState,
};
pub use errors::FilterError;
pub use field_state::{decode_field, encode_field, FieldState};
pub use filter_set::{FilterPill, FilterSet};
pub use node::{AndNode, FieldNode, FilterNode, NotNode, OrNode, SearchFilterType};
pub use options::{resolve_options, select_options, SelectOption, ValuesByField};
pub use request::{
    ExportRequest, FieldValues, FieldValuesRequest, FieldValuesResponse, SearchDirection,
    SearchRequest, SortOrder,
};
pub use units::{format_weight, parse_weight, ParsedWeight, WeightUnit};
