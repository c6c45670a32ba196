//! Per-widget filter codecs.
//!
//! Each codec translates one widget's UI state into an optional
//! [`FilterNode`] and back. `None` from `encode` means "leave the field out
//! of the filter set". Decoding tolerates any tree: unrecognized parts
//! decode as unset rather than failing.
//!
//! Reducers keep inputs as typed, so a text box can hold `"ac "` while the
//! user is still typing. `FilterCodec::normalize` gives the form that
//! survives a trip through the wire.

mod count_weight;
mod range;
mod search;
mod select;

pub use count_weight::{CountWeightCodec, CountWeightEvent, CountWeightState};
pub use range::{RangeCodec, RangeEvent, RangeKind, RangeState};
pub use search::{SearchCodec, SearchEvent, SearchState};
pub use select::{SelectCodec, SelectEvent, SelectMode, SelectState, BOOLEAN_FALSE};

use crate::node::FilterNode;

pub trait FilterCodec {
    type State: Clone + Default + PartialEq + std::fmt::Debug;
    type Event;

    fn encode(&self, state: &Self::State) -> Option<FilterNode>;

    fn decode(&self, node: Option<&FilterNode>) -> Self::State;

    /// The state as the backend will hand it back: inputs in wire form and
    /// anything encode drops left out. `decode(encode(s)) == normalize(s)`
    /// for every state, and normalized states are fixed points.
    fn normalize(&self, state: &Self::State) -> Self::State;

    /// Next UI state after `event`. Never mutates `state`.
    fn reduce(&self, state: &Self::State, event: Self::Event) -> Self::State;

    /// Reduce and re-encode in one step
    fn apply(&self, state: &Self::State, event: Self::Event) -> (Self::State, Option<FilterNode>) {
        let next = self.reduce(state, event);
        let node = self.encode(&next);
        (next, node)
    }
}

/// Text input as held in UI state: trimmed, with blank meaning unset
pub(crate) fn normalize_input(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Numeric bound ready for the wire, or `None` when blank or not a number.
/// The number is re-printed in plain decimal form, so `"1e3"`, `"+5"` and
/// `".5"` go out as `"1000"`, `"5"` and `"0.5"`.
pub(crate) fn numeric_bound(input: Option<&str>) -> Option<String> {
    let value = normalize_input(input?)?;
    match value.parse::<f64>() {
        // `+ 0.0` turns -0 into 0
        Ok(n) if n.is_finite() => Some((n + 0.0).to_string()),
        _ => {
            tracing::debug!("Dropping non-numeric filter bound {:?}", value);
            None
        }
    }
}
