//! Weight units and the `"<number> <unit>"` wire encoding.
//!
//! Weight bounds travel with the unit embedded in the value string, e.g.
//! `"10 Grams"`. `format_weight` and `parse_weight` are the only places
//! that know this format.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use ts_rs::TS;

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    TS,
)]
#[ts(export)]
pub enum WeightUnit {
    #[default]
    Grams,
    Milligrams,
    Kilograms,
    Ounces,
    Pounds,
}

/// A weight bound split back into its amount and unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedWeight {
    pub amount: String,
    /// `None` when the value carried no unit token or an unrecognized one
    pub unit: Option<WeightUnit>,
}

pub fn format_weight(amount: &str, unit: WeightUnit) -> String {
    format!("{} {}", amount, unit)
}

/// Split on the first space. Everything after it is taken as the unit token.
pub fn parse_weight(value: &str) -> ParsedWeight {
    match value.split_once(' ') {
        Some((amount, unit)) => ParsedWeight {
            amount: amount.to_string(),
            unit: unit.parse().ok(),
        },
        None => ParsedWeight {
            amount: value.to_string(),
            unit: None,
        },
    }
}
