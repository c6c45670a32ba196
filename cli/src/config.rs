//! Request defaults read from the environment (and `.env`).
//!
//! - `SEEDBANK_FACILITY_ID`: facility id sent with every request, unset by default
//! - `SEEDBANK_SEARCH_COUNT`: search page size, default 1000
//! - `SEEDBANK_SORT_FIELD`: default `accessionNumber`
//! - `SEEDBANK_SORT_DIRECTION`: `Ascending` (default) or `Descending`

use seedbank_filters::request::DEFAULT_SEARCH_COUNT;
use seedbank_filters::SearchDirection;
use std::env;

use crate::CliError;

pub const FACILITY_ID_VAR: &str = "SEEDBANK_FACILITY_ID";
pub const SEARCH_COUNT_VAR: &str = "SEEDBANK_SEARCH_COUNT";
pub const SORT_FIELD_VAR: &str = "SEEDBANK_SORT_FIELD";
pub const SORT_DIRECTION_VAR: &str = "SEEDBANK_SORT_DIRECTION";

pub const DEFAULT_SORT_FIELD: &str = "accessionNumber";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub facility_id: Option<i64>,
    pub search_count: u32,
    pub sort_field: String,
    pub sort_direction: SearchDirection,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            facility_id: None,
            search_count: DEFAULT_SEARCH_COUNT,
            sort_field: DEFAULT_SORT_FIELD.to_string(),
            sort_direction: SearchDirection::default(),
        }
    }
}

fn invalid(var: &str, value: &str) -> CliError {
    CliError::InvalidEnvVar {
        name: var.to_string(),
        value: value.to_string(),
    }
}

impl Config {
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from any variable source; blank values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CliError> {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let facility_id = match get(FACILITY_ID_VAR) {
            Some(value) => Some(
                value
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| invalid(FACILITY_ID_VAR, &value))?,
            ),
            None => None,
        };
        let search_count = match get(SEARCH_COUNT_VAR) {
            Some(value) => value
                .trim()
                .parse::<u32>()
                .map_err(|_| invalid(SEARCH_COUNT_VAR, &value))?,
            None => defaults.search_count,
        };
        let sort_direction = match get(SORT_DIRECTION_VAR) {
            Some(value) => value
                .trim()
                .parse::<SearchDirection>()
                .map_err(|_| invalid(SORT_DIRECTION_VAR, &value))?,
            None => defaults.sort_direction,
        };

        Ok(Self {
            facility_id,
            search_count,
            sort_field: get(SORT_FIELD_VAR).unwrap_or(defaults.sort_field),
            sort_direction,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_vars(vars: &[(&str, &str)]) -> Result<Config, CliError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = from_vars(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.search_count, 1000);
        assert_eq!(config.sort_field, "accessionNumber");
        assert_eq!(config.sort_direction, SearchDirection::Ascending);
        assert_eq!(config.facility_id, None);
    }

    #[test]
    fn test_values_from_environment() {
        let config = from_vars(&[
            (FACILITY_ID_VAR, "12"),
            (SEARCH_COUNT_VAR, " 250 "),
            (SORT_FIELD_VAR, "receivedDate"),
            (SORT_DIRECTION_VAR, "descending"),
        ])
        .unwrap();
        assert_eq!(config.facility_id, Some(12));
        assert_eq!(config.search_count, 250);
        assert_eq!(config.sort_field, "receivedDate");
        assert_eq!(config.sort_direction, SearchDirection::Descending);
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config = from_vars(&[(SEARCH_COUNT_VAR, ""), (SORT_FIELD_VAR, "  ")]).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_values_are_reported() {
        let err = from_vars(&[(SEARCH_COUNT_VAR, "lots")]).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains(SEARCH_COUNT_VAR));
        assert!(msg.contains("lots"));

        let err = from_vars(&[(SORT_DIRECTION_VAR, "sideways")]).unwrap_err();
        assert!(matches!(err, CliError::InvalidEnvVar { .. }));

        assert!(from_vars(&[(FACILITY_ID_VAR, "north")]).is_err());
    }
}
