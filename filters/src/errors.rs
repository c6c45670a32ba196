use crate::catalog::UiFilterType;

/// Errors raised at the boundary of the filter layer.
///
/// Codec encode/decode is total and never produces one of these; they only
/// come out of wire parsing, field-key resolution and state dispatch.
#[derive(Debug)]
pub enum FilterError {
    UnknownField(String),
    KindMismatch {
        field: String,
        expected: UiFilterType,
    },
    SerdeJsonError(serde_json::Error),
}

impl From<serde_json::Error> for FilterError {
    fn from(err: serde_json::Error) -> Self {
        FilterError::SerdeJsonError(err)
    }
}

impl std::fmt::Display for FilterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterError::UnknownField(field) => write!(f, "Unknown filter field: {}", field),
            FilterError::KindMismatch { field, expected } => {
                write!(
                    f,
                    "Filter state does not match field {}: expected a {} state",
                    field, expected
                )
            }
            FilterError::SerdeJsonError(err) => write!(f, "Serde JSON error: {}", err),
        }
    }
}

impl std::error::Error for FilterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FilterError::SerdeJsonError(err) => Some(err),
            _ => None,
        }
    }
}
