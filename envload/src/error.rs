//! Reasons a load falls back to its default

/// Why a loader returned the caller's default instead of an environment value.
///
/// Never returned to callers; it travels inside a
/// [`LoadEvent`](crate::LoadEvent) to the diagnostic sink.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FallbackReason {
    /// Variable is absent, or its value is blank after trimming.
    #[error("environment variable is not set")]
    Unset,

    /// Trimmed value could not be converted to the target type.
    #[error("value '{raw}' is not a valid {type_name}: {message}")]
    Malformed {
        /// Trimmed value as read from the environment
        raw: String,
        /// Type name the conversion targeted
        type_name: String,
        /// Message from the parser
        message: String,
    },

    /// Splitting the value produced no non-empty entries.
    #[error("value split on '{separator}' has no entries")]
    EmptyList {
        /// Separator the value was split on
        separator: String,
    },
}

impl FallbackReason {
    pub(crate) fn malformed<T>(raw: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self::Malformed {
            raw: raw.into(),
            type_name: std::any::type_name::<T>().to_string(),
            message: message.to_string(),
        }
    }

    pub(crate) fn empty_list(separator: impl Into<String>) -> Self {
        Self::EmptyList {
            separator: separator.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_contains_type_info() {
        let reason = FallbackReason::malformed::<i64>("A300", "invalid digit found in string");
        match &reason {
            FallbackReason::Malformed { type_name, raw, .. } => {
                assert_eq!(type_name, "i64");
                assert_eq!(raw, "A300");
            }
            _ => panic!("Expected Malformed reason"),
        }
        assert_eq!(
            reason.to_string(),
            "value 'A300' is not a valid i64: invalid digit found in string"
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            FallbackReason::Unset.to_string(),
            "environment variable is not set"
        );
        assert_eq!(
            FallbackReason::empty_list(",").to_string(),
            "value split on ',' has no entries"
        );
    }
}
