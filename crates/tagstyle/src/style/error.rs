//! Style validation errors.

/// Error returned when tag style validation fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleValidationError {
    /// An alias references a tag that isn't registered.
    #[error("tag '{from}' aliases unregistered tag '{to}'")]
    UnresolvedAlias { from: String, to: String },
    /// A cycle was detected in alias resolution.
    #[error("cycle detected in tag aliases: {}", .path.join(" -> "))]
    CycleDetected { path: Vec<String> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolved_alias_error_display() {
        let err = StyleValidationError::UnresolvedAlias {
            from: "warning".to_string(),
            to: "missing".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "tag 'warning' aliases unregistered tag 'missing'"
        );
    }

    #[test]
    fn test_cycle_detected_error_display() {
        let err = StyleValidationError::CycleDetected {
            path: vec!["a".to_string(), "b".to_string(), "a".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "cycle detected in tag aliases: a -> b -> a"
        );
    }
}
