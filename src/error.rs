//! Error types for subnet arithmetic, requirement parsing and export.

use thiserror::Error;

/// Errors reported by address, mask and network construction and by the exporters.
///
/// Planning failures are not errors, see [`crate::processing::PlanResult::Failure`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubnetError {
    #[error("Invalid {kind} '{input}': {reason}")]
    Parse {
        kind: &'static str,
        input: String,
        reason: String,
    },

    #[error("Invalid mask {0:#010x}: one bits are not contiguous")]
    InvalidMask(u32),

    #[error("Prefix length /{0} is out of range (0-32)")]
    PrefixOutOfRange(u32),

    #[error("Subdivision count must be positive, got {0}")]
    InvalidSubdivisionCount(u32),

    #[error("Cannot subdivide /{prefix} into {count} subnets: new prefix /{new_prefix} exceeds /32")]
    SubdivisionTooDeep {
        prefix: u8,
        count: u32,
        new_prefix: u32,
    },

    #[error("Export failed: {0}")]
    Export(String),
}

impl SubnetError {
    pub(crate) fn parse(kind: &'static str, input: &str, reason: impl Into<String>) -> Self {
        SubnetError::Parse {
            kind,
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for SubnetError {
    fn from(e: serde_json::Error) -> Self {
        SubnetError::Export(format!("JSON serialization error: {e}"))
    }
}

impl From<std::io::Error> for SubnetError {
    fn from(e: std::io::Error) -> Self {
        SubnetError::Export(format!("I/O error: {e}"))
    }
}

pub type Result<T> = std::result::Result<T, SubnetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_message() {
        let error = SubnetError::parse("address", "10.0.0", "expected 4 octets");
        assert_eq!(
            error.to_string(),
            "Invalid address '10.0.0': expected 4 octets"
        );
    }

    #[test]
    fn test_invalid_mask_message() {
        let error = SubnetError::InvalidMask(0xFFFF00FF);
        assert_eq!(
            error.to_string(),
            "Invalid mask 0xffff00ff: one bits are not contiguous"
        );
    }

    #[test]
    fn test_subdivision_too_deep_message() {
        let error = SubnetError::SubdivisionTooDeep {
            prefix: 30,
            count: 8,
            new_prefix: 33,
        };
        assert_eq!(
            error.to_string(),
            "Cannot subdivide /30 into 8 subnets: new prefix /33 exceeds /32"
        );
    }

    #[test]
    fn test_io_error_converts_to_export() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let error: SubnetError = io.into();
        assert!(matches!(error, SubnetError::Export(_)));
    }
}
