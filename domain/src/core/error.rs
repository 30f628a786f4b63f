//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// All variants are fatal to the run: they signal either invalid
/// configuration or a data-integrity bug, never a recoverable condition.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("group size must be at least 1, got {0}")]
    InvalidGroupSize(usize),

    #[error("lottery share must be between 1 and 100 percent, got {0}")]
    InvalidLotteryShare(u8),

    #[error("no participants remain after filtering")]
    EmptyRoster,

    #[error(
        "filter consistency check failed: {excluded} excluded + {retained} retained \
         != {eligible} eligible (identity matching bug?)"
    )]
    Consistency {
        eligible: usize,
        excluded: usize,
        retained: usize,
    },
}

impl DomainError {
    /// Check if this error indicates a data-integrity bug (as opposed to
    /// bad configuration)
    pub fn is_integrity_bug(&self) -> bool {
        matches!(self, DomainError::Consistency { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consistency_error_display() {
        let error = DomainError::Consistency {
            eligible: 10,
            excluded: 3,
            retained: 6,
        };
        let msg = error.to_string();
        assert!(msg.contains("3 excluded"));
        assert!(msg.contains("6 retained"));
        assert!(msg.contains("10 eligible"));
    }

    #[test]
    fn test_is_integrity_bug() {
        assert!(
            DomainError::Consistency {
                eligible: 1,
                excluded: 1,
                retained: 1
            }
            .is_integrity_bug()
        );
        assert!(!DomainError::InvalidGroupSize(0).is_integrity_bug());
        assert!(!DomainError::EmptyRoster.is_integrity_bug());
    }
}
