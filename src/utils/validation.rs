// Validation utilities
// Author: Gabriel Demetrios Lafis

use std::fmt;

use crate::processing::{ProcessingError, StageKind};

/// Validate that a stage count fits within a sequence of `length` elements
pub fn validate_count(stage: StageKind, count: usize, length: usize) -> Result<(), ProcessingError> {
    if count > length {
        Err(ProcessingError::OutOfRange {
            stage,
            count,
            length,
        })
    } else {
        Ok(())
    }
}

/// Validate that a scalar can be used as the length of a new sequence
pub fn validate_length<N>(stage: StageKind, count: N) -> Result<usize, ProcessingError>
where
    N: TryInto<usize> + Copy + fmt::Display,
{
    count.try_into().map_err(|_| ProcessingError::InvalidArgument {
        stage,
        message: format!("count must be a non-negative length, got {}", count),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_count() {
        assert!(validate_count(StageKind::Take, 0, 0).is_ok());
        assert!(validate_count(StageKind::Take, 3, 3).is_ok());
        assert!(validate_count(StageKind::Drop, 4, 3).is_err());
    }

    #[test]
    fn test_validate_length() {
        assert_eq!(validate_length(StageKind::Iota, 8i64), Ok(8));
        assert_eq!(validate_length(StageKind::Iota, 0u8), Ok(0));

        let err = validate_length(StageKind::Iota, -1i32).unwrap_err();
        assert_eq!(
            err.to_string(),
            "iota: invalid argument: count must be a non-negative length, got -1"
        );
    }
}
