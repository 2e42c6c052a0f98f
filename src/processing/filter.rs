// Filter operations for sequence processing
// Author: Gabriel Demetrios Lafis

use crate::data::{Element, PipelineValue};
use crate::utils::validate_count;
use super::{ProcessingError, Processor, Stage, StageKind};

/// Remove every element matching a predicate
pub struct Filter<P> {
    predicate: P,
}

/// Create a filter stage that removes the elements for which `predicate` is true
///
/// The relative order of the remaining elements is preserved.
pub fn filter<P>(predicate: P) -> Filter<P> {
    Filter { predicate }
}

impl<T, P> Stage<Vec<T>> for Filter<P>
where
    P: FnMut(&T) -> bool,
{
    type Output = Vec<T>;

    fn apply(mut self, mut input: Vec<T>) -> Result<Vec<T>, ProcessingError> {
        input.retain(|e| !(self.predicate)(e));
        Ok(input)
    }
}

pipe_operator!(Filter<P> => Vec<T>; T, P);

impl<P> Processor for Filter<P>
where
    P: FnMut(&Element) -> bool,
{
    fn process(self: Box<Self>, input: PipelineValue) -> Result<PipelineValue, ProcessingError> {
        let values = input.into_sequence(StageKind::Filter)?;
        <Self as Stage<Vec<Element>>>::apply(*self, values).map(PipelineValue::Sequence)
    }

    fn stage_kind(&self) -> StageKind {
        StageKind::Filter
    }
}

/// Keep a number of elements from the front of a sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Take {
    count: usize,
}

/// Create a take stage keeping the first `count` elements
pub fn take(count: usize) -> Take {
    Take { count }
}

impl<T> Stage<Vec<T>> for Take {
    type Output = Vec<T>;

    fn apply(self, mut input: Vec<T>) -> Result<Vec<T>, ProcessingError> {
        validate_count(StageKind::Take, self.count, input.len())?;
        input.truncate(self.count);
        Ok(input)
    }
}

pipe_operator!(Take => Vec<T>; T);

impl Processor for Take {
    fn process(self: Box<Self>, input: PipelineValue) -> Result<PipelineValue, ProcessingError> {
        let values = input.into_sequence(StageKind::Take)?;
        <Self as Stage<Vec<Element>>>::apply(*self, values).map(PipelineValue::Sequence)
    }

    fn stage_kind(&self) -> StageKind {
        StageKind::Take
    }
}

/// Remove a number of elements from the front of a sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Drop {
    count: usize,
}

/// Create a drop stage removing the first `count` elements
pub fn drop(count: usize) -> Drop {
    Drop { count }
}

impl<T> Stage<Vec<T>> for Drop {
    type Output = Vec<T>;

    fn apply(self, mut input: Vec<T>) -> Result<Vec<T>, ProcessingError> {
        validate_count(StageKind::Drop, self.count, input.len())?;
        input.drain(..self.count);
        Ok(input)
    }
}

pipe_operator!(Drop => Vec<T>; T);

impl Processor for Drop {
    fn process(self: Box<Self>, input: PipelineValue) -> Result<PipelineValue, ProcessingError> {
        let values = input.into_sequence(StageKind::Drop)?;
        <Self as Stage<Vec<Element>>>::apply(*self, values).map(PipelineValue::Sequence)
    }

    fn stage_kind(&self) -> StageKind {
        StageKind::Drop
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_removes_matching_elements() {
        let result = vec![1, 2, 3, 4, 5] | filter(|e: &i32| e % 2 != 0);
        assert_eq!(result, Ok(vec![2, 4]));
    }

    #[test]
    fn test_filter_keeps_order() {
        let words = vec!["pipe", "a", "to", "fold", "b"];
        let result = words | filter(|w: &&str| w.len() == 1);
        assert_eq!(result, Ok(vec!["pipe", "to", "fold"]));
    }

    #[test]
    fn test_take_boundaries() {
        assert_eq!(vec![1, 2, 3] | take(0), Ok(vec![]));
        assert_eq!(vec![1, 2, 3] | take(2), Ok(vec![1, 2]));
        assert_eq!(vec![1, 2, 3] | take(3), Ok(vec![1, 2, 3]));
    }

    #[test]
    fn test_take_past_end_is_error() {
        let result = vec![1, 2, 3] | take(4);
        assert_eq!(
            result,
            Err(ProcessingError::OutOfRange {
                stage: StageKind::Take,
                count: 4,
                length: 3,
            })
        );
    }

    #[test]
    fn test_drop_boundaries() {
        assert_eq!(vec![1, 2, 3] | drop(0), Ok(vec![1, 2, 3]));
        assert_eq!(vec![1, 2, 3] | drop(1), Ok(vec![2, 3]));
        assert_eq!(vec![1, 2, 3] | drop(3), Ok(vec![]));
    }

    #[test]
    fn test_drop_past_end_is_error() {
        let result = Vec::<u8>::new() | drop(1);
        assert_eq!(
            result,
            Err(ProcessingError::OutOfRange {
                stage: StageKind::Drop,
                count: 1,
                length: 0,
            })
        );
    }

    #[test]
    fn test_error_short_circuits_chain() {
        let mut calls = 0;
        let result = vec![1, 2] | take(5) | filter(|_: &i32| {
            calls += 1;
            false
        });

        assert!(result.is_err());
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_processor_rejects_scalar() {
        let err = Box::new(take(1)).process(PipelineValue::Scalar(3)).unwrap_err();
        assert_eq!(err.stage(), Some(StageKind::Take));
    }
}
