// Transform operations for sequence processing
// Author: Gabriel Demetrios Lafis

use crate::data::{Element, PipelineValue};
use super::{ProcessingError, Processor, Stage, StageKind};

/// Replace every element with the result of a function
pub struct Map<F> {
    unary_op: F,
}

/// Create a map stage applying `unary_op` to every element
pub fn map<F>(unary_op: F) -> Map<F> {
    Map { unary_op }
}

impl<T, F> Stage<Vec<T>> for Map<F>
where
    F: FnMut(T) -> T,
{
    type Output = Vec<T>;

    fn apply(self, input: Vec<T>) -> Result<Vec<T>, ProcessingError> {
        // Same element type, so the allocation is reused
        Ok(input.into_iter().map(self.unary_op).collect())
    }
}

pipe_operator!(Map<F> => Vec<T>; T, F);

impl<F> Processor for Map<F>
where
    F: FnMut(Element) -> Element,
{
    fn process(self: Box<Self>, input: PipelineValue) -> Result<PipelineValue, ProcessingError> {
        let values = input.into_sequence(StageKind::Map)?;
        <Self as Stage<Vec<Element>>>::apply(*self, values).map(PipelineValue::Sequence)
    }

    fn stage_kind(&self) -> StageKind {
        StageKind::Map
    }
}

/// Reverse the order of a sequence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reverse;

/// Create a reverse stage
pub fn reverse() -> Reverse {
    Reverse
}

impl<T> Stage<Vec<T>> for Reverse {
    type Output = Vec<T>;

    fn apply(self, mut input: Vec<T>) -> Result<Vec<T>, ProcessingError> {
        input.reverse();
        Ok(input)
    }
}

pipe_operator!(Reverse => Vec<T>; T);

impl Processor for Reverse {
    fn process(self: Box<Self>, input: PipelineValue) -> Result<PipelineValue, ProcessingError> {
        let values = input.into_sequence(StageKind::Reverse)?;
        <Self as Stage<Vec<Element>>>::apply(*self, values).map(PipelineValue::Sequence)
    }

    fn stage_kind(&self) -> StageKind {
        StageKind::Reverse
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_increment() {
        let result = vec![2, 4] | map(|e: i64| e + 1);
        assert_eq!(result, Ok(vec![3, 5]));
    }

    #[test]
    fn test_map_owned_elements() {
        let names = vec!["ada".to_string(), "alan".to_string()];
        let result = names | map(|s: String| s.to_uppercase());
        assert_eq!(result, Ok(vec!["ADA".to_string(), "ALAN".to_string()]));
    }

    #[test]
    fn test_map_empty() {
        let result = Vec::<i64>::new() | map(|e: i64| e * 10);
        assert_eq!(result, Ok(vec![]));
    }

    #[test]
    fn test_reverse() {
        assert_eq!(vec![0, 1, 2, 3] | reverse(), Ok(vec![3, 2, 1, 0]));
        assert_eq!(Vec::<i32>::new() | reverse(), Ok(vec![]));
    }

    #[test]
    fn test_reverse_is_involution() {
        let original = vec![5, 1, 4, 2];
        assert_eq!(original.clone() | reverse() | reverse(), Ok(original));
    }

    #[test]
    fn test_map_processor() {
        let value = Box::new(map(|e: i64| e * e))
            .process(PipelineValue::Sequence(vec![1, 2, 3]))
            .unwrap();
        assert_eq!(value, PipelineValue::Sequence(vec![1, 4, 9]));
    }
}
