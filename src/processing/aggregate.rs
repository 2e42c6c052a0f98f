// Aggregate operations for sequence processing
// Author: Gabriel Demetrios Lafis

use crate::data::{Element, PipelineValue};
use super::{ProcessingError, Processor, Stage, StageKind};

/// Reduce a sequence to a single value, left to right
pub struct Fold<A, G> {
    init: A,
    binary_op: G,
}

/// Create a fold stage starting from `init` and combining with `binary_op`
///
/// The combining function receives the accumulator and each element in
/// order: `acc = binary_op(acc, e)`. An empty sequence folds to `init`.
pub fn fold<A, G>(init: A, binary_op: G) -> Fold<A, G> {
    Fold { init, binary_op }
}

impl<T, A, G> Stage<Vec<T>> for Fold<A, G>
where
    G: FnMut(A, T) -> A,
{
    type Output = A;

    fn apply(self, input: Vec<T>) -> Result<A, ProcessingError> {
        Ok(input.into_iter().fold(self.init, self.binary_op))
    }
}

pipe_operator!(Fold<A, G> => Vec<T>; T, A, G);

impl<G> Processor for Fold<Element, G>
where
    G: FnMut(Element, Element) -> Element,
{
    fn process(self: Box<Self>, input: PipelineValue) -> Result<PipelineValue, ProcessingError> {
        let values = input.into_sequence(StageKind::Fold)?;
        <Self as Stage<Vec<Element>>>::apply(*self, values).map(PipelineValue::Scalar)
    }

    fn stage_kind(&self) -> StageKind {
        StageKind::Fold
    }
}
