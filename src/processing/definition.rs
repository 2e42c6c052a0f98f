// Declarative pipeline definitions
// Author: Gabriel Demetrios Lafis

use serde::{Deserialize, Serialize};

use crate::data::{Element, PipelineValue};
use super::{
    drop, filter, fold, iota, map, reverse, take, Pipeline, ProcessingError, Processor, StageKind,
};

/// A named predicate for filter stages
///
/// A filter stage removes the elements for which the predicate holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Predicate {
    Even,
    Odd,
    Positive,
    Negative,
    Zero,
    GreaterThan(Element),
    LessThan(Element),
    Equals(Element),
    DivisibleBy(Element),
}

impl Predicate {
    /// Evaluate the predicate for one element
    pub fn test(&self, e: Element) -> bool {
        match *self {
            Predicate::Even => e % 2 == 0,
            Predicate::Odd => e % 2 != 0,
            Predicate::Positive => e > 0,
            Predicate::Negative => e < 0,
            Predicate::Zero => e == 0,
            Predicate::GreaterThan(k) => e > k,
            Predicate::LessThan(k) => e < k,
            Predicate::Equals(k) => e == k,
            // k == 0 is rejected when the stage is built
            Predicate::DivisibleBy(k) => e.checked_rem(k).map_or(k == -1, |r| r == 0),
        }
    }
}

/// A named element transform for map stages, saturating at the `i64` bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transform {
    Add(Element),
    Multiply(Element),
    Negate,
    Square,
}

impl Transform {
    /// Apply the transform to one element
    pub fn apply(&self, e: Element) -> Element {
        match *self {
            Transform::Add(k) => e.saturating_add(k),
            Transform::Multiply(k) => e.saturating_mul(k),
            Transform::Negate => e.saturating_neg(),
            Transform::Square => e.saturating_mul(e),
        }
    }
}

/// A named combining function for fold stages, saturating at the `i64` bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Combinator {
    Sum,
    Product,
    Min,
    Max,
}

impl Combinator {
    /// Combine the accumulator with the next element
    pub fn combine(&self, acc: Element, e: Element) -> Element {
        match self {
            Combinator::Sum => acc.saturating_add(e),
            Combinator::Product => acc.saturating_mul(e),
            Combinator::Min => acc.min(e),
            Combinator::Max => acc.max(e),
        }
    }
}

/// Parameters of a fold stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoldDefinition {
    pub init: Element,
    pub op: Combinator,
}

/// One stage of a declarative pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageDefinition {
    Filter(Predicate),
    Map(Transform),
    Fold(FoldDefinition),
    Iota,
    Reverse,
    Take(usize),
    Drop(usize),
}

impl StageDefinition {
    /// Get the stage kind
    pub fn kind(&self) -> StageKind {
        match self {
            StageDefinition::Filter(_) => StageKind::Filter,
            StageDefinition::Map(_) => StageKind::Map,
            StageDefinition::Fold(_) => StageKind::Fold,
            StageDefinition::Iota => StageKind::Iota,
            StageDefinition::Reverse => StageKind::Reverse,
            StageDefinition::Take(_) => StageKind::Take,
            StageDefinition::Drop(_) => StageKind::Drop,
        }
    }

    /// Build the processor described by this definition
    pub fn into_processor(self) -> Result<Box<dyn Processor>, ProcessingError> {
        let processor: Box<dyn Processor> = match self {
            StageDefinition::Filter(Predicate::DivisibleBy(0)) => {
                return Err(ProcessingError::InvalidArgument {
                    stage: StageKind::Filter,
                    message: "divisible_by requires a non-zero divisor".to_string(),
                });
            }
            StageDefinition::Filter(predicate) => {
                Box::new(filter(move |e: &Element| predicate.test(*e)))
            }
            StageDefinition::Map(transform) => Box::new(map(move |e: Element| transform.apply(e))),
            StageDefinition::Fold(FoldDefinition { init, op }) => {
                Box::new(fold(init, move |acc: Element, e: Element| op.combine(acc, e)))
            }
            StageDefinition::Iota => Box::new(iota()),
            StageDefinition::Reverse => Box::new(reverse()),
            StageDefinition::Take(count) => Box::new(take(count)),
            StageDefinition::Drop(count) => Box::new(drop(count)),
        };

        Ok(processor)
    }
}

fn default_name() -> String {
    "pipeline".to_string()
}

/// A pipeline described as data: an input sequence and its stages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineDefinition {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub input: Vec<Element>,
    pub stages: Vec<StageDefinition>,
}

impl PipelineDefinition {
    /// Build a pipeline from the stage definitions
    pub fn build(&self) -> Result<Pipeline, ProcessingError> {
        let mut pipeline = Pipeline::new(&self.name);

        for (index, stage) in self.stages.iter().enumerate() {
            let processor = stage
                .into_processor()
                .map_err(|err| ProcessingError::StageFailed {
                    index,
                    name: stage.kind().to_string(),
                    source: Box::new(err),
                })?;
            pipeline = pipeline.add_boxed(processor);
        }

        Ok(pipeline)
    }

    /// Build the pipeline and run it on the defined input
    pub fn run(&self) -> Result<PipelineValue, ProcessingError> {
        self.build()?.execute(self.input.clone())
    }
}
