// Processing module for chaining sequence transformations
// Author: Gabriel Demetrios Lafis

/// Implements `|` for a stage on both a bare input and a `Result` carrying one,
/// so that every step of a chain can be followed by another stage.
macro_rules! pipe_operator {
    ($stage:ty => $input:ty; $($generics:ident),*) => {
        impl<$($generics),*> ::std::ops::BitOr<$stage> for $input
        where
            $stage: $crate::processing::Stage<$input>,
        {
            type Output = Result<
                <$stage as $crate::processing::Stage<$input>>::Output,
                $crate::processing::ProcessingError,
            >;

            fn bitor(self, stage: $stage) -> Self::Output {
                $crate::processing::Stage::apply(stage, self)
            }
        }

        impl<$($generics),*> ::std::ops::BitOr<$stage>
            for Result<$input, $crate::processing::ProcessingError>
        where
            $stage: $crate::processing::Stage<$input>,
        {
            type Output = Result<
                <$stage as $crate::processing::Stage<$input>>::Output,
                $crate::processing::ProcessingError,
            >;

            fn bitor(self, stage: $stage) -> Self::Output {
                self.and_then(|input| $crate::processing::Stage::apply(stage, input))
            }
        }
    };
}

mod aggregate;
mod definition;
mod filter;
mod generate;
mod transform;

pub use aggregate::*;
pub use definition::*;
pub use filter::*;
pub use generate::*;
pub use transform::*;

use std::fmt;

use log::{debug, info};
use thiserror::Error;

use crate::data::{PipelineValue, ValueKind};

/// A single pipeline stage applied to a value of type `In`
///
/// A stage is consumed by `apply`: descriptors are built fresh for each
/// position in a chain and run exactly once. Implementations validate their
/// parameters against the input before touching it.
pub trait Stage<In> {
    /// The value handed to the next stage
    type Output;

    /// Apply the stage to its input
    fn apply(self, input: In) -> Result<Self::Output, ProcessingError>;
}

/// Represents a stage that can run inside a dynamic [`Pipeline`]
pub trait Processor {
    /// Process the current pipeline value and return the next one
    fn process(self: Box<Self>, input: PipelineValue) -> Result<PipelineValue, ProcessingError>;

    /// Get the stage kind
    fn stage_kind(&self) -> StageKind;

    /// Get the processor name
    fn name(&self) -> &str {
        self.stage_kind().as_str()
    }
}

/// Represents the kind of a stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageKind {
    Filter,
    Map,
    Fold,
    Iota,
    Reverse,
    Take,
    Drop,
}

impl StageKind {
    /// Lowercase name of the stage
    pub fn as_str(&self) -> &'static str {
        match self {
            StageKind::Filter => "filter",
            StageKind::Map => "map",
            StageKind::Fold => "fold",
            StageKind::Iota => "iota",
            StageKind::Reverse => "reverse",
            StageKind::Take => "take",
            StageKind::Drop => "drop",
        }
    }
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents an error in the processing module
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProcessingError {
    #[error("{stage}: count {count} is out of range for a sequence of length {length}")]
    OutOfRange {
        stage: StageKind,
        count: usize,
        length: usize,
    },

    #[error("{stage}: invalid argument: {message}")]
    InvalidArgument { stage: StageKind, message: String },

    #[error("{stage}: expected a {expected} input, got a {got}")]
    TypeMismatch {
        stage: StageKind,
        expected: ValueKind,
        got: ValueKind,
    },

    #[error("stage {index} ({name}) failed")]
    StageFailed {
        index: usize,
        name: String,
        #[source]
        source: Box<ProcessingError>,
    },
}

impl ProcessingError {
    /// The kind of the stage that raised this error
    pub fn stage(&self) -> Option<StageKind> {
        match self {
            ProcessingError::OutOfRange { stage, .. }
            | ProcessingError::InvalidArgument { stage, .. }
            | ProcessingError::TypeMismatch { stage, .. } => Some(*stage),
            ProcessingError::StageFailed { source, .. } => source.stage(),
        }
    }
}

/// Pipeline for chaining multiple processors
pub struct Pipeline {
    name: String,
    processors: Vec<Box<dyn Processor>>,
}

impl Pipeline {
    /// Create a new pipeline with the given name
    pub fn new(name: &str) -> Self {
        Pipeline {
            name: name.to_string(),
            processors: Vec::new(),
        }
    }

    /// Add a processor to the pipeline
    pub fn add<P: Processor + 'static>(self, processor: P) -> Self {
        self.add_boxed(Box::new(processor))
    }

    /// Add an already boxed processor to the pipeline
    pub fn add_boxed(mut self, processor: Box<dyn Processor>) -> Self {
        self.processors.push(processor);
        self
    }

    /// Get the pipeline name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of stages
    pub fn len(&self) -> usize {
        self.processors.len()
    }

    /// Check if the pipeline has no stages
    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }

    /// Get the names of the stages in execution order
    pub fn stage_names(&self) -> Vec<&str> {
        self.processors.iter().map(|p| p.name()).collect()
    }

    /// Execute the pipeline, consuming every stage in order
    pub fn execute(self, input: impl Into<PipelineValue>) -> Result<PipelineValue, ProcessingError> {
        let mut current = input.into();

        info!(
            "Running pipeline '{}' with {} stages",
            self.name,
            self.processors.len()
        );

        for (index, processor) in self.processors.into_iter().enumerate() {
            let name = processor.name().to_string();
            debug!("Stage {} ({}) <- {}", index, name, describe(&current));

            current = processor
                .process(current)
                .map_err(|err| ProcessingError::StageFailed {
                    index,
                    name: name.clone(),
                    source: Box::new(err),
                })?;

            debug!("Stage {} ({}) -> {}", index, name, describe(&current));
        }

        info!("Pipeline '{}' finished with {}", self.name, describe(&current));
        Ok(current)
    }
}

fn describe(value: &PipelineValue) -> String {
    match value.len() {
        Some(len) => format!("{} of length {}", value.kind(), len),
        None => format!("{} {}", value.kind(), value),
    }
}
