// Data module for values flowing through a pipeline
// Author: Gabriel Demetrios Lafis

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::processing::{ProcessingError, StageKind};

/// Element type carried by the dynamic pipeline
pub type Element = i64;

/// Represents the working value of a pipeline between two stages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PipelineValue {
    Sequence(Vec<Element>),
    Scalar(Element),
}

/// Represents the shape of a pipeline value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Sequence,
    Scalar,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ValueKind::Sequence => write!(f, "sequence"),
            ValueKind::Scalar => write!(f, "scalar"),
        }
    }
}

impl PipelineValue {
    /// Get the kind of this value
    pub fn kind(&self) -> ValueKind {
        match self {
            PipelineValue::Sequence(_) => ValueKind::Sequence,
            PipelineValue::Scalar(_) => ValueKind::Scalar,
        }
    }

    /// Number of elements, or `None` for a scalar
    pub fn len(&self) -> Option<usize> {
        match self {
            PipelineValue::Sequence(values) => Some(values.len()),
            PipelineValue::Scalar(_) => None,
        }
    }

    /// Check if this value is an empty sequence
    pub fn is_empty(&self) -> bool {
        matches!(self, PipelineValue::Sequence(values) if values.is_empty())
    }

    /// Unwrap a sequence, failing on behalf of `stage` if this is a scalar
    pub fn into_sequence(self, stage: StageKind) -> Result<Vec<Element>, ProcessingError> {
        match self {
            PipelineValue::Sequence(values) => Ok(values),
            PipelineValue::Scalar(_) => Err(ProcessingError::TypeMismatch {
                stage,
                expected: ValueKind::Sequence,
                got: ValueKind::Scalar,
            }),
        }
    }

    /// Unwrap a scalar, failing on behalf of `stage` if this is a sequence
    pub fn into_scalar(self, stage: StageKind) -> Result<Element, ProcessingError> {
        match self {
            PipelineValue::Scalar(value) => Ok(value),
            PipelineValue::Sequence(_) => Err(ProcessingError::TypeMismatch {
                stage,
                expected: ValueKind::Scalar,
                got: ValueKind::Sequence,
            }),
        }
    }
}

impl From<Vec<Element>> for PipelineValue {
    fn from(values: Vec<Element>) -> Self {
        PipelineValue::Sequence(values)
    }
}

impl From<Element> for PipelineValue {
    fn from(value: Element) -> Self {
        PipelineValue::Scalar(value)
    }
}

impl fmt::Display for PipelineValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PipelineValue::Scalar(value) => write!(f, "{}", value),
            PipelineValue::Sequence(values) => {
                write!(f, "[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", value)?;
                }
                write!(f, "]")
            }
        }
    }
}
