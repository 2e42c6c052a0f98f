// Generator operations for sequence processing
// Author: Gabriel Demetrios Lafis

use crate::data::{Element, PipelineValue};
use crate::utils::validate_length;
use super::{ProcessingError, Processor, Stage, StageKind};

/// Expand a scalar count `n` into the sequence `[0, 1, ..., n - 1]`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Iota;

/// Create an iota stage
pub fn iota() -> Iota {
    Iota
}

macro_rules! iota_for_integers {
    ($($int:ty),*) => {
        $(
            impl Stage<$int> for Iota {
                type Output = Vec<$int>;

                fn apply(self, count: $int) -> Result<Vec<$int>, ProcessingError> {
                    let length = validate_length(StageKind::Iota, count)?;
                    let mut values = Vec::new();
                    values.try_reserve_exact(length).map_err(|err| {
                        ProcessingError::InvalidArgument {
                            stage: StageKind::Iota,
                            message: format!("cannot allocate {} elements: {}", count, err),
                        }
                    })?;
                    values.extend(0..count);
                    Ok(values)
                }
            }

            pipe_operator!(Iota => $int;);
        )*
    };
}

iota_for_integers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Processor for Iota {
    fn process(self: Box<Self>, input: PipelineValue) -> Result<PipelineValue, ProcessingError> {
        let count = input.into_scalar(StageKind::Iota)?;
        <Self as Stage<Element>>::apply(*self, count).map(PipelineValue::Sequence)
    }

    fn stage_kind(&self) -> StageKind {
        StageKind::Iota
    }
}
