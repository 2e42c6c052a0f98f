// Rust Pipe Combinators
// Author: Gabriel Demetrios Lafis

//! # Rust Pipe Combinators
//!
//! Pipe-style (`|`) transformations over in-memory sequences.
//!
//! ## Features
//!
//! - Stages for filtering, mapping, folding, generating, reversing and slicing
//! - Left-to-right chaining with the `|` operator, checked at compile time
//! - Dynamic pipelines over a sequence/scalar value with stage-level errors
//! - Declarative pipelines loaded from JSON or YAML
//!
//! ## Example
//!
//! ```rust
//! use rust_pipe_combinators::processing::{drop, filter, fold, iota, map, reverse, take};
//!
//! let result = vec![1, 2, 3, 4, 5]
//!     | filter(|e: &i64| e % 2 != 0)
//!     | map(|e: i64| e + 1)
//!     | fold(0, |acc: i64, e: i64| acc + e)
//!     | iota()
//!     | reverse()
//!     | drop(4)
//!     | take(2)
//!     | fold(1, |acc: i64, e: i64| acc * e);
//!
//! assert_eq!(result, Ok(6));
//! ```
//!
//! Out-of-range `take`/`drop` counts and negative `iota` counts are reported
//! as errors; every later stage in the chain is skipped.

pub mod data;
pub mod processing;
pub mod utils;

// Re-export main types
pub use data::{PipelineValue, ValueKind};
pub use processing::{Pipeline, PipelineDefinition, ProcessingError, Stage, StageKind};
pub use utils::Config;
