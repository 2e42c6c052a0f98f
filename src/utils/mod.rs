// Utility module for common functionality
// Author: Gabriel Demetrios Lafis

mod logging;
mod config;
mod error;
mod validation;

pub use logging::*;
pub use config::*;
pub use error::*;
pub use validation::*;
