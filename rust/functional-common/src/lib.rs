//! Core definitions (error type, result alias and required-argument check), relied upon
//! by all functional-* crates.

pub mod error;
pub mod macros;
pub mod result;

pub use error::{Error, ErrorKind};
pub use result::Result;
