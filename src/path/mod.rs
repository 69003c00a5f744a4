//! Path normalization and the two traversal procedures behind the accessor.
//!
//! A path is a list of plain key segments. Reads walk it through nested
//! objects and broadcast the remaining segments across every array met on the
//! way; writes walk it through objects only, creating missing intermediates.
//!
//! # Examples
//!
//! ```
//! // countries.name              - every country name, flattened
//! // countries.cities.extra.code - flattened across two levels of arrays
//! // test.a.b                    - a single nested value
//! ```

pub mod ast;
pub mod error;
pub mod evaluator;
pub mod writer;

pub use ast::{IntoPath, Path};
pub use error::{AccessorError, ErrorKind};
pub use evaluator::Evaluator;
pub use writer::Writer;
