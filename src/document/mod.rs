//! In-memory tree representation and interop with serde-based parsers.

pub mod convert;
pub mod node;
