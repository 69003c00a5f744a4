//! Path-based access into a borrowed tree.
//!
//! This module provides [`NestedAccessor`], the public entry point of the crate.
//! It wraps a mutable borrow of a root value together with a path delimiter and
//! forwards reads to [`Evaluator`] and writes to [`Writer`].
//!
//! # Example
//!
//! ```
//! use pathquill::{AccessorError, Mode, NestedAccessor, Value};
//!
//! let mut root: Value = serde_json::json!({
//!     "a": [{"b": 1}, {"c": 2}, {"b": 3}]
//! })
//! .into();
//! let accessor = NestedAccessor::new(&mut root);
//!
//! // Lenient reads keep whatever resolved
//! assert_eq!(accessor.get_with("a.b", Mode::Lenient).unwrap(), Value::from(vec![1, 3]));
//!
//! // Strict reads report how many branches failed
//! let err = accessor.get("a.b").unwrap_err();
//! assert_eq!(err, AccessorError::CannotGetValue { path: "a.b".to_string(), count: 1 });
//! ```

use crate::config::{AccessorConfig, Mode};
use crate::document::node::{Map, Value};
use crate::path::ast::IntoPath;
use crate::path::error::AccessorError;
use crate::path::evaluator::Evaluator;
use crate::path::writer::Writer;
use log::debug;

pub use crate::path::evaluator::Resolved;

/// Reads and writes values in a tree by delimited path.
///
/// The accessor borrows the root for its whole lifetime and never copies it:
/// once it is dropped, the caller sees every write made through it.
#[derive(Debug)]
pub struct NestedAccessor<'a> {
    source: &'a mut Value,
    delimiter: String,
    max_depth: usize,
    read_mode: Mode,
    write_mode: Mode,
}

impl<'a> NestedAccessor<'a> {
    /// Creates an accessor with the default configuration (delimiter `"."`,
    /// strict reads, lenient writes).
    ///
    /// A `Null` root is replaced in place by an empty object.
    ///
    /// # Example
    ///
    /// ```
    /// use pathquill::{NestedAccessor, Value};
    ///
    /// let mut root = Value::Null;
    /// let mut accessor = NestedAccessor::new(&mut root);
    /// accessor.set("test.a.a", 1).unwrap();
    /// drop(accessor);
    ///
    /// assert_eq!(root, Value::from(serde_json::json!({"test": {"a": {"a": 1}}})));
    /// ```
    pub fn new(source: &'a mut Value) -> Self {
        Self::from_valid_config(source, &AccessorConfig::default())
    }

    /// Creates an accessor splitting string paths on `delimiter`.
    ///
    /// Fails with [`AccessorError::InvalidConfig`] when `delimiter` is empty.
    pub fn with_delimiter(
        source: &'a mut Value,
        delimiter: impl Into<String>,
    ) -> Result<Self, AccessorError> {
        let config = AccessorConfig {
            delimiter: delimiter.into(),
            ..AccessorConfig::default()
        };
        Self::with_config(source, &config)
    }

    /// Creates an accessor from `config`, rejecting it as
    /// [`AccessorConfig::validate`] does. The root is left untouched on error.
    pub fn with_config(source: &'a mut Value, config: &AccessorConfig) -> Result<Self, AccessorError> {
        if let Err(err) = config.validate() {
            debug!("rejecting accessor config: {}", err);
            return Err(err);
        }
        Ok(Self::from_valid_config(source, config))
    }

    fn from_valid_config(source: &'a mut Value, config: &AccessorConfig) -> Self {
        if source.is_null() {
            *source = Value::Object(Map::new());
        }

        Self {
            source,
            delimiter: config.delimiter.clone(),
            max_depth: config.max_depth,
            read_mode: config.read_mode,
            write_mode: config.write_mode,
        }
    }

    /// Returns the wrapped root.
    pub fn root(&self) -> &Value {
        &*self.source
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Reads the value at `path` using the configured read mode.
    ///
    /// See [`lookup`](Self::lookup) for the resolution rules.
    pub fn get<P: IntoPath>(&self, path: P) -> Result<Value, AccessorError> {
        self.get_with(path, self.read_mode)
    }

    /// Reads the value at `path` with an explicit mode, cloning the result.
    pub fn get_with<P: IntoPath>(&self, path: P, mode: Mode) -> Result<Value, AccessorError> {
        self.lookup(path, mode).map(Resolved::into_value)
    }

    /// Resolves `path` without cloning.
    ///
    /// - An absent path, the empty string or a path with no segments resolves
    ///   to the root.
    /// - Every array met while segments remain is broadcast over; the result
    ///   is then [`Resolved::Many`] in depth-first order.
    /// - A missing key or a scalar in the way fails that branch only.
    ///
    /// In [`Mode::Strict`] any failed branch turns into
    /// [`AccessorError::CannotGetValue`] carrying the number of failures. In
    /// [`Mode::Lenient`] the result holds whatever did resolve, or
    /// [`Resolved::Missing`] when nothing did.
    pub fn lookup<P: IntoPath>(&self, path: P, mode: Mode) -> Result<Resolved<'_>, AccessorError> {
        let path = match path.into_path(&self.delimiter) {
            Some(path) if !path.is_empty() => path,
            _ => return Ok(Resolved::Single(&*self.source)),
        };

        let outcome = Evaluator::new(&*self.source)
            .with_delimiter(&self.delimiter)
            .with_max_depth(self.max_depth)
            .evaluate(&path)?;

        if mode.is_strict() && outcome.errors > 0 {
            let joined = path.join(&self.delimiter);
            debug!("strict read of '{}' failed on {} branch(es)", joined, outcome.errors);
            return Err(AccessorError::CannotGetValue {
                path: joined,
                count: outcome.errors,
            });
        }

        Ok(outcome.resolved)
    }

    /// Writes `value` at `path` using the configured write mode.
    ///
    /// See [`set_with`](Self::set_with).
    pub fn set<P: IntoPath, V: Into<Value>>(&mut self, path: P, value: V) -> Result<(), AccessorError> {
        self.set_with(path, value, self.write_mode)
    }

    /// Writes `value` at `path` with an explicit mode.
    ///
    /// The last segment is assigned in its parent object, creating or
    /// overwriting the key. Every earlier segment must name an object:
    ///
    /// - [`Mode::Strict`] fails with [`AccessorError::CannotSetValue`] when it
    ///   doesn't;
    /// - [`Mode::Lenient`] replaces whatever is there (including arrays) with
    ///   an empty object and keeps going. The previous value is lost.
    ///
    /// Writes never broadcast across arrays.
    ///
    /// An absent or empty path does not replace the root: it assigns to the
    /// key `""` of the root object.
    ///
    /// # Example
    ///
    /// ```
    /// use pathquill::{Mode, NestedAccessor, Value};
    ///
    /// let mut root: Value = serde_json::json!({"a": 1}).into();
    /// let mut accessor = NestedAccessor::new(&mut root);
    ///
    /// assert!(accessor.set_with("a.b", 2, Mode::Strict).is_err());
    /// accessor.set_with("a.b", 2, Mode::Lenient).unwrap();
    /// assert_eq!(accessor.get("a").unwrap(), Value::from(serde_json::json!({"b": 2})));
    /// ```
    pub fn set_with<P: IntoPath, V: Into<Value>>(
        &mut self,
        path: P,
        value: V,
        mode: Mode,
    ) -> Result<(), AccessorError> {
        let path = path.into_path(&self.delimiter).unwrap_or_default();
        Writer::new(&mut *self.source, &self.delimiter).write(&path, value.into(), mode)
    }
}
