//! Tree node representation.
//!
//! This module provides the core data structure walked by the accessor. A tree
//! is a closed set of node kinds: ordered maps, sequences, and scalar leaves.
//! Maps preserve insertion order, which keeps flattened results and rewritten
//! trees in the order the caller built them.
//!
//! # Example
//!
//! ```
//! use pathquill::document::node::{Map, Number, Value};
//!
//! // Create a simple string node
//! let name = Value::from("pathquill");
//! assert_eq!(name.as_str(), Some("pathquill"));
//!
//! // Create a nested structure
//! let mut map = Map::new();
//! map.insert("name".to_string(), name);
//! map.insert("version".to_string(), Value::Number(Number::Integer(1)));
//! let mut object = Value::Object(map);
//!
//! // Modify a value in place
//! if let Some(fields) = object.as_object_mut() {
//!     fields.insert("key".to_string(), Value::Null);
//! }
//! assert_eq!(object.as_object().map(|m| m.len()), Some(3));
//! ```

use indexmap::IndexMap;

/// An ordered, string-keyed map of child nodes.
pub type Map = IndexMap<String, Value>;

/// Represents numbers (integer or float)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => write!(f, "{}", fl),
        }
    }
}

impl Number {
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }
}

/// A node of the tree.
///
/// `Object` and `Array` are the two container kinds; everything else is a leaf.
/// Path segments only ever descend into `Object`s, while `Array`s are broadcast
/// across during reads.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// An ordered map of string keys to child nodes
    Object(Map),
    /// An ordered sequence of child nodes
    Array(Vec<Value>),
    /// A string leaf
    String(String),
    /// A number leaf (integer or float)
    Number(Number),
    /// A boolean leaf
    Boolean(bool),
    /// A null leaf
    #[default]
    Null,
}

impl Value {
    /// Returns true if this value is an object.
    ///
    /// # Example
    ///
    /// ```
    /// use pathquill::document::node::{Map, Value};
    ///
    /// assert!(Value::Object(Map::new()).is_object());
    /// assert!(!Value::from(42).is_object());
    /// ```
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns true if this value is an array.
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns true if this value is a container (object or array).
    ///
    /// # Example
    ///
    /// ```
    /// use pathquill::document::node::{Map, Value};
    ///
    /// assert!(Value::Object(Map::new()).is_container());
    /// assert!(Value::Array(vec![]).is_container());
    /// assert!(!Value::Null.is_container());
    /// ```
    pub fn is_container(&self) -> bool {
        matches!(self, Value::Object(_) | Value::Array(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Short lowercase name of the node kind, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Object(_) => "object",
            Value::Array(_) => "array",
            Value::String(_) => "string",
            Value::Number(_) => "number",
            Value::Boolean(_) => "boolean",
            Value::Null => "null",
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Number(Number::Integer(i))
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Number(Number::Integer(i64::from(i)))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Number(Number::Float(f))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Object(map)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}
