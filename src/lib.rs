//! Pathquill - dotted-path reads and writes into nested JSON/YAML-shaped trees.
//!
//! A tree is built from ordered maps, sequences and scalar leaves (see
//! [`document::node::Value`]). [`NestedAccessor`] addresses values inside it with
//! paths such as `"countries.cities.name"`, flattening across any sequence met
//! along the way and creating intermediate maps on write.
//!
//! # Example
//!
//! ```
//! use pathquill::{NestedAccessor, Value};
//!
//! let mut root: Value = serde_json::json!({
//!     "countries": [
//!         {"name": "Russia", "cities": [{"name": "Moscow"}, {"name": "St. Petersburg"}]},
//!         {"name": "Belarus", "cities": [{"name": "Minsk"}]}
//!     ]
//! })
//! .into();
//!
//! let mut accessor = NestedAccessor::new(&mut root);
//! let names = accessor.get("countries.cities.name").unwrap();
//! assert_eq!(names, Value::from(vec!["Moscow", "St. Petersburg", "Minsk"]));
//!
//! accessor.set("meta.source", "atlas").unwrap();
//! assert_eq!(accessor.get("meta.source").unwrap(), Value::from("atlas"));
//! ```

pub mod accessor;
pub mod config;
pub mod document;
pub mod path;

pub use accessor::{NestedAccessor, Resolved};
pub use config::{AccessorConfig, Mode};
pub use document::node::{Map, Number, Value};
pub use path::{AccessorError, ErrorKind, IntoPath, Path};
