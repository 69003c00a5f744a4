use super::ast::Path;
use super::error::AccessorError;
use crate::config::Mode;
use crate::document::node::{Map, Value};
use log::debug;

/// Write walker over a mutably borrowed tree.
///
/// Writes never broadcast across arrays: every intermediate segment must name
/// an object. In lenient mode anything else at that key (missing, scalar,
/// null or array) is replaced by an empty object; in strict mode the write is
/// refused before the tree is touched at that level.
pub struct Writer<'a> {
    root: &'a mut Value,
    delimiter: &'a str,
}

impl<'a> Writer<'a> {
    pub fn new(root: &'a mut Value, delimiter: &'a str) -> Self {
        Writer { root, delimiter }
    }

    /// Assigns `value` at `path`, creating intermediate objects as `mode`
    /// allows.
    ///
    /// A path with no segments addresses the key `""` of the root object, not
    /// the root itself.
    pub fn write(self, path: &Path, value: Value, mode: Mode) -> Result<(), AccessorError> {
        let empty_key = [String::new()];
        let segments: &[String] = if path.is_empty() {
            &empty_key
        } else {
            &path.segments
        };
        let conflict = || AccessorError::CannotSetValue {
            path: path.join(self.delimiter),
        };

        let Some((last, intermediates)) = segments.split_last() else {
            unreachable!("a write always has at least one segment");
        };

        if !self.root.is_object() {
            if mode.is_strict() {
                debug!("refusing to replace {} root", self.root.type_name());
                return Err(conflict());
            }
            debug!("replacing {} root with an empty object", self.root.type_name());
            *self.root = Value::Object(Map::new());
        }
        let Value::Object(root_map) = self.root else {
            unreachable!("root was made an object above");
        };
        let mut current: &mut Map = root_map;

        for segment in intermediates {
            let needs_object = !matches!(current.get(segment.as_str()), Some(Value::Object(_)));
            if needs_object {
                if mode.is_strict() {
                    debug!(
                        "refusing to overwrite key '{}' while setting '{}'",
                        segment,
                        path.join(self.delimiter)
                    );
                    return Err(conflict());
                }
                // Destructive: whatever was stored at this key is dropped
                if let Some(previous) = current.get(segment.as_str()) {
                    debug!(
                        "overwriting {} at key '{}' with an empty object",
                        previous.type_name(),
                        segment
                    );
                }
                current.insert(segment.clone(), Value::Object(Map::new()));
            }

            let Some(Value::Object(next)) = current.get_mut(segment.as_str()) else {
                unreachable!("key '{}' was made an object above", segment);
            };
            current = next;
        }

        current.insert(last.clone(), value);
        Ok(())
    }
}
