use super::ast::Path;
use super::error::AccessorError;
use crate::config::DEFAULT_MAX_DEPTH;
use crate::document::node::Value;
use log::trace;

/// The values a read resolved to, borrowed from the tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved<'a> {
    /// The path led to exactly one value without crossing an array.
    Single(&'a Value),
    /// The path crossed at least one array; values in depth-first order.
    Many(Vec<&'a Value>),
    /// Nothing resolved and no array was crossed.
    Missing,
}

impl Resolved<'_> {
    /// Clones the resolved values into an owned tree value.
    ///
    /// `Many` becomes an array and `Missing` becomes `Null`.
    pub fn into_value(self) -> Value {
        match self {
            Resolved::Single(value) => value.clone(),
            Resolved::Many(values) => Value::Array(values.into_iter().cloned().collect()),
            Resolved::Missing => Value::Null,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Resolved::Missing)
    }
}

/// Result of a read before any strictness policy is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<'a> {
    pub resolved: Resolved<'a>,
    /// Number of branches that could not be followed to the end of the path.
    pub errors: usize,
}

/// Shared state of every branch spawned by one read.
struct Collector<'a> {
    holder: Resolved<'a>,
    errors: usize,
}

impl<'a> Collector<'a> {
    fn start_collecting(&mut self) {
        if !matches!(self.holder, Resolved::Many(_)) {
            self.holder = Resolved::Many(Vec::new());
        }
    }

    fn accept(&mut self, value: &'a Value) {
        match &mut self.holder {
            Resolved::Many(values) => values.push(value),
            holder => *holder = Resolved::Single(value),
        }
    }
}

/// Marker for a read that nested past the depth limit.
struct DepthLimitHit;

/// Read resolver over a borrowed tree.
///
/// Walks a path through nested objects. Whenever an array is met while
/// segments remain, the remaining segments are applied to every element and
/// the results are collected into one list. A branch that meets a missing key
/// or a scalar adds one to the error count and contributes nothing, without
/// stopping its siblings.
pub struct Evaluator<'a> {
    root: &'a Value,
    delimiter: &'a str,
    max_depth: usize,
}

impl<'a> Evaluator<'a> {
    pub fn new(root: &'a Value) -> Self {
        Evaluator {
            root,
            delimiter: ".",
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Delimiter used to render the path in errors.
    pub fn with_delimiter(mut self, delimiter: &'a str) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Maximum number of nested array fan-outs a single read may go through.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Resolves `path` against the root.
    ///
    /// An empty path resolves to the root itself. Only an exceeded depth limit
    /// is reported as an error here; missing branches are counted in the
    /// returned [`Outcome`].
    pub fn evaluate(&self, path: &Path) -> Result<Outcome<'a>, AccessorError> {
        let mut collector = Collector {
            holder: Resolved::Missing,
            errors: 0,
        };

        self.resolve(self.root, path.to_stack(), 0, &mut collector)
            .map_err(|DepthLimitHit| AccessorError::DepthLimitExceeded {
                path: path.join(self.delimiter),
                limit: self.max_depth,
            })?;

        Ok(Outcome {
            resolved: collector.holder,
            errors: collector.errors,
        })
    }

    fn resolve(
        &self,
        mut node: &'a Value,
        mut stack: Vec<&str>,
        depth: usize,
        out: &mut Collector<'a>,
    ) -> Result<(), DepthLimitHit> {
        while let Some(&segment) = stack.last() {
            match node {
                Value::Array(items) => {
                    if depth >= self.max_depth {
                        return Err(DepthLimitHit);
                    }
                    out.start_collecting();
                    trace!(
                        "fanning out over {} items with {} segments left",
                        items.len(),
                        stack.len()
                    );
                    for item in items {
                        self.resolve(item, stack.clone(), depth + 1, out)?;
                    }
                    return Ok(());
                }
                Value::Object(map) => {
                    stack.pop();
                    match map.get(segment) {
                        Some(child) => node = child,
                        None => {
                            trace!("key '{}' is missing", segment);
                            out.errors += 1;
                            return Ok(());
                        }
                    }
                }
                scalar => {
                    trace!("cannot descend into {} with key '{}'", scalar.type_name(), segment);
                    out.errors += 1;
                    return Ok(());
                }
            }
        }

        // Path fully consumed: `node` is the target of this branch
        out.accept(node);
        Ok(())
    }
}
