//! Path types and input normalization.

/// A path made of plain key segments.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Path {
    /// Segments in traversal order.
    pub segments: Vec<String>,
}

impl Path {
    /// Creates a path from already split segments.
    pub fn new(segments: Vec<String>) -> Self {
        Self { segments }
    }

    /// Splits `input` on `delimiter`.
    ///
    /// Splitting is literal: empty segments are kept, so `"a..b"` has three
    /// segments and `""` has one empty segment.
    ///
    /// # Example
    ///
    /// ```
    /// use pathquill::path::Path;
    ///
    /// let path = Path::parse("a.b.c", ".");
    /// assert_eq!(path.segments, vec!["a", "b", "c"]);
    ///
    /// let path = Path::parse("a/b", "/");
    /// assert_eq!(path.len(), 2);
    /// ```
    pub fn parse(input: &str, delimiter: &str) -> Self {
        Self::new(input.split(delimiter).map(str::to_string).collect())
    }

    /// Joins segments back together with `delimiter`.
    pub fn join(&self, delimiter: &str) -> String {
        self.segments.join(delimiter)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segments in reverse order, so the next segment is popped from the end.
    pub(crate) fn to_stack(&self) -> Vec<&str> {
        self.segments.iter().rev().map(String::as_str).collect()
    }
}

/// Conversion of caller input into a [`Path`].
///
/// `None` is the absent path. Strings are split on the accessor's delimiter,
/// except the empty string which yields a path with no segments. Sequences of
/// strings are taken as already split.
pub trait IntoPath {
    fn into_path(self, delimiter: &str) -> Option<Path>;
}

fn split_input(input: &str, delimiter: &str) -> Path {
    if input.is_empty() {
        Path::default()
    } else {
        Path::parse(input, delimiter)
    }
}

impl IntoPath for &str {
    fn into_path(self, delimiter: &str) -> Option<Path> {
        Some(split_input(self, delimiter))
    }
}

impl IntoPath for String {
    fn into_path(self, delimiter: &str) -> Option<Path> {
        Some(split_input(&self, delimiter))
    }
}

impl IntoPath for &String {
    fn into_path(self, delimiter: &str) -> Option<Path> {
        Some(split_input(self, delimiter))
    }
}

impl IntoPath for Path {
    fn into_path(self, _delimiter: &str) -> Option<Path> {
        Some(self)
    }
}

impl IntoPath for &Path {
    fn into_path(self, _delimiter: &str) -> Option<Path> {
        Some(self.clone())
    }
}

impl<S: AsRef<str>> IntoPath for &[S] {
    fn into_path(self, _delimiter: &str) -> Option<Path> {
        Some(Path::new(
            self.iter().map(|s| s.as_ref().to_string()).collect(),
        ))
    }
}

impl<S: AsRef<str>, const N: usize> IntoPath for [S; N] {
    fn into_path(self, delimiter: &str) -> Option<Path> {
        self.as_slice().into_path(delimiter)
    }
}

impl<S: AsRef<str>, const N: usize> IntoPath for &[S; N] {
    fn into_path(self, delimiter: &str) -> Option<Path> {
        self.as_slice().into_path(delimiter)
    }
}

impl<S: AsRef<str>> IntoPath for Vec<S> {
    fn into_path(self, delimiter: &str) -> Option<Path> {
        self.as_slice().into_path(delimiter)
    }
}

impl<S: AsRef<str>> IntoPath for &Vec<S> {
    fn into_path(self, delimiter: &str) -> Option<Path> {
        self.as_slice().into_path(delimiter)
    }
}

impl<P: IntoPath> IntoPath for Option<P> {
    fn into_path(self, delimiter: &str) -> Option<Path> {
        self.and_then(|p| p.into_path(delimiter))
    }
}
