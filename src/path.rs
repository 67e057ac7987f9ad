//! Paths locating a sub-value within the root value being validated.
//!
//! A [`ValuePath`] is an immutable sequence of [`PathSegment`]s. Validators
//! never modify the path they receive; descending into a child produces a new
//! path with one more segment.

use std::fmt::{self, Display};

use serde_json::Value;

/// A single step into a value: an object key or an array/tuple index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// An object key (e.g. `abc`).
    Key(String),
    /// An array or tuple position (e.g. `[0]`).
    Index(usize),
}

impl PathSegment {
    /// Creates a key segment.
    pub fn key(name: impl Into<String>) -> Self {
        PathSegment::Key(name.into())
    }

    /// Creates an index segment.
    pub fn index(idx: usize) -> Self {
        PathSegment::Index(idx)
    }

    /// Renders the segment as a JSON string (keys) or number (indices).
    pub fn to_json(&self) -> Value {
        match self {
            PathSegment::Key(name) => Value::String(name.clone()),
            PathSegment::Index(idx) => Value::from(*idx),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(name: &str) -> Self {
        PathSegment::Key(name.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(name: String) -> Self {
        PathSegment::Key(name)
    }
}

impl From<usize> for PathSegment {
    fn from(idx: usize) -> Self {
        PathSegment::Index(idx)
    }
}

/// The location of a value relative to the root passed to `validate`.
///
/// The root path is empty. Errors reported for the root value itself carry
/// the root path.
///
/// # Example
///
/// ```rust
/// use jointz::ValuePath;
///
/// let path = ValuePath::root()
///     .push_key("users")
///     .push_index(0)
///     .push_key("email");
///
/// assert_eq!(path.to_string(), "users[0].email");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ValuePath {
    segments: Vec<PathSegment>,
}

impl ValuePath {
    /// Creates the empty path of the root value.
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns a new path with a key segment appended.
    pub fn push_key(&self, name: impl Into<String>) -> Self {
        self.push(PathSegment::Key(name.into()))
    }

    /// Returns a new path with an index segment appended.
    pub fn push_index(&self, index: usize) -> Self {
        self.push(PathSegment::Index(index))
    }

    /// Returns a new path with `segment` appended, leaving `self` untouched.
    pub fn push(&self, segment: PathSegment) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.push(segment);
        Self { segments }
    }

    /// Returns true for the root path.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns an iterator over the segments, outermost first.
    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.segments.iter()
    }

    /// Returns the innermost segment, or `None` at the root.
    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }

    /// Renders the path as a JSON array of keys and indices.
    pub fn to_json(&self) -> Value {
        Value::Array(self.segments.iter().map(PathSegment::to_json).collect())
    }
}

impl<S: Into<PathSegment>> FromIterator<S> for ValuePath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl Display for ValuePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Key(name) => {
                    if i > 0 {
                        write!(f, ".")?;
                    }
                    write!(f, "{}", name)?;
                }
                PathSegment::Index(idx) => write!(f, "[{}]", idx)?,
            }
        }
        Ok(())
    }
}
