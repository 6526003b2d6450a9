use std::fmt;

/// A single step from a node to one of its children.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Mapping entry by (scalar) key
    ///
    /// # Examples
    /// - `.name` → `Key("name")`
    /// - `.user.email` → `[Key("user"), Key("email")]`
    Key(String),

    /// Sequence element by position
    ///
    /// # Examples
    /// - `.items[0]` → `[Key("items"), Index(0)]`
    Index(usize),
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_string())
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => write!(f, ".{}", key),
            PathSegment::Index(index) => write!(f, "[{}]", index),
        }
    }
}

/// Location of a node relative to its document root.
///
/// The empty path is the root itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Path(Vec<PathSegment>);

impl Path {
    pub fn root() -> Self {
        Path(Vec::new())
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// New path one segment deeper.
    pub fn child(&self, segment: PathSegment) -> Path {
        let mut segments = self.0.clone();
        segments.push(segment);
        Path(segments)
    }
}

impl From<Vec<PathSegment>> for Path {
    fn from(segments: Vec<PathSegment>) -> Self {
        Path(segments)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str(".");
        }
        self.0.iter().try_for_each(|segment| write!(f, "{}", segment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_root() {
        assert_eq!(Path::root().to_string(), ".");
    }

    #[test]
    fn test_display_mixed_segments() {
        let path = Path::root().child("items".into()).child(0usize.into()).child("name".into());
        assert_eq!(path.to_string(), ".items[0].name");
    }

    #[test]
    fn test_child_does_not_touch_parent() {
        let parent = Path::root().child("a".into());
        let child = parent.child("b".into());
        assert_eq!(parent.segments().len(), 1);
        assert_eq!(child.segments().len(), 2);
    }
}
