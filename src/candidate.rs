use std::{fmt, rc::Rc};

use crate::{
    node::Node,
    path::{Path, PathSegment},
};

/// Identifies one loaded document inside a [`crate::Documents`] store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(pub usize);

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node matched (or produced) during evaluation.
///
/// The node is a shared, immutable snapshot. When `path` is set it locates
/// the live node inside its document, so the evaluator can re-read it after
/// an assignment. Computed values have no stable location and carry no path.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub node: Rc<Node>,
    pub path: Option<Path>,
    pub document: DocumentId,
}

impl Candidate {
    /// Candidate for the root of `document`.
    pub fn root(document: DocumentId, node: Rc<Node>) -> Self {
        Candidate {
            node,
            path: Some(Path::root()),
            document,
        }
    }

    /// A free-standing value, e.g. a literal from the query.
    pub fn literal(node: Node) -> Self {
        Candidate {
            node: Rc::new(node),
            path: None,
            document: DocumentId(0),
        }
    }

    /// Derives a candidate in the same document.
    ///
    /// With a segment, the child sits one step below this candidate; without
    /// one, the child is a computed value and has no path.
    pub fn create_child(&self, segment: Option<PathSegment>, node: Node) -> Candidate {
        let path = match (segment, &self.path) {
            (Some(segment), Some(path)) => Some(path.child(segment)),
            _ => None,
        };
        Candidate {
            node: Rc::new(node),
            path,
            document: self.document,
        }
    }

    /// Path for error messages.
    pub fn path_display(&self) -> String {
        match &self.path {
            Some(path) => path.to_string(),
            None => "<computed>".to_string(),
        }
    }
}
